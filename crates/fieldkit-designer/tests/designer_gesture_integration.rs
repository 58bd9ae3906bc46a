//! Move gesture behavior: continuous commits, zero-delta invariance,
//! pointer capture, and the captured-page-size rule.

use fieldkit_core::geometry::{NormRect, PageSize, PixelRect};
use fieldkit_designer::placement::Placement;
use fieldkit_designer::viewport::MeasureTrigger;
use fieldkit_designer::DesignerState;

fn state_with_page() -> DesignerState {
    let mut state = DesignerState::new();
    state
        .viewport
        .record_measurement(MeasureTrigger::RenderComplete, 800.0, 1000.0);
    state
}

fn insert_placement(state: &mut DesignerState, rect: NormRect) -> uuid::Uuid {
    let placement = Placement::new("customer_name", 0, rect);
    let id = placement.id;
    state.store.insert(placement);
    id
}

#[test]
fn test_move_commits_on_every_pointer_move() {
    let mut state = state_with_page();
    let id = insert_placement(&mut state, NormRect::new(0.1, 0.1, 0.25, 0.05));

    assert!(state.begin_move_gesture(id, (100.0, 100.0)));
    assert!(state.interaction.has_pointer_capture());

    assert!(state.pointer_moved((150.0, 120.0)));
    // The rect is already written before pointer-up.
    let page = PageSize::new(800.0, 1000.0);
    let px = state.store.get(id).unwrap().rect.to_pixels(&page);
    assert!((px.left - 130.0).abs() < 1e-6);
    assert!((px.top - 120.0).abs() < 1e-6);
    // Width and height are unchanged by a move.
    assert!((px.width - 200.0).abs() < 1e-6);
    assert!((px.height - 50.0).abs() < 1e-6);

    assert_eq!(state.pointer_released(), Some(id));
    assert!(!state.interaction.has_pointer_capture());
}

#[test]
fn test_zero_net_pointer_delta_leaves_rect_unchanged() {
    let mut state = state_with_page();
    let rect = NormRect::new(0.1, 0.2, 0.25, 0.05);
    let id = insert_placement(&mut state, rect);

    assert!(state.begin_move_gesture(id, (300.0, 300.0)));
    state.pointer_moved((340.0, 280.0));
    state.pointer_moved((300.0, 300.0));
    state.pointer_released();

    assert_eq!(state.store.get(id).unwrap().rect, rect);
}

#[test]
fn test_second_pointer_down_during_gesture_is_ignored() {
    let mut state = state_with_page();
    let first = insert_placement(&mut state, NormRect::new(0.1, 0.1, 0.25, 0.05));
    let second = insert_placement(&mut state, NormRect::new(0.5, 0.5, 0.25, 0.05));

    assert!(state.begin_move_gesture(first, (100.0, 100.0)));
    assert!(!state.begin_move_gesture(second, (420.0, 520.0)));
    assert_eq!(state.interaction.active_placement(), Some(first));
    // The first gesture still selects the first placement.
    assert_eq!(state.selected_id(), Some(first));
}

#[test]
fn test_cancel_keeps_last_committed_rect() {
    let mut state = state_with_page();
    let id = insert_placement(&mut state, NormRect::new(0.1, 0.1, 0.25, 0.05));

    state.begin_move_gesture(id, (100.0, 100.0));
    state.pointer_moved((180.0, 160.0));
    let committed = state.store.get(id).unwrap().rect;

    assert_eq!(state.pointer_cancelled(), Some(id));
    assert!(!state.interaction.has_pointer_capture());
    assert_eq!(state.store.get(id).unwrap().rect, committed);
}

#[test]
fn test_viewport_resize_mid_gesture_does_not_shift_commits() {
    let mut state = state_with_page();
    let id = insert_placement(&mut state, NormRect::new(0.1, 0.1, 0.25, 0.05));

    state.begin_move_gesture(id, (100.0, 100.0));
    // The container resizes while the drag is in flight.
    state
        .viewport
        .record_measurement(MeasureTrigger::ContainerResize, 400.0, 500.0);
    state.pointer_moved((110.0, 110.0));
    state.pointer_released();

    // Commits keep using the 800x1000 size captured at gesture start.
    let px = state
        .store
        .get(id)
        .unwrap()
        .rect
        .to_pixels(&PageSize::new(800.0, 1000.0));
    assert!((px.left - 90.0).abs() < 1e-6);
    assert!((px.top - 110.0).abs() < 1e-6);
}

#[test]
fn test_move_with_non_finite_pointer_is_guarded() {
    let mut state = state_with_page();
    let rect = NormRect::new(0.1, 0.1, 0.25, 0.05);
    let id = insert_placement(&mut state, rect);

    state.begin_move_gesture(id, (100.0, 100.0));
    assert!(!state.pointer_moved((f64::NAN, 120.0)));
    assert!(!state.pointer_moved((f64::INFINITY, f64::INFINITY)));
    assert_eq!(state.store.get(id).unwrap().rect, rect);
}

#[test]
fn test_move_commit_stays_in_unit_range() {
    let mut state = state_with_page();
    let id = insert_placement(&mut state, NormRect::new(0.1, 0.1, 0.25, 0.05));

    state.begin_move_gesture(id, (100.0, 100.0));
    // Fast drag far outside the page; capture keeps the gesture alive.
    state.pointer_moved((-5000.0, 9000.0));
    let rect = state.store.get(id).unwrap().rect;
    for c in [rect.x, rect.y, rect.w, rect.h] {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn test_gesture_requires_measured_page() {
    let mut state = DesignerState::new();
    let placement = Placement::new("total", 0, NormRect::new(0.1, 0.1, 0.2, 0.05));
    let id = placement.id;
    state.store.insert(placement);

    assert!(!state.begin_move_gesture(id, (10.0, 10.0)));
    assert!(!state.interaction.is_active());

    // A visible region is irrelevant; the page size itself must exist.
    state.viewport.set_visible_region(PixelRect::new(0.0, 0.0, 100.0, 100.0));
    assert!(!state.begin_move_gesture(id, (10.0, 10.0)));
}

//! Copy/paste through the designer state.

use fieldkit_core::geometry::NormRect;
use fieldkit_designer::placement::Placement;
use fieldkit_designer::viewport::MeasureTrigger;
use fieldkit_designer::{BufferedSink, DesignerEvent, DesignerState, NotifyLevel};

fn state_with_page() -> DesignerState {
    let mut state = DesignerState::new();
    state
        .viewport
        .record_measurement(MeasureTrigger::RenderComplete, 800.0, 1000.0);
    state
}

#[test]
fn test_paste_offsets_position_and_regenerates_id() {
    let mut state = state_with_page();
    let source = Placement::new("invoice_no", 0, NormRect::new(0.1, 0.2, 0.3, 0.05));
    let source_id = source.id;
    state.store.insert(source);
    state.select_placement(source_id);

    assert!(state.copy_selected());
    let pasted_id = state.paste_here(0.02, 0.02).unwrap();

    assert_ne!(pasted_id, source_id);
    let pasted = state.store.get(pasted_id).unwrap();
    assert!((pasted.rect.x - 0.12).abs() < 1e-9);
    assert!((pasted.rect.y - 0.22).abs() < 1e-9);
    assert_eq!(pasted.rect.w, 0.3);
    assert_eq!(pasted.rect.h, 0.05);
    // The paste becomes the selection.
    assert_eq!(state.selected_id(), Some(pasted_id));
}

#[test]
fn test_paste_targets_the_current_page() {
    let mut state = state_with_page();
    let source = Placement::new("invoice_no", 0, NormRect::new(0.1, 0.2, 0.3, 0.05));
    let source_id = source.id;
    state.store.insert(source);
    state.select_placement(source_id);
    state.copy_selected();

    state.set_current_page(3);
    state
        .viewport
        .record_measurement(MeasureTrigger::PageChange, 800.0, 1000.0);
    let pasted_id = state.paste_here(0.02, 0.02).unwrap();

    assert_eq!(state.store.get(pasted_id).unwrap().page_index, 3);
    assert_eq!(state.store.get(source_id).unwrap().page_index, 0);
}

#[test]
fn test_empty_clipboard_paste_warns_and_changes_nothing() {
    let sink = BufferedSink::new();
    let mut state = DesignerState::with_sink(Box::new(sink.handle()));
    state
        .viewport
        .record_measurement(MeasureTrigger::RenderComplete, 800.0, 1000.0);

    assert!(!state.clipboard.has_contents());
    assert!(state.paste_here(0.02, 0.02).is_none());
    assert!(state.store.is_empty());
    assert!(!state.is_modified);

    let events = sink.take();
    assert!(events.iter().any(|e| matches!(
        e,
        DesignerEvent::Notify {
            level: NotifyLevel::Warning,
            ..
        }
    )));
}

#[test]
fn test_copy_is_a_value_copy() {
    let mut state = state_with_page();
    let source = Placement::new("invoice_no", 0, NormRect::new(0.1, 0.2, 0.3, 0.05));
    let source_id = source.id;
    state.store.insert(source);
    state.select_placement(source_id);
    state.copy_selected();

    // Mutating (or deleting) the original after copy does not affect the
    // clipboard contents.
    state.delete_selected();
    let pasted_id = state.paste_here(0.0, 0.0).unwrap();
    let pasted = state.store.get(pasted_id).unwrap();
    assert_eq!(pasted.field_key, "invoice_no");
    assert_eq!(pasted.rect.x, 0.1);
}

//! Keyboard shortcut routing.
//!
//! One router is active while the designer is mounted; the host enables
//! it on mount and disables it on unmount rather than registering a true
//! process-wide listener. While focus sits on any text-entry element the
//! router matches nothing, so normal typing is never hijacked.

/// A key as the host reports it, already stripped of layout concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character ("c", "v", ...). Case-insensitive match.
    Char(char),
    Delete,
    Backspace,
    Escape,
}

/// One keydown as seen by the router.
#[derive(Debug, Clone, Copy)]
pub struct KeyInput {
    pub key: Key,
    /// Ctrl on most platforms, Cmd on macOS.
    pub ctrl_or_meta: bool,
    /// True when an input, textarea, or content-editable element has
    /// focus.
    pub text_entry_focused: bool,
}

/// Designer action a shortcut maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Copy,
    Paste,
    DeleteSelection,
    ClearSelection,
}

/// Maps keydowns to designer actions.
#[derive(Debug, Clone, Default)]
pub struct KeyboardRouter {
    enabled: bool,
}

impl KeyboardRouter {
    /// Creates a router in the unmounted (disabled) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables routing; called when the designer mounts.
    pub fn mount(&mut self) {
        self.enabled = true;
    }

    /// Disables routing; called when the designer unmounts.
    pub fn unmount(&mut self) {
        self.enabled = false;
    }

    /// Returns true while the router is mounted.
    pub fn is_mounted(&self) -> bool {
        self.enabled
    }

    /// Maps a keydown to an action. Returns `None` when unmounted, when a
    /// text-entry element has focus, or when no binding matches. Whether
    /// the platform default should be suppressed is decided by the caller
    /// once it knows the action's precondition held.
    pub fn route(&self, input: KeyInput) -> Option<ShortcutAction> {
        if !self.enabled || input.text_entry_focused {
            return None;
        }
        match input.key {
            Key::Char(c) if input.ctrl_or_meta && c.eq_ignore_ascii_case(&'c') => {
                Some(ShortcutAction::Copy)
            }
            Key::Char(c) if input.ctrl_or_meta && c.eq_ignore_ascii_case(&'v') => {
                Some(ShortcutAction::Paste)
            }
            Key::Delete | Key::Backspace if !input.ctrl_or_meta => {
                Some(ShortcutAction::DeleteSelection)
            }
            Key::Escape => Some(ShortcutAction::ClearSelection),
            _ => None,
        }
    }
}

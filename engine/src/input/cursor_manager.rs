//! Cursor Manager Module
//!
//! Host-side bookkeeping for the mouse-look cursor: whether it is captured,
//! whether the window has focus, and whether the cursor is inside the window.
//! Together these decide [`PointerHost::has_pointer_focus`](super::PointerHost).
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cursor = CursorManager::new();
//!
//! // ESC pressed: stop steering the camera, show the cursor
//! cursor.handle_escape();
//!
//! // Left-click when released: capture again
//! cursor.handle_left_click();
//!
//! if cursor.is_dirty() {
//!     window.set_cursor_visible(cursor.should_cursor_be_visible());
//!     cursor.clear_dirty();
//! }
//! ```

/// Actions that the CursorManager recommends after handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No action needed
    None,
    /// Cursor visibility changed; push it to the window
    ApplyState,
}

/// Tracks cursor capture and focus for mouse look.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether mouse look owns the cursor (hidden, re-centered every tick)
    captured: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Whether the cursor is currently inside the window
    cursor_in_window: bool,
    /// Tracks if state changed and needs to be applied to the window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a manager with the cursor captured, as the rig starts in mouse-look.
    pub fn new() -> Self {
        Self {
            captured: true,
            has_focus: true,
            cursor_in_window: true,
            state_dirty: true,
        }
    }

    /// Whether mouse look currently owns the cursor.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Check if the window has focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if the cursor is inside the window.
    pub fn is_cursor_in_window(&self) -> bool {
        self.cursor_in_window
    }

    /// Pointer focus as mouse look sees it: captured, focused and inside.
    pub fn has_pointer_focus(&self) -> bool {
        self.captured && self.has_focus && self.cursor_in_window
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    /// Give the cursor to mouse look.
    pub fn capture(&mut self) {
        if !self.captured {
            self.captured = true;
            self.state_dirty = true;
        }
    }

    /// Hand the cursor back to the user.
    pub fn release(&mut self) {
        if self.captured {
            self.captured = false;
            self.state_dirty = true;
        }
    }

    /// Handle ESC key press: release the cursor.
    pub fn handle_escape(&mut self) -> CursorAction {
        if self.captured {
            self.release();
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Handle left-click: re-capture if released.
    pub fn handle_left_click(&mut self) -> CursorAction {
        if !self.captured {
            self.capture();
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Handle window focus change.
    ///
    /// Capture preference survives focus loss and is restored on regain.
    pub fn handle_focus(&mut self, focused: bool) -> CursorAction {
        self.has_focus = focused;
        if focused {
            self.state_dirty = true;
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Handle cursor entering the window.
    pub fn handle_cursor_enter(&mut self) -> CursorAction {
        self.cursor_in_window = true;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// Handle cursor leaving the window.
    pub fn handle_cursor_leave(&mut self) {
        self.cursor_in_window = false;
    }

    /// Cursor is hidden only while captured and focused.
    pub fn should_cursor_be_visible(&self) -> bool {
        !(self.captured && self.has_focus)
    }

    /// Short status line for the window title.
    pub fn status_message(&self) -> &'static str {
        if self.captured {
            "ESC to release cursor"
        } else {
            "click to look around"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_captured() {
        let cursor = CursorManager::new();
        assert!(cursor.is_captured());
        assert!(cursor.has_pointer_focus());
        assert!(cursor.is_dirty());
    }

    #[test]
    fn test_escape_then_click() {
        let mut cursor = CursorManager::new();
        cursor.clear_dirty();

        assert_eq!(cursor.handle_escape(), CursorAction::ApplyState);
        assert!(!cursor.has_pointer_focus());
        assert!(cursor.is_dirty());
        assert_eq!(cursor.handle_escape(), CursorAction::None);

        assert_eq!(cursor.handle_left_click(), CursorAction::ApplyState);
        assert!(cursor.has_pointer_focus());
        assert_eq!(cursor.handle_left_click(), CursorAction::None);
    }

    #[test]
    fn test_focus_loss_blocks_pointer_focus() {
        let mut cursor = CursorManager::new();

        assert_eq!(cursor.handle_focus(false), CursorAction::None);
        assert!(!cursor.has_pointer_focus());
        assert!(cursor.is_captured());
        assert!(cursor.should_cursor_be_visible());

        assert_eq!(cursor.handle_focus(true), CursorAction::ApplyState);
        assert!(cursor.has_pointer_focus());
        assert!(!cursor.should_cursor_be_visible());
    }

    #[test]
    fn test_cursor_leave_blocks_pointer_focus() {
        let mut cursor = CursorManager::new();

        cursor.handle_cursor_leave();
        assert!(!cursor.is_cursor_in_window());
        assert!(!cursor.has_pointer_focus());

        assert_eq!(cursor.handle_cursor_enter(), CursorAction::ApplyState);
        assert!(cursor.has_pointer_focus());
    }

    #[test]
    fn test_status_message() {
        let mut cursor = CursorManager::new();
        assert!(cursor.status_message().contains("ESC"));

        cursor.release();
        assert!(cursor.status_message().contains("click"));
    }
}

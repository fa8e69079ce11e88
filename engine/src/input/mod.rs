//! Input Module
//!
//! Platform-agnostic input handling for the camera rig. Hosts translate their
//! native key codes into [`KeyCode`] and implement [`PointerHost`]; the rig only
//! ever reads [`KeyState`] and the pointer trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use first_person_rig_engine::input::{Key, KeyBindings, KeyCode, KeyState};
//!
//! let bindings = KeyBindings::new();
//! let mut keys = KeyState::new();
//!
//! if let Some(key) = bindings.get_key(KeyCode::W) {
//!     keys.set_key(key, true);
//! }
//! assert!(keys.is_pressed(Key::Forward));
//! ```

pub mod bindings;
pub mod cursor_manager;
pub mod keyboard;
pub mod pointer;

// Re-export commonly used types at module level
pub use bindings::KeyBindings;
pub use cursor_manager::{CursorAction, CursorManager};
pub use keyboard::{KEY_COUNT, Key, KeyCode, KeyState, UnknownKey};
pub use pointer::{PointerHost, VirtualPointer};

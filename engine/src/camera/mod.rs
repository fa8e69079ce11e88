//! Camera Module
//!
//! The shared camera transform and the mouse-look controller that steers it.
//! This module is window-system agnostic - the cursor is reached through
//! [`PointerHost`](crate::input::PointerHost).

pub mod mouse_look;
pub mod transform;

pub use mouse_look::{
    MOUSE_SENSITIVITY, MouseLookController, OrientationState, PITCH_MAX, PITCH_MIN,
};
pub use transform::CameraTransform;

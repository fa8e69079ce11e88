//! Player Module
//!
//! Keyboard-driven camera motion.
//!
//! # Components
//!
//! - [`PlanarMotionController`] - WASD translation in camera space with sprint
//! - [`VerticalMotionController`] - Per-tick gravity, ground clamp and held-jump re-launch

pub mod planar_motion;
pub mod vertical_motion;

pub use planar_motion::{BASE_SPEED, PlanarMotionController, SPRINT_MULTIPLIER};
pub use vertical_motion::{
    GRAVITY, GROUND_HEIGHT, JUMP_STRENGTH, VerticalEvent, VerticalMotionController, VerticalState,
};

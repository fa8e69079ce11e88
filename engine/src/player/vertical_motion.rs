//! Vertical Motion Controller
//!
//! Per-tick gravity, ground clamping and jumping.
//!
//! # Tick Order
//!
//! 1. `vertical_speed += gravity` (always, also while grounded)
//! 2. `z += vertical_speed`
//! 3. `z <= ground_height`: snap to the ground, zero the speed, mark grounded,
//!    then jump if the jump key is held
//! 4. otherwise: mark airborne
//!
//! Holding jump therefore re-launches on the very tick of every landing, and
//! grounded is never observed true at the end of a tick while jump is held.

use tracing::debug;

use crate::camera::CameraTransform;
use crate::config::RigConfig;
use crate::input::{Key, KeyState};

/// Default change in vertical speed per tick (units/tick²)
pub const GRAVITY: f32 = -0.02;

/// Default vertical speed set by a jump (units/tick)
pub const JUMP_STRENGTH: f32 = 0.5;

/// Default camera height when standing on the ground
pub const GROUND_HEIGHT: f32 = 1.0;

/// Vertical speed and grounded flag, owned by [`VerticalMotionController`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VerticalState {
    /// Units per tick, positive = up
    pub vertical_speed: f32,
    /// Whether the last tick ended clamped to the ground
    pub grounded: bool,
}

/// Result of one vertical tick, for callers that react to transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEvent {
    /// Still in the air
    Airborne,
    /// Touched the ground and stayed there
    Landed,
    /// Touched the ground and jumped again in the same tick
    Jumped,
}

/// Gravity and jump controller.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalMotionController {
    state: VerticalState,
    /// Added to the vertical speed every tick
    gravity: f32,
    /// Vertical speed after a jump
    jump_strength: f32,
    /// Height the camera is clamped to
    ground_height: f32,
}

impl Default for VerticalMotionController {
    fn default() -> Self {
        Self::with_physics(GRAVITY, JUMP_STRENGTH, GROUND_HEIGHT)
    }
}

impl VerticalMotionController {
    /// Create a controller with default settings, airborne and at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom gravity, jump strength and ground height.
    pub fn with_physics(gravity: f32, jump_strength: f32, ground_height: f32) -> Self {
        Self {
            state: VerticalState::default(),
            gravity,
            jump_strength,
            ground_height,
        }
    }

    /// Create a controller from rig configuration.
    pub fn from_config(config: &RigConfig) -> Self {
        Self::with_physics(config.gravity, config.jump_strength, config.ground_height)
    }

    /// Current vertical speed and grounded flag.
    #[inline]
    pub fn state(&self) -> VerticalState {
        self.state
    }

    /// Overwrite the vertical state (teleports, tests).
    pub fn set_state(&mut self, state: VerticalState) {
        self.state = state;
    }

    /// Check if the camera is grounded.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    /// Get the current vertical speed.
    #[inline]
    pub fn vertical_speed(&self) -> f32 {
        self.state.vertical_speed
    }

    /// Get the gravity setting.
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Get the jump strength setting.
    pub fn jump_strength(&self) -> f32 {
        self.jump_strength
    }

    /// Get the ground height setting.
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Attempt to jump. Returns true if the jump was initiated.
    ///
    /// Only a grounded camera can jump; otherwise nothing changes.
    pub fn jump(&mut self) -> bool {
        if self.state.grounded {
            self.state.vertical_speed = self.jump_strength;
            self.state.grounded = false;
            true
        } else {
            false
        }
    }

    /// Run one tick against `transform`.
    pub fn on_tick(&mut self, keys: &KeyState, transform: &mut CameraTransform) -> VerticalEvent {
        self.state.vertical_speed += self.gravity;
        transform.set_z(transform.z() + self.state.vertical_speed);

        if transform.z() <= self.ground_height {
            let was_grounded = self.state.grounded;
            transform.set_z(self.ground_height);
            self.state.vertical_speed = 0.0;
            self.state.grounded = true;

            if keys.is_pressed(Key::Jump) && self.jump() {
                debug!(vertical_speed = self.state.vertical_speed, "jump_triggered");
                return VerticalEvent::Jumped;
            }
            if !was_grounded {
                debug!(height = self.ground_height, "landed");
            }
            VerticalEvent::Landed
        } else {
            self.state.grounded = false;
            VerticalEvent::Airborne
        }
    }

    /// Reset to the initial state: airborne with zero vertical speed.
    pub fn reset(&mut self) {
        self.state = VerticalState::default();
    }
}

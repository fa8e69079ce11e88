//! Planar Motion Controller
//!
//! WASD translation in camera space. Each tick builds a displacement in the
//! camera's own axes and applies it through
//! [`CameraTransform::translate_relative`], so "forward" follows both heading
//! and pitch.
//!
//! # Movement Model
//!
//! - Fixed displacement per tick, no acceleration or velocity
//! - Base speed: 0.3 units/tick
//! - Sprint multiplies speed by 2
//! - Axes combine without normalization: diagonals are √2 faster

use glam::Vec3;
use tracing::trace;

use crate::camera::CameraTransform;
use crate::config::RigConfig;
use crate::input::{Key, KeyState};

/// Default displacement per tick along each held axis
pub const BASE_SPEED: f32 = 0.3;

/// Default speed multiplier while sprint is held
pub const SPRINT_MULTIPLIER: f32 = 2.0;

/// Translates the camera from held movement keys.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarMotionController {
    /// Units per tick per held axis
    base_speed: f32,
    /// Applied to `base_speed` while sprint is held
    sprint_multiplier: f32,
}

impl Default for PlanarMotionController {
    fn default() -> Self {
        Self::with_speed(BASE_SPEED, SPRINT_MULTIPLIER)
    }
}

impl PlanarMotionController {
    /// Create a controller with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom speed settings.
    pub fn with_speed(base_speed: f32, sprint_multiplier: f32) -> Self {
        Self {
            base_speed,
            sprint_multiplier,
        }
    }

    /// Create a controller from rig configuration.
    pub fn from_config(config: &RigConfig) -> Self {
        Self::with_speed(config.base_speed, config.sprint_multiplier)
    }

    /// Get the base speed setting.
    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// Get the sprint multiplier setting.
    pub fn sprint_multiplier(&self) -> f32 {
        self.sprint_multiplier
    }

    /// Speed for this tick given the sprint key.
    #[inline]
    pub fn speed(&self, keys: &KeyState) -> f32 {
        if keys.is_pressed(Key::Sprint) {
            self.base_speed * self.sprint_multiplier
        } else {
            self.base_speed
        }
    }

    /// Displacement in camera-local axes for the held keys.
    ///
    /// Opposite keys cancel; perpendicular keys add up unnormalized.
    pub fn local_displacement(&self, keys: &KeyState) -> Vec3 {
        let speed = self.speed(keys);
        let mut direction = Vec3::ZERO;

        if keys.is_pressed(Key::Forward) {
            direction += Vec3::new(0.0, speed, 0.0);
        }
        if keys.is_pressed(Key::Backward) {
            direction += Vec3::new(0.0, -speed, 0.0);
        }
        if keys.is_pressed(Key::Left) {
            direction += Vec3::new(-speed, 0.0, 0.0);
        }
        if keys.is_pressed(Key::Right) {
            direction += Vec3::new(speed, 0.0, 0.0);
        }

        direction
    }

    /// Run one tick: move the camera by [`Self::local_displacement`] in its own axes.
    ///
    /// Returns the local displacement that was applied.
    pub fn on_tick(&self, keys: &KeyState, transform: &mut CameraTransform) -> Vec3 {
        let local = self.local_displacement(keys);
        if local != Vec3::ZERO {
            transform.translate_relative(local);
            trace!(?local, position = ?transform.position(), "planar_motion");
        }
        local
    }
}

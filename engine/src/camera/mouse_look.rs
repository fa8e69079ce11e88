//! Mouse Look Controller Module
//!
//! Turns cursor displacement from the window center into heading and pitch.
//! The cursor is warped back to the center every tick, so the displacement
//! read on the next tick is exactly the user's motion since this one.
//!
//! Key features:
//! - Sensitivity in degrees per pixel (default: 0.2)
//! - Pitch clamped to [-60, 60] degrees by default
//! - Moving the mouse right turns right (heading decreases)
//! - Moving the mouse down looks down (pitch decreases)
//! - NO smoothing

use tracing::trace;

use super::CameraTransform;
use crate::config::RigConfig;
use crate::input::PointerHost;

/// Default mouse sensitivity in degrees per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.2;
/// Default lowest pitch in degrees
pub const PITCH_MIN: f32 = -60.0;
/// Default highest pitch in degrees
pub const PITCH_MAX: f32 = 60.0;

/// Heading and pitch in degrees, owned by [`MouseLookController`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationState {
    /// Rotation about +Z, unrestricted
    pub heading: f32,
    /// Rotation about camera +X, always within the controller's pitch limits
    pub pitch: f32,
}

/// Mouse look controller.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = MouseLookController::new();
///
/// // Once per tick
/// look.on_tick(&mut pointer, &mut transform);
/// ```
#[derive(Clone, Debug)]
pub struct MouseLookController {
    orientation: OrientationState,
    /// Degrees of rotation per pixel of cursor displacement
    sensitivity: f32,
    /// Pitch limits (min, max) in degrees
    pitch_limits: (f32, f32),
    /// Pointer device index to read and warp
    device: usize,
}

impl Default for MouseLookController {
    fn default() -> Self {
        Self::from_config(&RigConfig::default())
    }
}

impl MouseLookController {
    /// Create a controller with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller from rig configuration.
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            orientation: OrientationState::default(),
            sensitivity: config.mouse_sensitivity,
            pitch_limits: (config.pitch_min, config.pitch_max),
            device: config.pointer_device,
        }
    }

    /// Current heading and pitch.
    #[inline]
    pub fn orientation(&self) -> OrientationState {
        self.orientation
    }

    /// Degrees per pixel.
    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Pitch limits in degrees (min, max).
    #[inline]
    pub fn pitch_limits(&self) -> (f32, f32) {
        self.pitch_limits
    }

    /// Apply a cursor displacement in pixels.
    ///
    /// `dx` positive = cursor right of center = turn right.
    /// `dy` positive = cursor below center = look down.
    pub fn apply_pointer_delta(&mut self, dx: f32, dy: f32) {
        self.orientation.heading -= dx * self.sensitivity;
        self.orientation.pitch -= dy * self.sensitivity;
        self.orientation.pitch = self
            .orientation
            .pitch
            .clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Run one tick.
    ///
    /// Does nothing at all without pointer focus. Otherwise reads the cursor,
    /// rotates, writes (heading, pitch, 0) to `transform` and re-centers the
    /// cursor. A refused re-center is ignored.
    pub fn on_tick(&mut self, pointer: &mut dyn PointerHost, transform: &mut CameraTransform) {
        if !pointer.has_pointer_focus() {
            return;
        }

        let (x, y) = pointer.pointer_position(self.device);
        let (center_x, center_y) = pointer.window_center();
        let (dx, dy) = (x - center_x, y - center_y);

        self.apply_pointer_delta(dx, dy);
        transform.set_orientation(self.orientation.heading, self.orientation.pitch, 0.0);

        let _ = pointer.move_pointer(self.device, center_x, center_y);

        if dx != 0.0 || dy != 0.0 {
            trace!(
                dx,
                dy,
                heading = self.orientation.heading,
                pitch = self.orientation.pitch,
                "mouse_look"
            );
        }
    }

    /// Reset heading and pitch to zero.
    pub fn reset_orientation(&mut self) {
        self.orientation = OrientationState::default();
    }
}

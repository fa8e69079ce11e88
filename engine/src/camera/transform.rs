//! Camera Transform
//!
//! The single transform every rig stage reads and writes.
//!
//! # Coordinate System
//! - +X = right
//! - +Y = forward
//! - +Z = up
//!
//! Orientation is heading/pitch/roll in degrees. Heading turns about +Z
//! (positive = turn left), pitch about the camera's +X (positive = look up),
//! roll about the camera's +Y. A camera-local vector `v` maps to world space as
//! `Rz(heading) * Rx(pitch) * Ry(roll) * v`.

use glam::{Quat, Vec3};

/// Camera position and orientation shared by the rig stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Position in world space
    position: Vec3,
    /// Rotation about +Z in degrees
    heading: f32,
    /// Rotation about the camera's +X in degrees
    pitch: f32,
    /// Rotation about the camera's +Y in degrees
    roll: f32,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl CameraTransform {
    /// Create a level transform at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Get the position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the position.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Height component of the position.
    #[inline]
    pub fn z(&self) -> f32 {
        self.position.z
    }

    /// Overwrite only the height component.
    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
    }

    /// Heading, pitch and roll in degrees.
    #[inline]
    pub fn orientation(&self) -> (f32, f32, f32) {
        (self.heading, self.pitch, self.roll)
    }

    /// Set heading, pitch and roll in degrees.
    #[inline]
    pub fn set_orientation(&mut self, heading: f32, pitch: f32, roll: f32) {
        self.heading = heading;
        self.pitch = pitch;
        self.roll = roll;
    }

    /// Rotation taking camera-local vectors to world space.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.heading.to_radians())
            * Quat::from_rotation_x(self.pitch.to_radians())
            * Quat::from_rotation_y(self.roll.to_radians())
    }

    /// Convert a camera-local vector to world space.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.rotation() * local
    }

    /// Move by `local`, expressed in the camera's own axes.
    pub fn translate_relative(&mut self, local: Vec3) {
        self.position += self.to_world(local);
    }

    /// Direction the camera looks (camera +Y in world space).
    pub fn forward(&self) -> Vec3 {
        self.to_world(Vec3::Y)
    }

    /// Camera +X in world space.
    pub fn right(&self) -> Vec3 {
        self.to_world(Vec3::X)
    }

    /// Camera +Z in world space.
    pub fn up(&self) -> Vec3 {
        self.to_world(Vec3::Z)
    }
}

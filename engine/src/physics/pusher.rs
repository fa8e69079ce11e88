//! Collision pusher
//!
//! Keeps the camera out of solid geometry after the motion stages have moved
//! it. The camera is treated as a sphere; every overlapping solid pushes the
//! sphere center back out along the contact normal. There is no velocity
//! response: vertical speed is owned by the vertical motion stage.
//!
//! # Example
//!
//! ```ignore
//! use first_person_rig_engine::physics::{Collider, CollisionPusher, SpherePusher};
//! use glam::Vec3;
//!
//! // Unit sphere on a floor at z = 0, plus a crate
//! let mut pusher = SpherePusher::with_ground_plane(1.0, 0.0);
//! pusher.add_collider(Collider::Aabb {
//!     min: Vec3::new(4.0, 4.0, 0.0),
//!     max: Vec3::new(6.0, 6.0, 2.0),
//! });
//!
//! pusher.push(&mut transform);
//! ```

use glam::Vec3;
use tracing::trace;

use crate::camera::CameraTransform;

/// Corrects the camera position after motion.
pub trait CollisionPusher {
    /// Move `transform` out of any solid it overlaps. Returns true if it moved.
    fn push(&self, transform: &mut CameraTransform) -> bool;
}

/// Static solid geometry the camera sphere is pushed out of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Half-space `normal · p <= distance` is solid. `normal` must be unit length.
    Plane { normal: Vec3, distance: f32 },
    /// Axis-aligned box.
    Aabb { min: Vec3, max: Vec3 },
}

impl Collider {
    /// Floor plane at height `z` with +Z up.
    pub fn ground(z: f32) -> Self {
        Collider::Plane {
            normal: Vec3::Z,
            distance: z,
        }
    }

    /// Offset that moves a sphere at `center` with `radius` out of this solid,
    /// or `None` when they do not overlap.
    pub fn resolve_sphere(&self, center: Vec3, radius: f32) -> Option<Vec3> {
        match *self {
            Collider::Plane { normal, distance } => {
                let signed_distance = normal.dot(center) - distance;
                if signed_distance < radius {
                    Some(normal * (radius - signed_distance))
                } else {
                    None
                }
            }
            Collider::Aabb { min, max } => {
                let closest = center.clamp(min, max);
                let offset = center - closest;
                let distance = offset.length();

                if distance >= radius {
                    None
                } else if distance > 1e-6 {
                    Some(offset / distance * (radius - distance))
                } else {
                    Some(aabb_exit_offset(center, min, max, radius))
                }
            }
        }
    }
}

/// Offset for a sphere whose center is inside the box: leave through the
/// nearest face.
fn aabb_exit_offset(center: Vec3, min: Vec3, max: Vec3, radius: f32) -> Vec3 {
    let exits = [
        (center.x - min.x, Vec3::NEG_X),
        (max.x - center.x, Vec3::X),
        (center.y - min.y, Vec3::NEG_Y),
        (max.y - center.y, Vec3::Y),
        (center.z - min.z, Vec3::NEG_Z),
        (max.z - center.z, Vec3::Z),
    ];

    let (depth, normal) = exits
        .into_iter()
        .fold((f32::MAX, Vec3::Z), |best, exit| if exit.0 < best.0 { exit } else { best });

    normal * (depth + radius)
}

/// Sphere collider attached to the camera, resolved against static solids.
#[derive(Debug, Clone, PartialEq)]
pub struct SpherePusher {
    /// Radius of the camera sphere
    radius: f32,
    /// Solids to stay out of, resolved in insertion order
    colliders: Vec<Collider>,
}

impl SpherePusher {
    /// Create a pusher with no solids.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            colliders: Vec::new(),
        }
    }

    /// Create a pusher with a single floor plane at height `ground_z`.
    pub fn with_ground_plane(radius: f32, ground_z: f32) -> Self {
        let mut pusher = Self::new(radius);
        pusher.add_collider(Collider::ground(ground_z));
        pusher
    }

    /// Add a solid.
    pub fn add_collider(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Registered solids.
    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }
}

impl CollisionPusher for SpherePusher {
    fn push(&self, transform: &mut CameraTransform) -> bool {
        let mut center = transform.position();
        let mut moved = false;

        for collider in &self.colliders {
            if let Some(offset) = collider.resolve_sphere(center, self.radius) {
                center += offset;
                moved = true;
            }
        }

        if moved {
            trace!(from = ?transform.position(), to = ?center, "collision_push");
            transform.set_position(center);
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_sphere_above_plane_untouched() {
        let pusher = SpherePusher::with_ground_plane(1.0, 0.0);
        let mut transform = CameraTransform::new(Vec3::new(3.0, 4.0, 1.0));

        assert!(!pusher.push(&mut transform));
        assert_eq!(transform.position(), Vec3::new(3.0, 4.0, 1.0));
    }

    #[test]
    fn test_sphere_in_plane_pushed_up() {
        let pusher = SpherePusher::with_ground_plane(1.0, 0.0);
        let mut transform = CameraTransform::new(Vec3::new(3.0, 4.0, 0.25));

        assert!(pusher.push(&mut transform));
        assert!(approx(transform.position(), Vec3::new(3.0, 4.0, 1.0)));
    }

    #[test]
    fn test_sphere_below_plane_pushed_to_surface() {
        let pusher = SpherePusher::with_ground_plane(0.5, 2.0);
        let mut transform = CameraTransform::new(Vec3::new(0.0, 0.0, -3.0));

        assert!(pusher.push(&mut transform));
        assert!(approx(transform.position(), Vec3::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn test_sphere_touching_box_face() {
        let mut pusher = SpherePusher::new(1.0);
        pusher.add_collider(Collider::Aabb {
            min: Vec3::new(-1.0, -1.0, -1.0),
            max: Vec3::new(1.0, 1.0, 1.0),
        });

        let mut transform = CameraTransform::new(Vec3::new(1.5, 0.0, 0.0));
        assert!(pusher.push(&mut transform));
        assert!(approx(transform.position(), Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_center_inside_box_leaves_nearest_face() {
        let mut pusher = SpherePusher::new(1.0);
        pusher.add_collider(Collider::Aabb {
            min: Vec3::new(0.0, 0.0, 0.0),
            max: Vec3::new(4.0, 4.0, 2.0),
        });

        let mut transform = CameraTransform::new(Vec3::new(2.0, 2.0, 1.8));
        assert!(pusher.push(&mut transform));
        assert!(approx(transform.position(), Vec3::new(2.0, 2.0, 3.0)));
    }

    #[test]
    fn test_clear_of_box() {
        let mut pusher = SpherePusher::new(1.0);
        pusher.add_collider(Collider::Aabb {
            min: Vec3::new(-1.0, -1.0, -1.0),
            max: Vec3::new(1.0, 1.0, 1.0),
        });

        let mut transform = CameraTransform::new(Vec3::new(2.5, 0.0, 0.0));
        assert!(!pusher.push(&mut transform));
    }

    #[test]
    fn test_colliders_resolved_in_order() {
        let mut pusher = SpherePusher::with_ground_plane(1.0, 0.0);
        pusher.add_collider(Collider::Aabb {
            min: Vec3::new(-1.0, 2.0, -5.0),
            max: Vec3::new(1.0, 3.0, 5.0),
        });
        assert_eq!(pusher.colliders().len(), 2);

        let mut transform = CameraTransform::new(Vec3::new(0.0, 1.5, 0.5));
        assert!(pusher.push(&mut transform));

        let position = transform.position();
        assert!((position.z - 1.0).abs() < 1e-5);
        assert!((position.y - 1.0).abs() < 1e-5);
    }
}

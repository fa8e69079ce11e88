//! Physics module
//!
//! Only collision correction lives here: the rig's gravity and jumping are
//! per-tick integrators in [`crate::player`], not a physics simulation.
//!
//! # Unit System
//!
//! Distances are world units; the camera sphere defaults to radius 1 so that
//! standing on the floor plane z = 0 puts the eye at the ground height of 1.
//!
//! # Submodules
//!
//! - [`pusher`] - Sphere-vs-static-solid push-out ([`CollisionPusher`], [`SpherePusher`])

pub mod pusher;

pub use pusher::{Collider, CollisionPusher, SpherePusher};

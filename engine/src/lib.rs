//! First-Person Rig Engine
//!
//! A window-system agnostic first-person camera rig: mouse look, WASD planar
//! motion with sprint, gravity with held-jump re-launch, and a collision
//! pusher that keeps the camera sphere out of solids.
//!
//! # Modules
//!
//! - [`input`] - Logical keys, key bindings, cursor capture and the pointer host trait
//! - [`camera`] - Camera transform and mouse look
//! - [`player`] - Planar and vertical motion
//! - [`physics`] - Post-motion collision correction
//! - [`config`] - JSON-backed rig configuration
//! - [`rig`] - Tick order and the [`CameraRig`] session
//!
//! # Example
//!
//! ```ignore
//! use first_person_rig_engine::{CameraRig, Key, RigConfig, VirtualPointer};
//!
//! let mut rig = CameraRig::new(&RigConfig::default());
//! let mut pointer = VirtualPointer::new(1280, 720);
//!
//! rig.set_key(Key::Forward, true);
//! pointer.move_by(25.0, 0.0);
//!
//! // One frame
//! rig.tick(&mut pointer);
//! let position = rig.transform().position();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod rig;

// Re-export the types a host needs to drive a rig
pub use camera::{CameraTransform, MouseLookController, OrientationState};
pub use config::{ConfigError, RigConfig, WindowConfig};
pub use input::{
    CursorAction, CursorManager, Key, KeyBindings, KeyCode, KeyState, PointerHost, UnknownKey,
    VirtualPointer,
};
pub use physics::{Collider, CollisionPusher, SpherePusher};
pub use player::{PlanarMotionController, VerticalEvent, VerticalMotionController, VerticalState};
pub use rig::{CameraRig, FrameRateMeter, TICK_ORDER, TickReport, TickStage};

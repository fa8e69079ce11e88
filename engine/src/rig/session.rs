//! Camera rig session
//!
//! [`CameraRig`] owns every piece of per-camera state: held keys, bindings,
//! the three motion controllers, the camera transform and the collision
//! pusher. The host feeds it key events and calls [`CameraRig::tick`] once
//! per frame.

use std::fmt;

use tracing::{debug, trace};

use super::{TICK_ORDER, TickStage};
use crate::camera::{CameraTransform, MouseLookController, OrientationState};
use crate::config::RigConfig;
use crate::input::{Key, KeyBindings, KeyCode, KeyState, PointerHost};
use crate::physics::{CollisionPusher, SpherePusher};
use crate::player::{PlanarMotionController, VerticalEvent, VerticalMotionController, VerticalState};

/// Summary of one tick, returned by [`CameraRig::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Camera-local displacement applied by planar motion
    pub planar_displacement: glam::Vec3,
    /// Outcome of the vertical stage
    pub vertical: VerticalEvent,
    /// Whether the collision pusher moved the camera
    pub pushed: bool,
}

/// First-person camera session.
pub struct CameraRig {
    keys: KeyState,
    bindings: KeyBindings,
    mouse_look: MouseLookController,
    planar: PlanarMotionController,
    vertical: VerticalMotionController,
    transform: CameraTransform,
    pusher: Option<Box<dyn CollisionPusher>>,
    ticks: u64,
}

impl fmt::Debug for CameraRig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CameraRig")
            .field("keys", &self.keys)
            .field("transform", &self.transform)
            .field("orientation", &self.mouse_look.orientation())
            .field("vertical", &self.vertical.state())
            .field("has_pusher", &self.pusher.is_some())
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(&RigConfig::default())
    }
}

impl CameraRig {
    /// Build a rig from configuration.
    ///
    /// The camera starts at `config.start_position`, airborne with zero
    /// vertical speed, looking along +Y. The default pusher is the camera
    /// sphere against the configured ground plane.
    pub fn new(config: &RigConfig) -> Self {
        let pusher = SpherePusher::with_ground_plane(config.collider_radius, config.ground_plane_z);

        Self {
            keys: KeyState::new(),
            bindings: config.key_bindings(),
            mouse_look: MouseLookController::from_config(config),
            planar: PlanarMotionController::from_config(config),
            vertical: VerticalMotionController::from_config(config),
            transform: CameraTransform::new(config.start_position),
            pusher: Some(Box::new(pusher)),
            ticks: 0,
        }
    }

    /// Route a host key event through the bindings.
    ///
    /// Returns false for codes that are not bound to any logical key.
    pub fn handle_key_code(&mut self, code: KeyCode, pressed: bool) -> bool {
        match self.bindings.get_key(code) {
            Some(key) => {
                self.keys.set_key(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Set a logical key directly.
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        self.keys.set_key(key, pressed);
    }

    /// Held keys.
    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Release every held key (e.g. on focus loss).
    pub fn release_all_keys(&mut self) {
        self.keys.reset();
    }

    /// Current key bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mutable key bindings for remapping at runtime.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Jump now if grounded. Returns whether the jump triggered.
    pub fn jump(&mut self) -> bool {
        self.vertical.jump()
    }

    /// Replace the collision pusher, or disable collision with `None`.
    pub fn set_pusher(&mut self, pusher: Option<Box<dyn CollisionPusher>>) {
        self.pusher = pusher;
    }

    /// Run every stage of [`TICK_ORDER`] once.
    pub fn tick(&mut self, pointer: &mut dyn PointerHost) -> TickReport {
        self.ticks += 1;

        let mut report = TickReport {
            tick: self.ticks,
            planar_displacement: glam::Vec3::ZERO,
            vertical: VerticalEvent::Airborne,
            pushed: false,
        };

        for stage in TICK_ORDER {
            match stage {
                TickStage::MouseLook => {
                    self.mouse_look.on_tick(pointer, &mut self.transform);
                }
                TickStage::PlanarMotion => {
                    report.planar_displacement =
                        self.planar.on_tick(&self.keys, &mut self.transform);
                }
                TickStage::VerticalMotion => {
                    report.vertical = self.vertical.on_tick(&self.keys, &mut self.transform);
                }
                TickStage::CollisionPush => {
                    if let Some(pusher) = &self.pusher {
                        report.pushed = pusher.push(&mut self.transform);
                    }
                }
            }
        }

        trace!(
            tick = self.ticks,
            x = self.transform.position().x,
            y = self.transform.position().y,
            z = self.transform.z(),
            grounded = self.vertical.is_grounded(),
            "tick"
        );

        report
    }

    /// Camera transform.
    pub fn transform(&self) -> &CameraTransform {
        &self.transform
    }

    /// Move the camera and reset its vertical state, e.g. to respawn.
    pub fn teleport(&mut self, position: glam::Vec3) {
        debug!(x = position.x, y = position.y, z = position.z, "teleport");
        self.transform.set_position(position);
        self.vertical.reset();
    }

    /// Heading and pitch.
    pub fn orientation(&self) -> OrientationState {
        self.mouse_look.orientation()
    }

    /// Vertical speed and grounded flag.
    pub fn vertical_state(&self) -> VerticalState {
        self.vertical.state()
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::input::VirtualPointer;

    fn rig_at(position: Vec3) -> CameraRig {
        let config = RigConfig {
            start_position: position,
            ..RigConfig::default()
        };
        CameraRig::new(&config)
    }

    #[test]
    fn test_new_uses_start_position() {
        let rig = CameraRig::default();
        assert_eq!(rig.transform().position(), Vec3::new(0.0, -20.0, 3.0));
        assert_eq!(rig.transform().orientation(), (0.0, 0.0, 0.0));
        assert_eq!(rig.orientation(), OrientationState::default());
        assert_eq!(rig.ticks(), 0);
        assert!(!rig.vertical_state().grounded);
    }

    #[test]
    fn test_handle_key_code_uses_bindings() {
        let mut rig = CameraRig::default();

        assert!(rig.handle_key_code(KeyCode::W, true));
        assert!(rig.keys().is_pressed(Key::Forward));

        assert!(rig.handle_key_code(KeyCode::W, false));
        assert!(!rig.keys().is_pressed(Key::Forward));

        assert!(!rig.handle_key_code(KeyCode::Q, true));
        assert!(rig.keys().held().next().is_none());
    }

    #[test]
    fn test_remapped_binding() {
        let mut rig = CameraRig::default();
        rig.bindings_mut().bind(KeyCode::Z, Key::Forward);

        assert!(rig.handle_key_code(KeyCode::Z, true));
        assert!(rig.keys().is_pressed(Key::Forward));
    }

    #[test]
    fn test_tick_counts_and_reports() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
        let mut pointer = VirtualPointer::new(800, 600);

        rig.set_key(Key::Forward, true);
        let report = rig.tick(&mut pointer);

        assert_eq!(report.tick, 1);
        assert_eq!(rig.ticks(), 1);
        assert!((report.planar_displacement - Vec3::new(0.0, 0.3, 0.0)).length() < 1e-5);
        assert_eq!(report.vertical, VerticalEvent::Landed);
        assert!(!report.pushed);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 5.0));
        assert!(!rig.jump());
        assert_eq!(rig.vertical_state(), VerticalState::default());

        let mut pointer = VirtualPointer::new(800, 600);
        for _ in 0..20 {
            rig.tick(&mut pointer);
        }
        assert!(rig.vertical_state().grounded);
        assert!(rig.jump());
        assert_eq!(rig.vertical_state().vertical_speed, 0.5);
    }

    #[test]
    fn test_pusher_can_be_disabled() {
        let config = RigConfig {
            ground_height: -10.0,
            start_position: Vec3::new(0.0, 0.0, 0.5),
            ..RigConfig::default()
        };
        let mut pointer = VirtualPointer::new(800, 600);

        let mut rig = CameraRig::new(&config);
        let report = rig.tick(&mut pointer);
        assert!(report.pushed);
        assert!((rig.transform().z() - 1.0).abs() < 1e-5);

        let mut rig = CameraRig::new(&config);
        rig.set_pusher(None);
        let report = rig.tick(&mut pointer);
        assert!(!report.pushed);
        assert!((rig.transform().z() - 0.48).abs() < 1e-5);
    }

    #[test]
    fn test_teleport_resets_vertical_state() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 1.0));
        let mut pointer = VirtualPointer::new(800, 600);
        rig.tick(&mut pointer);
        assert!(rig.vertical_state().grounded);

        rig.teleport(Vec3::new(3.0, 4.0, 10.0));
        assert_eq!(rig.transform().position(), Vec3::new(3.0, 4.0, 10.0));
        assert_eq!(rig.vertical_state(), VerticalState::default());
    }
}

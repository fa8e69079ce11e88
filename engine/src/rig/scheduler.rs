//! Frame scheduling
//!
//! One tick runs these stages, always in this order, with no re-entrancy.
//! Orientation and planar position must be final before vertical integration
//! reads the height, and collision correction sees the result of both.

use std::fmt;

/// One step of a rig tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickStage {
    /// Cursor displacement -> heading/pitch, re-center cursor
    MouseLook,
    /// Held keys -> camera-space translation
    PlanarMotion,
    /// Gravity, ground clamp, held-jump re-launch
    VerticalMotion,
    /// Push the camera sphere out of solids
    CollisionPush,
}

/// The fixed stage order of every tick.
pub const TICK_ORDER: [TickStage; 4] = [
    TickStage::MouseLook,
    TickStage::PlanarMotion,
    TickStage::VerticalMotion,
    TickStage::CollisionPush,
];

impl TickStage {
    /// Stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            TickStage::MouseLook => "mouse_look",
            TickStage::PlanarMotion => "planar_motion",
            TickStage::VerticalMotion => "vertical_motion",
            TickStage::CollisionPush => "collision_push",
        }
    }
}

impl fmt::Display for TickStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

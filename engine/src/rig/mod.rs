//! Rig Module
//!
//! The per-frame driver: a fixed stage order and the session object that
//! runs it.

pub mod frame_rate;
pub mod scheduler;
pub mod session;

pub use frame_rate::FrameRateMeter;
pub use scheduler::{TICK_ORDER, TickStage};
pub use session::{CameraRig, TickReport};

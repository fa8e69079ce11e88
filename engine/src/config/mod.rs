//! Config Module
//!
//! Centralized configuration for the camera rig and its desktop host.

pub mod rig_config;

pub use rig_config::{ConfigError, RigConfig, WindowConfig};

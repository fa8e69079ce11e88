//! Rig Configuration
//!
//! Every tunable of the camera rig in one serde struct. `Default` carries the
//! stock values; a JSON file only needs the fields it changes.
//!
//! ```json
//! {
//!     "mouse_sensitivity": 0.15,
//!     "start_position": [0.0, -20.0, 3.0],
//!     "bindings": { "sprint": "ShiftLeft" }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::camera::mouse_look::{MOUSE_SENSITIVITY, PITCH_MAX, PITCH_MIN};
use crate::input::{Key, KeyBindings, KeyCode};
use crate::player::{BASE_SPEED, GRAVITY, GROUND_HEIGHT, JUMP_STRENGTH, SPRINT_MULTIPLIER};

/// Errors from loading or validating a [`RigConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Desktop window settings used by the windowed host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Inner width in physical pixels
    pub width: u32,
    /// Inner height in physical pixels
    pub height: u32,
    /// Window title prefix
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "First-Person Camera Control".to_string(),
        }
    }
}

/// Camera rig configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    // Mouse look
    /// Degrees of rotation per pixel of cursor displacement
    pub mouse_sensitivity: f32,
    /// Lowest pitch in degrees
    pub pitch_min: f32,
    /// Highest pitch in degrees
    pub pitch_max: f32,
    /// Pointer device index read and warped by mouse look
    pub pointer_device: usize,

    // Planar motion
    /// Units per tick per held movement key
    pub base_speed: f32,
    /// Speed multiplier while sprint is held
    pub sprint_multiplier: f32,

    // Vertical motion
    /// Added to vertical speed every tick (negative = down)
    pub gravity: f32,
    /// Vertical speed set by a jump
    pub jump_strength: f32,
    /// Camera height when standing
    pub ground_height: f32,

    // Collision
    /// Radius of the camera sphere
    pub collider_radius: f32,
    /// Height of the floor plane
    pub ground_plane_z: f32,

    /// Camera position when the session starts
    pub start_position: Vec3,
    /// Logical key -> physical key overrides on top of the default layout
    pub bindings: BTreeMap<Key, KeyCode>,
    /// Window settings for the desktop host
    pub window: WindowConfig,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            pitch_min: PITCH_MIN,
            pitch_max: PITCH_MAX,
            pointer_device: 0,
            base_speed: BASE_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            ground_height: GROUND_HEIGHT,
            collider_radius: 1.0,
            ground_plane_z: 0.0,
            start_position: Vec3::new(0.0, -20.0, 3.0),
            bindings: BTreeMap::new(),
            window: WindowConfig::default(),
        }
    }
}

impl RigConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "rig_config_loaded");
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check ranges the controllers rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("pitch_min", self.pitch_min),
            ("pitch_max", self.pitch_max),
            ("base_speed", self.base_speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("ground_height", self.ground_height),
            ("collider_radius", self.collider_radius),
            ("ground_plane_z", self.ground_plane_z),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite")));
        }
        if !self.start_position.is_finite() {
            return Err(ConfigError::Invalid("start_position must be finite".to_string()));
        }
        if self.pitch_min > self.pitch_max {
            return Err(ConfigError::Invalid(format!(
                "pitch_min ({}) is above pitch_max ({})",
                self.pitch_min, self.pitch_max
            )));
        }
        if self.sprint_multiplier <= 0.0 {
            return Err(ConfigError::Invalid("sprint_multiplier must be positive".to_string()));
        }
        if self.collider_radius <= 0.0 {
            return Err(ConfigError::Invalid("collider_radius must be positive".to_string()));
        }
        let mut bound: HashMap<KeyCode, Key> = HashMap::new();
        for (&key, &code) in &self.bindings {
            if let Some(other) = bound.insert(code, key) {
                return Err(ConfigError::Invalid(format!(
                    "bindings: {other} and {key} are both bound to '{}'",
                    code.name()
                )));
            }
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Default bindings with this config's overrides applied.
    pub fn key_bindings(&self) -> KeyBindings {
        let mut bindings = KeyBindings::new();
        bindings.apply_overrides(&self.bindings);
        bindings
    }
}

//! Keyboard Input Module
//!
//! Logical key tracking for the camera rig. Physical keys reach this module
//! through [`KeyBindings`](super::KeyBindings); everything downstream only ever
//! sees the closed [`Key`] set, so "unknown key" cannot happen past this point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic physical key codes, independent of windowing system.
///
/// Hosts translate their native codes into these before handing them to the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letter keys
    W,
    A,
    S,
    D,
    Q,
    E,
    Z,
    X,
    C,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    Escape,
    Enter,
    Tab,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Host-style name for the key, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            KeyCode::W => "w",
            KeyCode::A => "a",
            KeyCode::S => "s",
            KeyCode::D => "d",
            KeyCode::Q => "q",
            KeyCode::E => "e",
            KeyCode::Z => "z",
            KeyCode::X => "x",
            KeyCode::C => "c",
            KeyCode::ArrowUp => "arrow_up",
            KeyCode::ArrowDown => "arrow_down",
            KeyCode::ArrowLeft => "arrow_left",
            KeyCode::ArrowRight => "arrow_right",
            KeyCode::Space => "space",
            KeyCode::ShiftLeft => "lshift",
            KeyCode::ShiftRight => "rshift",
            KeyCode::ControlLeft => "lcontrol",
            KeyCode::ControlRight => "rcontrol",
            KeyCode::AltLeft => "lalt",
            KeyCode::Escape => "escape",
            KeyCode::Enter => "enter",
            KeyCode::Tab => "tab",
            KeyCode::Unknown => "unknown",
        }
    }
}

/// Number of logical keys tracked by [`KeyState`].
pub const KEY_COUNT: usize = 6;

/// Logical keys the rig reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Move along camera +Y (default: W)
    Forward,
    /// Move along camera -Y (default: S)
    Backward,
    /// Strafe along camera -X (default: A)
    Left,
    /// Strafe along camera +X (default: D)
    Right,
    /// Speed multiplier (default: left Ctrl)
    Sprint,
    /// Re-jump on every landing while held (default: Space)
    Jump,
}

impl Key {
    /// Every logical key, in index order.
    pub const ALL: [Key; KEY_COUNT] = [
        Key::Forward,
        Key::Backward,
        Key::Left,
        Key::Right,
        Key::Sprint,
        Key::Jump,
    ];

    const fn index(self) -> usize {
        match self {
            Key::Forward => 0,
            Key::Backward => 1,
            Key::Left => 2,
            Key::Right => 3,
            Key::Sprint => 4,
            Key::Jump => 5,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Key::Forward => "forward",
            Key::Backward => "backward",
            Key::Left => "left",
            Key::Right => "right",
            Key::Sprint => "sprint",
            Key::Jump => "jump",
        }
    }

    /// Physical key this logical key is bound to out of the box.
    pub fn default_code(self) -> KeyCode {
        match self {
            Key::Forward => KeyCode::W,
            Key::Backward => KeyCode::S,
            Key::Left => KeyCode::A,
            Key::Right => KeyCode::D,
            Key::Sprint => KeyCode::ControlLeft,
            Key::Jump => KeyCode::Space,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A key name that matched neither a logical key nor a default host key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    /// Accepts canonical names ("forward") and the default host key names
    /// ("w", "lcontrol", "space", ...).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .into_iter()
            .find(|key| key.name() == name || key.default_code().name() == name)
            .ok_or_else(|| UnknownKey(name.to_string()))
    }
}

/// Pressed/released state of every logical key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: [bool; KEY_COUNT],
}

static_assertions::assert_eq_size!(KeyState, [bool; KEY_COUNT]);
static_assertions::const_assert_eq!(Key::ALL.len(), KEY_COUNT);

impl KeyState {
    /// Create a key state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the state of a key.
    #[inline]
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    /// Check whether a key is currently held.
    #[inline]
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// Set a key by name. Returns `false` and changes nothing when the name is
    /// not recognized.
    pub fn set_named(&mut self, name: &str, pressed: bool) -> bool {
        match name.parse::<Key>() {
            Ok(key) => {
                self.set_key(key, pressed);
                true
            }
            Err(_) => false,
        }
    }

    /// Check a key by name. Unrecognized names read as released.
    pub fn is_named_pressed(&self, name: &str) -> bool {
        name.parse::<Key>()
            .map(|key| self.is_pressed(key))
            .unwrap_or(false)
    }

    /// Check if any planar movement key is held.
    pub fn any_movement(&self) -> bool {
        [Key::Forward, Key::Backward, Key::Left, Key::Right]
            .into_iter()
            .any(|key| self.is_pressed(key))
    }

    /// Keys currently held, in index order.
    pub fn held(&self) -> impl Iterator<Item = Key> + '_ {
        Key::ALL.into_iter().filter(|key| self.is_pressed(*key))
    }

    /// Release every key.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

//! Input Bindings Module
//!
//! Maps physical keys to the rig's logical keys, allowing remapping from
//! configuration without touching the controllers.

use std::collections::HashMap;

use super::{Key, KeyCode};

/// Maps physical keys to logical keys.
///
/// One physical key per logical key; binding a key that is already in use
/// moves it.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    /// Map from physical key to logical key
    code_to_key: HashMap<KeyCode, Key>,
    /// Map from logical key to physical key (for reverse lookup and display)
    key_to_code: HashMap<Key, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout.
    ///
    /// Default bindings:
    /// - W = Forward
    /// - S = Backward
    /// - A = Left
    /// - D = Right
    /// - Ctrl (Left) = Sprint
    /// - Space = Jump
    pub fn new() -> Self {
        let mut bindings = Self::empty();
        for key in Key::ALL {
            bindings.bind(key.default_code(), key);
        }
        bindings
    }

    /// Create bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            code_to_key: HashMap::new(),
            key_to_code: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical key.
    ///
    /// Any previous binding of either side is removed first.
    pub fn bind(&mut self, code: KeyCode, key: Key) {
        if let Some(old_key) = self.code_to_key.remove(&code) {
            self.key_to_code.remove(&old_key);
        }
        if let Some(old_code) = self.key_to_code.remove(&key) {
            self.code_to_key.remove(&old_code);
        }

        self.code_to_key.insert(code, key);
        self.key_to_code.insert(key, code);
    }

    /// Remove the binding for a logical key.
    pub fn unbind(&mut self, key: Key) {
        if let Some(code) = self.key_to_code.remove(&key) {
            self.code_to_key.remove(&code);
        }
    }

    /// Get the logical key bound to a physical key, if any.
    pub fn get_key(&self, code: KeyCode) -> Option<Key> {
        self.code_to_key.get(&code).copied()
    }

    /// Get the physical key bound to a logical key, if any.
    pub fn get_code(&self, key: Key) -> Option<KeyCode> {
        self.key_to_code.get(&key).copied()
    }

    /// Apply overrides on top of the current bindings.
    ///
    /// Overrides are applied in iteration order, so a code named twice ends up
    /// on the last key that names it.
    pub fn apply_overrides<'a>(
        &mut self,
        overrides: impl IntoIterator<Item = (&'a Key, &'a KeyCode)>,
    ) {
        for (key, code) in overrides {
            self.bind(*code, *key);
        }
    }

    /// All current bindings as code-key pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, Key)> + '_ {
        self.code_to_key.iter().map(|(&code, &key)| (code, key))
    }
}

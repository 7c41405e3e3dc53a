// Key binding configuration and remapping

use log::debug;

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from keys to actions; one action may have several keys
    bindings: HashMap<KeyCode, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new();
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        if let Some(previous) = self.bindings.insert(key, action) {
            if previous != action {
                debug!("Rebound {:?} from {:?} to {:?}", key, previous, action);
            }
        }
    }

    /// Unbind a key
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

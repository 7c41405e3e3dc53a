// Input manager - translates window keyboard events into actions

use super::action::Action;
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Owns the key bindings and the local player's input state
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.process_key(key, event.state == ElementState::Pressed, event.repeat);
        }
    }

    /// Apply a single key transition; unbound keys are ignored
    pub fn process_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        let Some(action) = self.config.get_action(key) else {
            return;
        };

        if pressed {
            if !repeat {
                self.player.press(action);
            }
        } else {
            self.player.release(action);
        }
    }

    /// Clear per-frame edges. Call once per frame after the game has read input.
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Current input state of the local player
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Release everything (focus lost)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

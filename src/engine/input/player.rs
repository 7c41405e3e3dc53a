// Local player input state

use super::action::Action;
use std::collections::HashSet;

/// Read-only view of which actions are currently held down
pub trait HeldInput {
    fn is_held(&self, action: Action) -> bool;
}

/// Pressed / just-pressed / just-released state for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that were pressed since the last frame
    just_pressed: HashSet<Action>,

    /// Actions that were released since the last frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear per-frame edges. Call once at the end of every frame.
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Drop all input state (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

impl HeldInput for PlayerInput {
    fn is_held(&self, action: Action) -> bool {
        self.is_pressed(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveUp);
        assert!(input.is_held(Action::MoveUp));
        assert!(input.just_pressed(Action::MoveUp));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveUp);
        input.update();
        input.release(Action::MoveUp);

        assert!(!input.is_held(Action::MoveUp));
        assert!(input.just_released(Action::MoveUp));
    }

    #[test]
    fn test_update_keeps_held_keys() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.update();

        assert!(input.is_held(Action::MoveLeft));
        assert!(!input.just_pressed(Action::MoveLeft));
    }

    #[test]
    fn test_repeat_press_is_not_a_new_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Pause);
        input.update();
        input.press(Action::Pause);
        assert!(!input.just_pressed(Action::Pause));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::MoveDown);
        assert!(!input.just_released(Action::MoveDown));
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveUp);
        input.press(Action::MoveRight);
        input.reset();

        assert!(!input.is_held(Action::MoveUp));
        assert!(!input.is_held(Action::MoveRight));
    }
}

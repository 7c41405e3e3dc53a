// Game action definitions and default key bindings

use winit::keyboard::KeyCode;

use crate::core::Direction;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Meta actions
    Pause,
    Quit,
}

impl Action {
    /// Movement actions in polling priority order (first held wins)
    pub const MOVEMENT: [Action; 4] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
    ];

    /// The grid direction a movement action walks toward
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::Pause | Self::Quit => None,
        }
    }
}

/// Default keyboard bindings for the local player
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD)
        (KeyCode::KeyW, Action::MoveUp),
        (KeyCode::KeyS, Action::MoveDown),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        // Arrow keys as alternates
        (KeyCode::ArrowUp, Action::MoveUp),
        (KeyCode::ArrowDown, Action::MoveDown),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        // Meta
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ]
}

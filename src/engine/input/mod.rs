// Input handling system
//
// Keyboard input for the local player, expressed as game actions so that
// keys can be remapped without touching gameplay code.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `config`: Key binding configuration and remapping
// - `player`: Held / just-pressed state for the local player
// - `manager`: Turns winit keyboard events into action state
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::default();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Gameplay reads held actions through `HeldInput`
// world.tick(dt, input.player());
//
// // At the end of each frame
// input.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::{HeldInput, PlayerInput};

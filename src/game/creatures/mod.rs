// Creature system
//
// This module contains everything related to creatures on the grid:
// - Creature controller (grid stepping, direction, facing)
// - State machine and its transition table
// - Clip selection and animation playback
// - Movement stats
// - Input-driven player controller

pub mod animation;
pub mod creature;
pub mod player;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{select_clip, AnimationClip, AnimationPlayer, AnimationSink, ClipSelection};
pub use creature::{CreatureController, CreatureId};
pub use player::PlayerController;
pub use state::{CreatureState, StateError};
pub use stats::CreatureStats;

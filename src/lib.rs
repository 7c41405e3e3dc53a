// Grid-based creature movement and animation state for a 2D MMO client

pub mod core;
pub mod engine;
pub mod game;

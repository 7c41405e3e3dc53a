// Core types shared by the engine and game layers

pub mod grid;
pub mod math;

pub use grid::{CellPos, Direction};

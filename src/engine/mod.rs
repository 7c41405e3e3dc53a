// Engine modules: frame timing, input, camera

pub mod camera;
pub mod game_loop;
pub mod input;

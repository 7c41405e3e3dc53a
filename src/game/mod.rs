// Game layer: map, creatures, registry and the world that ties them together

pub mod creatures;
pub mod map;
pub mod objects;
pub mod world;

pub use map::{GridMap, MapError, MapQuery};
pub use objects::{ObjectManager, ObjectQuery};
pub use world::World;

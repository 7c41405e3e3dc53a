// Follow camera for the 2D top-down view

use glam::Vec3;

/// Anything that can be placed in world space by a follow behaviour
pub trait CameraRig {
    fn set_position(&mut self, position: Vec3);
}

/// Camera looking down the -z axis; z is depth and stays behind the map
#[derive(Debug, Clone, Default)]
pub struct Camera {
    position: Vec3,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl CameraRig for Camera {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

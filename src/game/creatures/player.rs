// Player controller: keyboard-driven creature with a follow camera

use glam::Vec3;

use super::animation::AnimationSink;
use super::creature::CreatureId;
use crate::core::Direction;
use crate::engine::camera::CameraRig;
use crate::engine::input::{Action, HeldInput};
use crate::game::objects::ObjectManager;

/// Camera sits this far from the player, back along the depth axis
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -10.0);

/// First held movement action in priority order Up > Down > Left > Right
pub fn held_direction(input: &dyn HeldInput) -> Option<Direction> {
    Action::MOVEMENT
        .into_iter()
        .find(|action| input.is_held(*action))
        .and_then(Action::direction)
}

/// Drives one creature in the registry from local input
#[derive(Debug, Clone)]
pub struct PlayerController {
    creature: CreatureId,
    camera_offset: Vec3,
}

impl PlayerController {
    pub fn new(creature: CreatureId) -> Self {
        Self {
            creature,
            camera_offset: CAMERA_OFFSET,
        }
    }

    pub fn with_camera_offset(mut self, offset: Vec3) -> Self {
        self.camera_offset = offset;
        self
    }

    pub fn creature(&self) -> CreatureId {
        self.creature
    }

    /// Feed this frame's held direction into the player's creature.
    /// Must run before the registry ticks.
    pub fn poll_input<A: AnimationSink>(
        &self,
        input: &dyn HeldInput,
        objects: &mut ObjectManager<A>,
    ) {
        let Some(creature) = objects.get_mut(self.creature) else {
            return;
        };
        creature.set_direction(held_direction(input));
    }

    /// Center the camera on the player. Runs after every creature has
    /// ticked so the camera shows this frame's position.
    pub fn follow_camera<A: AnimationSink>(
        &self,
        objects: &ObjectManager<A>,
        camera: &mut dyn CameraRig,
    ) {
        if let Some(creature) = objects.get(self.creature) {
            camera.set_position(creature.world_position() + self.camera_offset);
        }
    }
}

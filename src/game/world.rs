// World: map, creatures, local player and camera driven by the host loop

use log::info;

use super::creatures::{CreatureId, CreatureStats, PlayerController};
use super::map::GridMap;
use super::objects::ObjectManager;
use crate::core::CellPos;
use crate::engine::camera::Camera;
use crate::engine::input::HeldInput;

/// Everything the host loop ticks.
///
/// Frame contract: `init` once after spawning, then every frame `tick`
/// followed by `late_tick`.
#[derive(Debug)]
pub struct World {
    map: GridMap,
    objects: ObjectManager,
    player: Option<PlayerController>,
    camera: Camera,
}

impl World {
    pub fn new(map: GridMap, camera: Camera) -> Self {
        Self {
            map,
            objects: ObjectManager::new(),
            player: None,
            camera,
        }
    }

    /// Spawn the locally controlled creature; replaces any previous player
    pub fn spawn_player(&mut self, name: &str, cell: CellPos) -> CreatureId {
        let id = self
            .objects
            .spawn(name, cell, CreatureStats::default(), &self.map);
        self.player = Some(PlayerController::new(id));
        id
    }

    /// Spawn a creature nobody controls
    pub fn spawn_creature(&mut self, name: &str, cell: CellPos, stats: CreatureStats) -> CreatureId {
        let id = self.objects.spawn(name, cell, stats, &self.map);
        // Without input it would walk down forever
        if let Some(creature) = self.objects.get_mut(id) {
            creature.set_direction(None);
        }
        id
    }

    /// Settle the camera before the first frame
    pub fn init(&mut self) {
        info!(
            "World ready: {} creature(s) on a {}x{} map",
            self.objects.count(),
            self.map.width(),
            self.map.height()
        );
        self.late_tick();
    }

    /// Poll input, then advance every creature
    pub fn tick(&mut self, dt: f32, input: &dyn HeldInput) {
        if let Some(player) = &self.player {
            player.poll_input(input, &mut self.objects);
        }
        self.objects.update(dt, &self.map);
    }

    /// Camera follow, after all creatures have moved this frame
    pub fn late_tick(&mut self) {
        if let Some(player) = &self.player {
            player.follow_camera(&self.objects, &mut self.camera);
        }
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn objects(&self) -> &ObjectManager {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectManager {
        &mut self.objects
    }

    pub fn player(&self) -> Option<&PlayerController> {
        self.player.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

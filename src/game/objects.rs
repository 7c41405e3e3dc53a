// Object registry: owns spawned creatures and answers occupancy queries

use log::info;

use super::creatures::animation::{AnimationPlayer, AnimationSink};
use super::creatures::creature::{CreatureController, CreatureId};
use super::creatures::stats::CreatureStats;
use super::map::MapQuery;
use crate::core::CellPos;

/// Occupancy lookup used when a creature decides whether it can step
pub trait ObjectQuery {
    /// The creature standing on `cell`, if any
    fn find_at(&self, cell: CellPos) -> Option<CreatureId>;
}

/// Every creature except the one currently being ticked
struct Others<'a, A> {
    before: &'a [CreatureController<A>],
    after: &'a [CreatureController<A>],
}

impl<A: AnimationSink> ObjectQuery for Others<'_, A> {
    fn find_at(&self, cell: CellPos) -> Option<CreatureId> {
        find_in(self.before.iter().chain(self.after), cell)
    }
}

fn find_in<'a, A: AnimationSink + 'a>(
    creatures: impl IntoIterator<Item = &'a CreatureController<A>>,
    cell: CellPos,
) -> Option<CreatureId> {
    creatures
        .into_iter()
        .find(|c| c.cell_pos() == cell)
        .map(|c| c.id())
}

/// Manages all creatures on the current map
#[derive(Debug)]
pub struct ObjectManager<A = AnimationPlayer> {
    creatures: Vec<CreatureController<A>>,
    next_id: CreatureId,
}

impl<A> Default for ObjectManager<A> {
    fn default() -> Self {
        Self {
            creatures: Vec::new(),
            next_id: 0,
        }
    }
}

impl ObjectManager<AnimationPlayer> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a creature with the standard clip set
    pub fn spawn(
        &mut self,
        name: &str,
        cell: CellPos,
        stats: CreatureStats,
        map: &dyn MapQuery,
    ) -> CreatureId {
        self.spawn_with(name, cell, stats, AnimationPlayer::with_creature_clips(), map)
    }
}

impl<A: AnimationSink> ObjectManager<A> {
    /// Spawn a creature that reports to `animation`, placing it on `cell`
    pub fn spawn_with(
        &mut self,
        name: &str,
        cell: CellPos,
        stats: CreatureStats,
        animation: A,
        map: &dyn MapQuery,
    ) -> CreatureId {
        let id = self.next_id;
        self.next_id += 1;

        let mut creature = CreatureController::with_animation(id, name, cell, stats, animation);
        creature.init(map);
        self.creatures.push(creature);

        info!("Spawned {} as creature {} at {}", name, id, cell);
        id
    }

    pub fn get(&self, id: CreatureId) -> Option<&CreatureController<A>> {
        self.creatures.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: CreatureId) -> Option<&mut CreatureController<A>> {
        self.creatures.iter_mut().find(|c| c.id() == id)
    }

    pub fn all(&self) -> &[CreatureController<A>] {
        &self.creatures
    }

    /// Tick every creature in spawn order. Each one sees the others as they
    /// are at that moment, so earlier creatures' steps this frame count.
    pub fn update(&mut self, dt: f32, map: &dyn MapQuery) {
        for index in 0..self.creatures.len() {
            let (before, rest) = self.creatures.split_at_mut(index);
            let Some((current, after)) = rest.split_first_mut() else {
                break;
            };
            let others = Others {
                before: &*before,
                after: &*after,
            };
            current.tick(dt, map, &others);
        }
    }

    pub fn remove(&mut self, id: CreatureId) -> Option<CreatureController<A>> {
        let pos = self.creatures.iter().position(|c| c.id() == id)?;
        info!("Despawned creature {}", id);
        Some(self.creatures.remove(pos))
    }

    pub fn count(&self) -> usize {
        self.creatures.len()
    }

    pub fn alive_count(&self) -> usize {
        self.creatures.iter().filter(|c| c.is_alive()).count()
    }
}

impl<A: AnimationSink> ObjectQuery for ObjectManager<A> {
    fn find_at(&self, cell: CellPos) -> Option<CreatureId> {
        find_in(&self.creatures, cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::game::creatures::state::CreatureState;
    use crate::game::map::GridMap;
    use glam::IVec2;

    fn setup() -> (GridMap, ObjectManager) {
        (GridMap::open(IVec2::splat(-5), IVec2::splat(5)).unwrap(), ObjectManager::new())
    }

    #[test]
    fn test_manager_new() {
        let manager = ObjectManager::new();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_spawn_assigns_increasing_ids() {
        let (map, mut manager) = setup();
        let a = manager.spawn("a", IVec2::ZERO, CreatureStats::default(), &map);
        let b = manager.spawn("b", IVec2::X, CreatureStats::default(), &map);
        assert!(b > a);
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get(b).map(|c| c.name()), Some("b"));
    }

    #[test]
    fn test_spawn_places_sprite_on_cell() {
        let (map, mut manager) = setup();
        let id = manager.spawn("a", IVec2::new(2, 3), CreatureStats::default(), &map);
        let creature = manager.get(id).unwrap();
        assert_eq!(creature.world_position(), glam::Vec3::new(2.5, 3.0, 0.0));
    }

    #[test]
    fn test_find_at() {
        let (map, mut manager) = setup();
        let id = manager.spawn("a", IVec2::new(1, 1), CreatureStats::default(), &map);
        assert_eq!(manager.find_at(IVec2::new(1, 1)), Some(id));
        assert_eq!(manager.find_at(IVec2::ZERO), None);
    }

    #[test]
    fn test_creatures_block_each_other() {
        let (map, mut manager) = setup();
        let walker = manager.spawn("walker", IVec2::ZERO, CreatureStats::default(), &map);
        manager.spawn("wall", IVec2::X, CreatureStats::default(), &map);

        // Release the spawn-time direction of the blocker
        for c in [0, 1] {
            manager.get_mut(c).unwrap().set_direction(None);
        }
        manager.get_mut(walker).unwrap().set_direction(Some(Direction::Right));

        manager.update(0.02, &map);
        let creature = manager.get(walker).unwrap();
        assert_eq!(creature.state(), CreatureState::Moving);
        assert_eq!(creature.cell_pos(), IVec2::ZERO);
    }

    #[test]
    fn test_earlier_step_claims_cell() {
        let (map, mut manager) = setup();
        let first = manager.spawn("first", IVec2::new(-1, 0), CreatureStats::default(), &map);
        let second = manager.spawn("second", IVec2::new(1, 0), CreatureStats::default(), &map);
        manager.get_mut(first).unwrap().set_direction(Some(Direction::Right));
        manager.get_mut(second).unwrap().set_direction(Some(Direction::Left));

        manager.update(0.02, &map);

        assert_eq!(manager.get(first).unwrap().cell_pos(), IVec2::ZERO);
        assert_eq!(manager.get(second).unwrap().cell_pos(), IVec2::new(1, 0));
    }

    #[test]
    fn test_remove() {
        let (map, mut manager) = setup();
        let id = manager.spawn("a", IVec2::ZERO, CreatureStats::default(), &map);
        assert!(manager.remove(id).is_some());
        assert!(manager.remove(id).is_none());
        assert_eq!(manager.find_at(IVec2::ZERO), None);
    }

    #[test]
    fn test_alive_count() {
        let (map, mut manager) = setup();
        let id = manager.spawn("a", IVec2::ZERO, CreatureStats::default(), &map);
        manager.spawn("b", IVec2::Y, CreatureStats::default(), &map);
        manager
            .get_mut(id)
            .unwrap()
            .set_state(CreatureState::Dead)
            .unwrap();
        assert_eq!(manager.alive_count(), 1);
    }
}

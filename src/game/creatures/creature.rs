// Creature controller: grid stepping and animation state for one creature

use glam::Vec3;
use log::{debug, trace, warn};

use super::animation::{select_clip, AnimationPlayer, AnimationSink};
use super::state::{CreatureState, StateError};
use super::stats::CreatureStats;
use crate::core::math::{step_towards, Approach};
use crate::core::{CellPos, Direction};
use crate::game::map::MapQuery;
use crate::game::objects::ObjectQuery;

/// Unique identifier for a creature
pub type CreatureId = u32;

/// A creature standing on, or walking between, grid cells
#[derive(Debug)]
pub struct CreatureController<A = AnimationPlayer> {
    id: CreatureId,
    name: String,
    stats: CreatureStats,

    /// Cell the creature occupies (or is walking into)
    cell_pos: CellPos,
    /// Interpolated sprite position
    world_position: Vec3,

    state: CreatureState,
    /// Active movement direction, `None` when no input is held
    direction: Option<Direction>,
    /// Where the creature last walked; idle and attack poses face this way
    last_facing: Direction,

    animation: A,
}

impl CreatureController<AnimationPlayer> {
    pub fn new(id: CreatureId, name: &str, cell_pos: CellPos, stats: CreatureStats) -> Self {
        Self::with_animation(
            id,
            name,
            cell_pos,
            stats,
            AnimationPlayer::with_creature_clips(),
        )
    }
}

impl<A: AnimationSink> CreatureController<A> {
    /// Create a creature that reports clip changes to `animation`
    pub fn with_animation(
        id: CreatureId,
        name: &str,
        cell_pos: CellPos,
        stats: CreatureStats,
        animation: A,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            stats,
            cell_pos,
            world_position: Vec3::ZERO,
            state: CreatureState::Idle,
            direction: Some(Direction::Down),
            last_facing: Direction::Down,
            animation,
        }
    }

    /// Place the sprite on its cell. Called once when the creature spawns.
    pub fn init(&mut self, map: &dyn MapQuery) {
        self.world_position = self.cell_anchor(map);
        debug!(
            "Creature {} ({}) spawned at cell {}",
            self.id, self.name, self.cell_pos
        );
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &CreatureStats {
        &self.stats
    }

    pub fn cell_pos(&self) -> CellPos {
        self.cell_pos
    }

    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    pub fn set_world_position(&mut self, position: Vec3) {
        self.world_position = position;
    }

    pub fn state(&self) -> CreatureState {
        self.state
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn last_facing(&self) -> Direction {
        self.last_facing
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Change state. Re-entering the current state does nothing; any other
    /// change must be allowed by the transition table.
    pub fn set_state(&mut self, state: CreatureState) -> Result<(), StateError> {
        if self.state == state {
            return Ok(());
        }
        if let Err(err) = self.state.check_transition(state) {
            warn!("Creature {}: {}", self.id, err);
            return Err(err);
        }
        self.enter(state);
        Ok(())
    }

    /// Change movement direction. Ignored while Moving so a step is never
    /// redirected halfway between cells.
    pub fn set_direction(&mut self, direction: Option<Direction>) {
        if self.direction == direction {
            return;
        }
        if !self.state.accepts_direction() {
            trace!(
                "Creature {}: direction {:?} ignored mid-step",
                self.id,
                direction
            );
            return;
        }

        self.direction = direction;
        if let Some(dir) = direction {
            self.last_facing = dir;
        }
        self.refresh_animation();
    }

    /// The cell directly in front of the creature, used for interaction and
    /// attack targeting
    pub fn front_cell_position(&self) -> CellPos {
        self.last_facing.step(self.cell_pos)
    }

    /// Advance one frame
    pub fn tick(&mut self, dt: f32, map: &dyn MapQuery, objects: &dyn ObjectQuery) {
        match self.state {
            CreatureState::Idle => self.tick_idle(map, objects),
            CreatureState::Moving => self.tick_moving(dt, map),
            CreatureState::Skill | CreatureState::Dead => {}
        }
        self.animation.update(dt);
    }

    fn tick_idle(&mut self, map: &dyn MapQuery, objects: &dyn ObjectQuery) {
        let Some(direction) = self.direction else {
            return;
        };

        let destination = direction.step(self.cell_pos);
        let open = map.can_move(destination) && objects.find_at(destination).is_none();

        if !open && !self.stats.bump_when_blocked {
            return;
        }

        // A blocked step still walks in place for one short Moving phase
        self.enter(CreatureState::Moving);
        if open {
            debug!(
                "Creature {} steps {:?} to {}",
                self.id, direction, destination
            );
            self.cell_pos = destination;
        } else {
            trace!("Creature {} bumped into {}", self.id, destination);
        }
    }

    fn tick_moving(&mut self, dt: f32, map: &dyn MapQuery) {
        let target = self.cell_anchor(map);

        match step_towards(self.world_position, target, self.stats.speed * dt) {
            Approach::Arrived(position) => {
                self.world_position = position;
                self.enter(CreatureState::Idle);
            }
            Approach::Travelling(position) => self.world_position = position,
        }
    }

    fn cell_anchor(&self, map: &dyn MapQuery) -> Vec3 {
        map.cell_to_world(self.cell_pos) + self.stats.anchor
    }

    /// Switch state without consulting the table; only for transitions the
    /// tick logic itself performs
    fn enter(&mut self, state: CreatureState) {
        if self.state == state {
            return;
        }
        debug_assert!(self.state.can_transition_to(state));
        debug!("Creature {}: {:?} -> {:?}", self.id, self.state, state);
        self.state = state;
        self.refresh_animation();
    }

    fn refresh_animation(&mut self) {
        if let Some(selection) = select_clip(self.state, self.direction, self.last_facing) {
            self.animation.play_clip(selection.clip);
            self.animation.set_flip_horizontal(selection.flip);
        }
    }
}

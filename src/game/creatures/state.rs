// Creature state machine

use thiserror::Error;

/// Represents the current state of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CreatureState {
    /// Standing on a cell, ready to accept a new direction
    #[default]
    Idle,
    /// Walking toward its current cell
    Moving,
    /// Performing an attack or skill
    Skill,
    /// Dead, waiting to be respawned
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("illegal state transition {from:?} -> {to:?}")]
    IllegalTransition {
        from: CreatureState,
        to: CreatureState,
    },
}

impl CreatureState {
    /// Check if `next` may follow this state.
    ///
    /// Staying in the same state is always allowed.
    pub fn can_transition_to(self, next: CreatureState) -> bool {
        use CreatureState::*;

        if self == next {
            return true;
        }

        matches!(
            (self, next),
            (Idle, Moving)
                | (Idle, Skill)
                | (Idle, Dead)
                | (Moving, Idle)
                | (Moving, Dead)
                | (Skill, Idle)
                | (Skill, Dead)
                | (Dead, Idle)
        )
    }

    /// Validate a transition from this state to `next`
    pub fn check_transition(self, next: CreatureState) -> Result<(), StateError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(StateError::IllegalTransition {
                from: self,
                to: next,
            })
        }
    }

    /// Check if the creature accepts a new movement direction
    pub fn accepts_direction(self) -> bool {
        self != Self::Moving
    }

    pub fn is_alive(self) -> bool {
        self != Self::Dead
    }
}

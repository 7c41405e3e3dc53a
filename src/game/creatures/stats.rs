// Creature stats - movement tuning shared by players and NPCs

use glam::Vec3;

/// Movement tuning for a creature
#[derive(Debug, Clone)]
pub struct CreatureStats {
    /// Walking speed between cells (world units/second)
    pub speed: f32,
    /// Offset from a cell's world corner to where the sprite stands
    pub anchor: Vec3,
    /// Enter Moving even when the destination is blocked, playing a short
    /// walk-in-place. When false the creature stays Idle instead.
    pub bump_when_blocked: bool,
}

impl CreatureStats {
    /// Stats every creature spawns with unless overridden
    pub const BASE: CreatureStats = CreatureStats {
        speed: 5.0,
        anchor: Vec3::new(0.5, 0.0, 0.0),
        bump_when_blocked: true,
    };

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_bump_when_blocked(mut self, bump: bool) -> Self {
        self.bump_when_blocked = bump;
        self
    }
}

impl Default for CreatureStats {
    fn default() -> Self {
        Self::BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CreatureStats::default();
        assert_eq!(stats.speed, 5.0);
        assert_eq!(stats.anchor, Vec3::new(0.5, 0.0, 0.0));
        assert!(stats.bump_when_blocked);
    }

    #[test]
    fn test_builders() {
        let stats = CreatureStats::default()
            .with_speed(2.5)
            .with_bump_when_blocked(false);
        assert_eq!(stats.speed, 2.5);
        assert!(!stats.bump_when_blocked);
    }
}

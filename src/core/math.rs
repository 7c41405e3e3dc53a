// Math utilities and helper functions

use glam::Vec3;

/// Result of moving a point toward a target by a bounded step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Approach {
    /// The target was closer than the step; the point snaps onto it
    Arrived(Vec3),
    /// Still travelling; new position after the step
    Travelling(Vec3),
}

/// Move `current` toward `target` by at most `max_step`.
///
/// Arrival requires the remaining distance to be strictly less than the
/// step, so a zero step never arrives (and never produces NaN).
pub fn step_towards(current: Vec3, target: Vec3, max_step: f32) -> Approach {
    let delta = target - current;
    let distance = delta.length();

    if distance < max_step {
        Approach::Arrived(target)
    } else {
        Approach::Travelling(current + delta.normalize_or_zero() * max_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_arrives_when_close() {
        let target = Vec3::new(1.5, 0.0, 0.0);
        let result = step_towards(Vec3::new(1.45, 0.0, 0.0), target, 0.1);
        assert_eq!(result, Approach::Arrived(target));
    }

    #[test]
    fn test_step_travels_when_far() {
        let result = step_towards(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.25);
        let Approach::Travelling(pos) = result else {
            panic!("expected to still be travelling");
        };
        assert_relative_eq!(pos.x, 0.25);
        assert_relative_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_zero_step_on_target_does_not_arrive() {
        let result = step_towards(Vec3::ONE, Vec3::ONE, 0.0);
        assert_eq!(result, Approach::Travelling(Vec3::ONE));
    }
}

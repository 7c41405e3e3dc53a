// Creature animation: clip selection and playback

use std::collections::HashMap;

use super::state::CreatureState;
use crate::core::Direction;

/// Receives the clip choices made by a creature
pub trait AnimationSink {
    /// Start playing the named clip
    fn play_clip(&mut self, name: &str);
    /// Mirror the sprite horizontally
    fn set_flip_horizontal(&mut self, flip: bool);
    /// Advance playback by `dt` seconds
    fn update(&mut self, _dt: f32) {}
}

/// A clip name together with the flip flag it should be shown with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipSelection {
    pub clip: &'static str,
    pub flip: bool,
}

impl ClipSelection {
    /// Pick the clip for `facing` from a back/front/side triple.
    /// There is no left-facing art: left plays the side clip mirrored.
    fn facing(
        facing: Direction,
        back: &'static str,
        front: &'static str,
        side: &'static str,
    ) -> Self {
        let clip = match facing {
            Direction::Up => back,
            Direction::Down => front,
            Direction::Left | Direction::Right => side,
        };
        Self {
            clip,
            flip: facing.is_mirrored(),
        }
    }
}

/// Map a creature's state and directions to the clip it should show.
///
/// Returns `None` when nothing should change: while Idle with a direction
/// still held (the walk continues next tick), while Moving without a
/// direction, and always while Dead.
pub fn select_clip(
    state: CreatureState,
    direction: Option<Direction>,
    last_facing: Direction,
) -> Option<ClipSelection> {
    match state {
        CreatureState::Idle => {
            if direction.is_some() {
                return None;
            }
            Some(ClipSelection::facing(
                last_facing,
                "IDLE_BACK",
                "IDLE_FRONT",
                "IDLE_RIGHT",
            ))
        }
        CreatureState::Moving => direction
            .map(|dir| ClipSelection::facing(dir, "WALK_BACK", "WALK_FRONT", "WALK_RIGHT")),
        // Attacks face where the creature last looked, not where it walks
        CreatureState::Skill => Some(ClipSelection::facing(
            last_facing,
            "ATTACK_BACK",
            "ATTACK_FRONT",
            "ATTACK_RIGHT",
        )),
        CreatureState::Dead => None,
    }
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Frame-timed clip playback for one creature sprite
#[derive(Debug)]
pub struct AnimationPlayer {
    animations: HashMap<String, AnimationClip>,
    current_animation: String,
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    playing: bool,
    flip_horizontal: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
        }
    }

    /// Create a player with the standard creature clip set
    pub fn with_creature_clips() -> Self {
        let mut player = Self::new();

        for name in ["IDLE_FRONT", "IDLE_BACK", "IDLE_RIGHT"] {
            player.add_animation(AnimationClip::looping(name, 4, 6.0));
        }
        for name in ["WALK_FRONT", "WALK_BACK", "WALK_RIGHT"] {
            player.add_animation(AnimationClip::looping(name, 4, 10.0));
        }
        for name in ["ATTACK_FRONT", "ATTACK_BACK", "ATTACK_RIGHT"] {
            player.add_animation(AnimationClip::one_shot(name, 4, 12.0));
        }

        player.play_clip("IDLE_FRONT");
        player
    }

    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Check if the current one-shot clip has played through
    pub fn is_finished(&self) -> bool {
        match self.animations.get(&self.current_animation) {
            Some(clip) => !clip.looping && !self.playing,
            None => true,
        }
    }
}

impl AnimationSink for AnimationPlayer {
    /// Switching clips restarts from the first frame; replaying the current
    /// clip keeps its position so consecutive steps animate smoothly
    fn play_clip(&mut self, name: &str) {
        if self.current_animation == name {
            return;
        }
        if !self.animations.contains_key(name) {
            log::warn!("Unknown animation clip {:?}", name);
        }
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(clip: &'static str, flip: bool) -> Option<ClipSelection> {
        Some(ClipSelection { clip, flip })
    }

    #[test]
    fn test_idle_uses_last_facing() {
        use Direction::*;
        let idle = CreatureState::Idle;
        assert_eq!(select_clip(idle, None, Up), selection("IDLE_BACK", false));
        assert_eq!(select_clip(idle, None, Down), selection("IDLE_FRONT", false));
        assert_eq!(select_clip(idle, None, Left), selection("IDLE_RIGHT", true));
        assert_eq!(select_clip(idle, None, Right), selection("IDLE_RIGHT", false));
    }

    #[test]
    fn test_idle_suppressed_while_direction_held() {
        let clip = select_clip(CreatureState::Idle, Some(Direction::Up), Direction::Up);
        assert_eq!(clip, None);
    }

    #[test]
    fn test_moving_uses_active_direction() {
        use Direction::*;
        let moving = CreatureState::Moving;
        assert_eq!(select_clip(moving, Some(Up), Down), selection("WALK_BACK", false));
        assert_eq!(select_clip(moving, Some(Down), Up), selection("WALK_FRONT", false));
        assert_eq!(select_clip(moving, Some(Left), Up), selection("WALK_RIGHT", true));
        assert_eq!(select_clip(moving, Some(Right), Up), selection("WALK_RIGHT", false));
        assert_eq!(select_clip(moving, None, Up), None);
    }

    #[test]
    fn test_skill_uses_last_facing() {
        let skill = CreatureState::Skill;
        assert_eq!(
            select_clip(skill, Some(Direction::Right), Direction::Left),
            selection("ATTACK_RIGHT", true)
        );
        assert_eq!(
            select_clip(skill, None, Direction::Up),
            selection("ATTACK_BACK", false)
        );
    }

    #[test]
    fn test_dead_is_unmapped() {
        for facing in Direction::ALL {
            assert_eq!(select_clip(CreatureState::Dead, None, facing), None);
        }
    }

    #[test]
    fn test_every_selected_clip_exists() {
        let player = AnimationPlayer::with_creature_clips();
        for state in [CreatureState::Idle, CreatureState::Moving, CreatureState::Skill] {
            for facing in Direction::ALL {
                for direction in [None, Some(facing)] {
                    if let Some(selection) = select_clip(state, direction, facing) {
                        assert!(player.animations.contains_key(selection.clip));
                    }
                }
            }
        }
    }

    #[test]
    fn test_animation_clip_duration() {
        let clip = AnimationClip::looping("WALK_RIGHT", 6, 10.0);
        assert!((clip.total_duration() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_replaying_current_clip_keeps_frame() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("walk", 4, 10.0));
        player.add_animation(AnimationClip::looping("idle", 4, 10.0));
        player.play_clip("walk");
        player.update(0.25);
        assert_eq!(player.current_frame(), 2);

        player.play_clip("walk");
        assert_eq!(player.current_frame(), 2);

        player.play_clip("idle");
        assert_eq!(player.current_animation(), "idle");
        assert_eq!(player.current_frame(), 0);
    }

    #[test]
    fn test_animation_looping() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::looping("test", 3, 10.0));
        player.play_clip("test");

        player.update(0.35);
        assert_eq!(player.current_frame(), 0);
        assert!(player.is_playing());
    }

    #[test]
    fn test_animation_one_shot() {
        let mut player = AnimationPlayer::new();
        player.add_animation(AnimationClip::one_shot("test", 3, 10.0));
        player.play_clip("test");

        player.update(0.5);
        assert_eq!(player.current_frame(), 2);
        assert!(player.is_finished());
    }

    #[test]
    fn test_flip_horizontal() {
        let mut player = AnimationPlayer::with_creature_clips();
        assert!(!player.is_flipped_horizontal());
        player.set_flip_horizontal(true);
        assert!(player.is_flipped_horizontal());
    }
}

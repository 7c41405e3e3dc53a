//! Frame timing for the host loop
//!
//! Implements a fixed timestep: gameplay ticks at a constant rate no matter
//! how fast frames arrive, so grid movement speed does not depend on the
//! display refresh rate.

use std::time::{Duration, Instant};

/// Target gameplay tick rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether gameplay is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a loop whose first frame is measured from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: start,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of fixed ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a frame observed at `now`
    pub fn begin_frame_at(&mut self, now: Instant) -> u32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            ticks += 1;
        }

        // Whatever the cap left behind is dropped rather than replayed later
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!("Frame overran tick budget, dropping {:?}", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Seconds simulated by one tick
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_one_timestep_yields_one_tick() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        assert_eq!(game_loop.begin_frame_at(start + FIXED_TIMESTEP_DURATION), 1);
        assert_eq!(game_loop.tick_count(), 1);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        let half = FIXED_TIMESTEP_DURATION / 2;

        assert_eq!(game_loop.begin_frame_at(start + half), 0);
        assert_eq!(game_loop.begin_frame_at(start + half * 2), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);

        let ticks = game_loop.begin_frame_at(start + Duration::from_millis(300));
        assert_eq!(ticks, MAX_TICKS_PER_FRAME);

        // The backlog is not replayed on the next frame
        let next = start + Duration::from_millis(300) + Duration::from_millis(1);
        assert_eq!(game_loop.begin_frame_at(next), 0);
    }

    #[test]
    fn test_paused_no_ticks() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        game_loop.pause();

        assert_eq!(game_loop.begin_frame_at(start + Duration::from_millis(50)), 0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());
        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_fixed_timestep() {
        let game_loop = GameLoop::new();
        assert!((game_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }
}

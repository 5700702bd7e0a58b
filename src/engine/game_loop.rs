// Frame clock for the fixed-timestep simulation
//
// Wall-clock time is accumulated every rendered frame and paid out as a bounded
// number of fixed steps. The motion controller and the physics world both advance
// once per step, so every timer in gameplay sees the same `dt`.

use std::time::{Duration, Instant};

/// Target update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of fixed steps per frame to prevent spiral of death
const MAX_STEPS_PER_FRAME: u32 = 5;

/// Fixed-timestep accumulator
pub struct FrameClock {
    /// Time not yet consumed by fixed steps
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Frames begun so far
    frame_count: u64,

    /// Fixed steps paid out so far
    step_count: u64,
}

impl FrameClock {
    /// Create a new frame clock starting now
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Begin a new frame measured against the wall clock
    /// Returns the number of fixed steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Begin a new frame that took `frame_time`
    /// Returns the number of fixed steps to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Drop the backlog a slow frame left behind instead of replaying it later
        if steps == MAX_STEPS_PER_FRAME && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!(
                "Frame clock fell behind by {:?}; dropping backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.step_count += steps as u64;
        steps
    }

    /// Get the fixed timestep (in seconds)
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of fixed steps paid out
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

// Per-character motion state and its frame timers

use super::config::{MotionConfig, JUMP_BUFFER_DECAY_RATE};
use super::dash::Dash;
use crate::core::math::countdown;

/// Direction the character is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Facing for a horizontal axis value, or `None` when centered
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis < 0.0 {
            Some(Self::Left)
        } else if axis > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }
}

/// Mutable motion state of one character, owned by its controller
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Current facing; only changes on nonzero horizontal input
    pub facing: Facing,
    /// An initiated jump that has not been cut short or landed
    pub is_jumping: bool,
    /// Remaining jump buffer; a press stays pending while this is above zero
    pub jump_buffer_remaining: f32,
    /// Remaining coyote time; a ground jump is allowed while this is above zero
    pub coyote_time_remaining: f32,
    /// Air jumps spent since last grounded
    pub air_jumps_used: u32,
    /// Dash lifecycle
    pub dash: Dash,
    /// Set when a dash starts, cleared whenever grounded
    pub dashed_since_grounded: bool,
    /// Attack cooldown tracker
    pub time_since_last_attack: f32,
}

impl MotionState {
    /// Fresh state for a newly spawned character
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            facing: Facing::Right,
            is_jumping: false,
            jump_buffer_remaining: 0.0,
            coyote_time_remaining: 0.0,
            air_jumps_used: 0,
            dash: Dash::new(config.dash_time, config.dash_cooldown),
            dashed_since_grounded: false,
            // Ready to attack on the first press
            time_since_last_attack: config.time_between_attacks,
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_dashing()
    }

    pub fn dash_on_cooldown(&self) -> bool {
        self.dash.is_on_cooldown()
    }

    /// Advance the jump buffer and coyote timers, and apply grounded resets
    ///
    /// Runs every frame, including frames spent dashing.
    pub fn update_timers(
        &mut self,
        config: &MotionConfig,
        jump_pressed: bool,
        grounded: bool,
        dt: f32,
    ) {
        if jump_pressed {
            self.jump_buffer_remaining = config.jump_buffer_window;
        } else {
            self.jump_buffer_remaining =
                countdown(self.jump_buffer_remaining, dt * JUMP_BUFFER_DECAY_RATE);
        }

        if grounded {
            self.coyote_time_remaining = config.coyote_time_window;
            self.is_jumping = false;
            self.air_jumps_used = 0;
            self.dashed_since_grounded = false;
        } else {
            self.coyote_time_remaining = countdown(self.coyote_time_remaining, dt);
        }
    }
}

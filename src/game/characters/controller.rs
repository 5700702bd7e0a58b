// Per-frame motion and action decisions for the player character
//
// A frame runs in three phases:
//
// 1. `MotionController::decide` is pure game logic over a `FrameInput`
//    snapshot and what was `Sensed` about the body. It mutates the
//    `MotionState` and returns a `FrameDecision`.
// 2. `MotionController::apply` writes the decision to the physics body and
//    spawns effects.
// 3. `MotionController::present` emits animation cues derived from the
//    decision and the new state.
//
// `MotionController::update` runs all three against live collaborators.
//
// Decision order inside a frame: advance the dash clock, update the jump
// buffer/coyote timers, stop if dashing, then facing, walking, jump, dash
// start and attack.

use glam::Vec2;
use log::debug;

use super::animation::{AnimationSink, Cue, Trigger};
use super::backend::{GroundProbe, MotionError, MotionSink};
use super::config::{ConfigError, MotionConfig};
use super::effects::{Effect, EffectSpawner};
use super::state::{Facing, MotionState};
use crate::engine::input::{FrameInput, InputSource};

/// What was read from the body at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sensed {
    pub grounded: bool,
    pub velocity: Vec2,
}

impl Sensed {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            velocity: Vec2::ZERO,
        }
    }

    pub fn airborne(velocity: Vec2) -> Self {
        Self {
            grounded: false,
            velocity,
        }
    }
}

/// Which rule started a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Buffered press while on ground or within coyote time
    Ground,
    /// Extra jump while airborne
    Air,
}

/// Outcome of one frame of decisions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameDecision {
    /// Ground state this frame was decided with
    pub grounded: bool,
    /// A dash was active, so only the timers ran
    pub locked_out: bool,
    /// Velocity to write to the body
    pub velocity: Option<Vec2>,
    /// Gravity scale to write to the body
    pub gravity_scale: Option<f32>,
    /// Moving on the ground after horizontal movement was applied
    pub walking: bool,
    pub jump: Option<JumpKind>,
    /// Rising velocity was cut because jump was released
    pub jump_cut: bool,
    pub dash_started: bool,
    pub dash_ended: bool,
    /// The dash started on the ground, so it leaves a burst effect
    pub spawn_dash_effect: bool,
    pub attack: bool,
}

/// Motion and action state machine of one character
#[derive(Debug, Clone)]
pub struct MotionController {
    config: MotionConfig,
    state: MotionState,
    /// Gravity scale restored when a dash ends
    resting_gravity_scale: f32,
}

impl MotionController {
    /// Build a controller, rejecting invalid tuning
    pub fn new(config: MotionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = MotionState::new(&config);

        Ok(Self {
            config,
            state,
            resting_gravity_scale: 1.0,
        })
    }

    /// Set the body's normal gravity scale, restored after every dash
    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.resting_gravity_scale = scale;
        self
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn is_dashing(&self) -> bool {
        self.state.is_dashing()
    }

    /// Run one frame against live collaborators
    ///
    /// A failed probe or body write aborts the frame and leaves the motion
    /// state as it was before it. Body writes that succeeded before the
    /// failure are not undone.
    pub fn update<B>(
        &mut self,
        input: &impl InputSource,
        body: &mut B,
        animation: &mut impl AnimationSink,
        effects: &mut impl EffectSpawner,
        dt: f32,
    ) -> Result<FrameDecision, MotionError>
    where
        B: GroundProbe + MotionSink,
    {
        let sensed = Sensed {
            grounded: body.is_grounded()?,
            velocity: body.velocity()?,
        };
        let input = FrameInput::capture(input);

        let before = self.state.clone();
        let decision = self.decide(&input, sensed, dt);
        if let Err(err) = self.apply(&decision, body, effects) {
            self.state = before;
            return Err(err);
        }
        self.present(&decision, animation);

        Ok(decision)
    }

    /// Decide this frame's motion from input and sensed body state
    pub fn decide(&mut self, input: &FrameInput, sensed: Sensed, dt: f32) -> FrameDecision {
        let mut decision = FrameDecision {
            grounded: sensed.grounded,
            ..FrameDecision::default()
        };

        // Deferred dash phases resume before anything else looks at the state
        let tick = self.state.dash.advance(dt);
        if tick.ended {
            debug!("Dash ended; gravity scale back to {}", self.resting_gravity_scale);
            decision.dash_ended = true;
            decision.gravity_scale = Some(self.resting_gravity_scale);
        }

        self.state
            .update_timers(&self.config, input.jump_pressed, sensed.grounded, dt);

        if self.state.is_dashing() {
            decision.locked_out = true;
            return decision;
        }

        let mut velocity = sensed.velocity;

        self.update_facing(input.axis);
        velocity.x = input.axis * self.config.walk_speed;
        decision.walking = velocity != Vec2::ZERO && sensed.grounded;

        decision.jump_cut = self.cut_jump(input, &mut velocity);
        decision.jump = self.try_start_jump(input, sensed.grounded, &mut velocity);
        self.try_start_dash(input, sensed.grounded, &mut velocity, &mut decision);
        decision.attack = self.try_attack(input, dt);

        decision.velocity = Some(velocity);
        decision
    }

    /// Write a decision to the body and spawn its effects
    pub fn apply(
        &self,
        decision: &FrameDecision,
        body: &mut impl MotionSink,
        effects: &mut impl EffectSpawner,
    ) -> Result<(), MotionError> {
        if let Some(velocity) = decision.velocity {
            body.set_velocity(velocity)?;
        }
        if let Some(scale) = decision.gravity_scale {
            body.set_gravity_scale(scale)?;
        }
        if decision.spawn_dash_effect {
            effects.spawn_one_shot(Effect::DashBurst);
        }
        Ok(())
    }

    /// Emit animation cues for a decided frame
    ///
    /// Walking and Jumping are only refreshed on frames that ran the full logic;
    /// a dash freezes them at their last value.
    pub fn present(&self, decision: &FrameDecision, animation: &mut impl AnimationSink) {
        animation.set_cue(Cue::Dashing, self.state.is_dashing());

        if decision.locked_out {
            return;
        }

        animation.set_cue(Cue::Walking, decision.walking);
        animation.set_cue(Cue::Jumping, !decision.grounded);
        if decision.attack {
            animation.fire_trigger(Trigger::Attacking);
        }
    }

    /// Abort a running dash, e.g. on respawn
    ///
    /// Gravity is restored immediately. The dash stays on cooldown until its
    /// normal recharge time, counted from when it started.
    pub fn cancel_dash(&mut self, body: &mut impl MotionSink) -> Result<bool, MotionError> {
        if !self.state.dash.cancel() {
            return Ok(false);
        }
        debug!("Dash cancelled");
        body.set_gravity_scale(self.resting_gravity_scale)?;
        Ok(true)
    }

    fn update_facing(&mut self, axis: f32) {
        if let Some(facing) = Facing::from_axis(axis) {
            self.state.facing = facing;
        }
    }

    /// Releasing jump while rising shortens the arc
    fn cut_jump(&mut self, input: &FrameInput, velocity: &mut Vec2) -> bool {
        if input.jump_released && velocity.y > 0.0 {
            velocity.y *= self.config.jump_cut_multiplier;
            self.state.is_jumping = false;
            return true;
        }
        false
    }

    fn try_start_jump(
        &mut self,
        input: &FrameInput,
        grounded: bool,
        velocity: &mut Vec2,
    ) -> Option<JumpKind> {
        if self.state.is_jumping {
            return None;
        }

        if self.state.jump_buffer_remaining > 0.0 && self.state.coyote_time_remaining > 0.0 {
            velocity.y = self.config.jump_force;
            self.state.is_jumping = true;
            // A buffered press and a coyote window each pay for exactly one jump
            self.state.jump_buffer_remaining = 0.0;
            self.state.coyote_time_remaining = 0.0;
            debug!("Jump (grounded: {})", grounded);
            return Some(JumpKind::Ground);
        }

        if !grounded && self.state.air_jumps_used < self.config.max_air_jumps && input.jump_pressed
        {
            velocity.y = self.config.jump_force;
            self.state.is_jumping = true;
            self.state.air_jumps_used += 1;
            debug!(
                "Air jump {}/{}",
                self.state.air_jumps_used, self.config.max_air_jumps
            );
            return Some(JumpKind::Air);
        }

        None
    }

    fn try_start_dash(
        &mut self,
        input: &FrameInput,
        grounded: bool,
        velocity: &mut Vec2,
        decision: &mut FrameDecision,
    ) {
        if !input.dash_pressed || self.state.dashed_since_grounded || !self.state.dash.start() {
            return;
        }

        self.state.dashed_since_grounded = true;
        *velocity = Vec2::new(self.state.facing.sign() * self.config.dash_speed, 0.0);

        decision.dash_started = true;
        decision.gravity_scale = Some(0.0);
        decision.spawn_dash_effect = grounded;
        debug!("Dash {:?} (grounded: {})", self.state.facing, grounded);
    }

    fn try_attack(&mut self, input: &FrameInput, dt: f32) -> bool {
        self.state.time_since_last_attack += dt;

        if input.attack_pressed
            && self.state.time_since_last_attack >= self.config.time_between_attacks
        {
            self.state.time_since_last_attack = 0.0;
            debug!("Attack");
            return true;
        }
        false
    }
}

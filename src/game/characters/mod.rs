// Character system
//
// This module contains everything related to the playable character:
// - Motion tuning and its validation
// - Motion state, the dash lifecycle and the per-frame controller
// - Physics, animation and effect collaborators the controller drives

pub mod animation;
pub mod backend;
pub mod body;
pub mod character;
pub mod config;
pub mod controller;
pub mod dash;
pub mod effects;
pub mod state;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationSink, Animator, Cue, Trigger};
pub use backend::{GroundProbe, MotionError, MotionSink};
pub use body::{CharacterBody, ProbeGeometry};
pub use character::Character;
pub use config::{ConfigError, MotionConfig, STANDARD_MOTION};
pub use controller::{FrameDecision, JumpKind, MotionController, Sensed};
pub use dash::{Dash, DashPhase, DashTick};
pub use effects::{ActiveEffect, Effect, EffectPool, EffectSpawner};
pub use state::{Facing, MotionState};

// Physics boundary of the motion controller
//
// The controller never talks to rapier2d directly. It asks a `GroundProbe`
// whether the character is supported and writes its decisions to a
// `MotionSink`. `CharacterBody` implements both over the physics world;
// tests implement them with plain structs.

use glam::Vec2;

/// Failures surfaced by physics collaborators
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("rigid body {0} is not in the physics world")]
    BodyMissing(String),

    #[error("ground probe failed: {0}")]
    ProbeFailed(String),
}

/// Answers whether the character is standing on ground this frame
pub trait GroundProbe {
    /// True if any of the downward probes hits the ground layer
    fn is_grounded(&self) -> Result<bool, MotionError>;
}

/// The physical body the controller drives
pub trait MotionSink {
    /// Current linear velocity
    fn velocity(&self) -> Result<Vec2, MotionError>;

    /// Replace the linear velocity
    fn set_velocity(&mut self, velocity: Vec2) -> Result<(), MotionError>;

    /// Override the gravity scale (0 suspends gravity)
    fn set_gravity_scale(&mut self, scale: f32) -> Result<(), MotionError>;
}

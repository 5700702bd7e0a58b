// Camera that trails a rigid body

use glam::Vec2;

use super::physics::{PhysicsWorld, RigidBodyHandle};

/// Default fraction of the remaining distance covered per update
pub const DEFAULT_FOLLOW_SPEED: f32 = 0.1;

/// 2D camera that eases toward a followed body
///
/// The body is handed in at construction; the camera never looks it up by name.
#[derive(Debug, Clone)]
pub struct CameraFollow {
    /// Camera position in world space
    pub position: Vec2,
    /// Added to the target position before easing
    pub offset: Vec2,
    /// Lerp factor per update, in `[0, 1]`
    follow_speed: f32,
    target: RigidBodyHandle,
}

impl CameraFollow {
    pub fn new(target: RigidBodyHandle, position: Vec2) -> Self {
        Self {
            position,
            offset: Vec2::ZERO,
            follow_speed: DEFAULT_FOLLOW_SPEED,
            target,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_follow_speed(mut self, follow_speed: f32) -> Self {
        self.follow_speed = follow_speed.clamp(0.0, 1.0);
        self
    }

    pub fn follow_speed(&self) -> f32 {
        self.follow_speed
    }

    pub fn target(&self) -> RigidBodyHandle {
        self.target
    }

    /// Follow a different body
    pub fn retarget(&mut self, target: RigidBodyHandle) {
        self.target = target;
    }

    /// Move one step toward the target. Returns false if the target is gone.
    pub fn update(&mut self, physics: &PhysicsWorld) -> bool {
        let Some(body) = physics.get_rigid_body(self.target) else {
            return false;
        };

        let target = Vec2::new(body.translation().x, body.translation().y) + self.offset;
        self.position = self.position.lerp(target, self.follow_speed);
        true
    }
}

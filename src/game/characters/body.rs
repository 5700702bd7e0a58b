// Character body: the rapier2d side of GroundProbe and MotionSink

use glam::Vec2;
use rapier2d::prelude::{nalgebra, vector, QueryFilter};

use super::backend::{GroundProbe, MotionError, MotionSink};
use super::config::MotionConfig;
use crate::engine::physics::{CollisionGroups, PhysicsWorld, RigidBodyHandle};

/// Rays start slightly inside the collider so a body resting exactly on the
/// ground surface still registers a hit
const PROBE_LIFT: f32 = 0.05;

/// Where the ground rays are cast from, relative to the body center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeGeometry {
    /// Distance from body center down to the feet
    pub foot_offset: f32,
    /// Horizontal offset of the two side rays
    pub lateral_offset: f32,
    /// How far below the feet a hit still counts as ground
    pub length: f32,
}

impl ProbeGeometry {
    pub fn from_config(config: &MotionConfig) -> Self {
        Self {
            foot_offset: config.height / 2.0,
            lateral_offset: config.ground_probe_lateral_offset,
            length: config.ground_probe_length,
        }
    }

    /// Ray origins: center, right, left
    fn origins(&self, center: Vec2) -> [Vec2; 3] {
        let y = center.y - self.foot_offset + PROBE_LIFT;
        [
            Vec2::new(center.x, y),
            Vec2::new(center.x + self.lateral_offset, y),
            Vec2::new(center.x - self.lateral_offset, y),
        ]
    }
}

/// One character's rigid body, borrowed from the world for a frame
pub struct CharacterBody<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
    probe: ProbeGeometry,
}

impl<'w> CharacterBody<'w> {
    pub fn new(world: &'w mut PhysicsWorld, handle: RigidBodyHandle, probe: ProbeGeometry) -> Self {
        Self {
            world,
            handle,
            probe,
        }
    }

    fn missing(&self) -> MotionError {
        MotionError::BodyMissing(format!("{:?}", self.handle))
    }

    pub fn position(&self) -> Result<Vec2, MotionError> {
        let body = self
            .world
            .get_rigid_body(self.handle)
            .ok_or_else(|| self.missing())?;
        let translation = body.translation();
        Ok(Vec2::new(translation.x, translation.y))
    }

    pub fn gravity_scale(&self) -> Result<f32, MotionError> {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| body.gravity_scale())
            .ok_or_else(|| self.missing())
    }

    /// Teleport the body and stop it
    pub fn reset(&mut self, position: Vec2) -> Result<(), MotionError> {
        let missing = self.missing();
        let body = self.world.get_rigid_body_mut(self.handle).ok_or(missing)?;
        body.set_translation(vector![position.x, position.y], true);
        body.set_linvel(vector![0.0, 0.0], true);
        Ok(())
    }
}

impl GroundProbe for CharacterBody<'_> {
    fn is_grounded(&self) -> Result<bool, MotionError> {
        let center = self.position()?;
        let filter = QueryFilter::default()
            .exclude_sensors()
            .exclude_rigid_body(self.handle)
            .groups(CollisionGroups::Player.query_for(CollisionGroups::Ground));

        let grounded = self.probe.origins(center).iter().any(|origin| {
            self.world
                .cast_ray(*origin, Vec2::NEG_Y, self.probe.length + PROBE_LIFT, filter)
                .is_some()
        });

        log::trace!("Ground probe at {:?}: {}", center, grounded);
        Ok(grounded)
    }
}

impl MotionSink for CharacterBody<'_> {
    fn velocity(&self) -> Result<Vec2, MotionError> {
        let body = self
            .world
            .get_rigid_body(self.handle)
            .ok_or_else(|| self.missing())?;
        let linvel = body.linvel();
        Ok(Vec2::new(linvel.x, linvel.y))
    }

    fn set_velocity(&mut self, velocity: Vec2) -> Result<(), MotionError> {
        let missing = self.missing();
        let body = self.world.get_rigid_body_mut(self.handle).ok_or(missing)?;
        body.set_linvel(vector![velocity.x, velocity.y], true);
        Ok(())
    }

    fn set_gravity_scale(&mut self, scale: f32) -> Result<(), MotionError> {
        let missing = self.missing();
        let body = self.world.get_rigid_body_mut(self.handle).ok_or(missing)?;
        body.set_gravity_scale(scale, true);
        Ok(())
    }
}

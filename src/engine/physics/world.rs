use glam::Vec2;
use rapier2d::prelude::*;

use crate::engine::game_loop::FIXED_TIMESTEP;

/// Gravity tuned for snappy platforming rather than realism
pub const PLATFORMER_GRAVITY: Vec2 = Vec2::new(0.0, -60.0);

/// A ray hit: the collider and the distance along the ray
pub type RayHit = (ColliderHandle, Real);

/// Owns the rapier2d simulation for one level
///
/// Steps at the frame clock's fixed timestep, so a controller frame and a
/// physics step always cover the same time.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    /// Keeps dashing bodies from tunnelling through thin platforms
    ccd_solver: CCDSolver,
    /// Answers ground probes; refreshed by `step`
    query_pipeline: QueryPipeline,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::with_gravity(PLATFORMER_GRAVITY)
    }

    pub fn with_gravity(gravity: Vec2) -> Self {
        let integration_parameters = IntegrationParameters {
            dt: FIXED_TIMESTEP,
            ..IntegrationParameters::default()
        };

        Self {
            gravity: vector![gravity.x, gravity.y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
        }
    }

    /// Advance one fixed step and refresh the query pipeline
    ///
    /// Colliders added since the last step are invisible to ray casts until then.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.rigid_body_set.insert(body)
    }

    /// Attach a collider to an existing body
    pub fn add_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        self.collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set)
    }

    /// Remove a body along with its colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.rigid_body_set.remove(
            handle,
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.rigid_body_set.get_mut(handle)
    }

    /// First solid hit along `direction` within `max_distance`
    pub fn cast_ray(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: Real,
        filter: QueryFilter,
    ) -> Option<RayHit> {
        let ray = Ray::new(point![origin.x, origin.y], vector![direction.x, direction.y]);
        self.query_pipeline.cast_ray(
            &self.rigid_body_set,
            &self.collider_set,
            &ray,
            max_distance,
            true,
            filter,
        )
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.x, self.gravity.y)
    }

    pub fn timestep(&self) -> Real {
        self.integration_parameters.dt
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

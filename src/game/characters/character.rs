// Player character entity: physics body, motion controller and presentation

use glam::Vec2;

use crate::engine::input::InputSource;
use crate::engine::physics::{presets, ColliderHandle, PhysicsWorld, RigidBodyHandle};

use super::animation::Animator;
use super::backend::MotionError;
use super::body::{CharacterBody, ProbeGeometry};
use super::config::{ConfigError, MotionConfig};
use super::controller::{FrameDecision, MotionController};
use super::effects::EffectPool;
use super::state::Facing;

/// A player-controlled character living in the physics world
#[derive(Debug)]
pub struct Character {
    /// Character name (for display and logs)
    pub name: String,

    // Physics
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the character's collider
    pub collider_handle: ColliderHandle,
    probe: ProbeGeometry,

    controller: MotionController,

    // Presentation
    pub animator: Animator,
    pub effects: EffectPool,
}

impl Character {
    /// Validate `config` and add the character's body to the world
    ///
    /// Nothing is added to the world if the config is rejected.
    pub fn spawn(
        name: &str,
        config: MotionConfig,
        physics: &mut PhysicsWorld,
        spawn_x: f32,
        spawn_y: f32,
    ) -> Result<Self, ConfigError> {
        let controller = MotionController::new(config)?;
        let probe = ProbeGeometry::from_config(controller.config());

        let body = presets::player_body(spawn_x, spawn_y);
        let resting_gravity_scale = body.gravity_scale();
        let body_handle = physics.add_rigid_body(body);

        let collider =
            presets::player_collider(controller.config().width, controller.config().height);
        let collider_handle = physics.add_collider(collider, body_handle);

        log::info!("Spawned {} at ({}, {})", name, spawn_x, spawn_y);

        Ok(Self {
            name: name.to_string(),
            body_handle,
            collider_handle,
            probe,
            controller: controller.with_gravity_scale(resting_gravity_scale),
            animator: Animator::with_standard_animations(),
            effects: EffectPool::new(),
        })
    }

    /// Run one fixed step of motion logic, then advance animation and effects
    pub fn update(
        &mut self,
        physics: &mut PhysicsWorld,
        input: &impl InputSource,
        dt: f32,
    ) -> Result<FrameDecision, MotionError> {
        let mut body = CharacterBody::new(physics, self.body_handle, self.probe);
        let decision =
            self.controller
                .update(input, &mut body, &mut self.animator, &mut self.effects, dt)?;

        self.animator
            .set_flip_horizontal(self.controller.facing() == Facing::Left);
        self.animator.update(dt);
        self.effects.update(dt);

        Ok(decision)
    }

    /// Put the character back at a spawn point
    ///
    /// A running dash is cancelled so gravity comes back right away.
    pub fn respawn(
        &mut self,
        physics: &mut PhysicsWorld,
        x: f32,
        y: f32,
    ) -> Result<(), MotionError> {
        let mut body = CharacterBody::new(physics, self.body_handle, self.probe);
        self.controller.cancel_dash(&mut body)?;
        body.reset(Vec2::new(x, y))?;
        self.effects.clear();

        log::info!("Respawned {} at ({}, {})", self.name, x, y);
        Ok(())
    }

    /// Remove the character's body and colliders from the world
    pub fn despawn(self, physics: &mut PhysicsWorld) {
        physics.remove_rigid_body(self.body_handle);
        log::info!("Despawned {}", self.name);
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    /// Get character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let pos = body.translation();
            Vec2::new(pos.x, pos.y)
        })
    }

    /// Get character's current velocity
    pub fn velocity(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics.get_rigid_body(self.body_handle).map(|body| {
            let vel = body.linvel();
            Vec2::new(vel.x, vel.y)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::FrameInput;
    use crate::game::characters::animation::Cue;

    const DT: f32 = 1.0 / 60.0;

    fn level() -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        let ground = world.add_rigid_body(presets::ground_body(0.0, 0.0));
        world.add_collider(presets::ground_collider(100.0, 1.0), ground);
        world
    }

    fn run(character: &mut Character, world: &mut PhysicsWorld, input: FrameInput, frames: usize) {
        for _ in 0..frames {
            character.update(world, &input, DT).unwrap();
            world.step();
        }
    }

    fn gravity_scale(character: &Character, world: &PhysicsWorld) -> f32 {
        world
            .get_rigid_body(character.body_handle)
            .unwrap()
            .gravity_scale()
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut world = level();
        let config = MotionConfig {
            height: 0.0,
            ..MotionConfig::standard()
        };
        assert!(Character::spawn("knight", config, &mut world, 0.0, 1.5).is_err());
    }

    #[test]
    fn test_walks_along_ground() {
        let mut world = level();
        let mut knight =
            Character::spawn("knight", MotionConfig::standard(), &mut world, 0.0, 1.55).unwrap();

        run(&mut knight, &mut world, FrameInput::default(), 10);
        run(&mut knight, &mut world, FrameInput::axis(1.0), 30);

        assert!(knight.position(&world).unwrap().x > 2.0);
        assert!(knight.animator.cue(Cue::Walking));
        assert!(!knight.animator.cue(Cue::Jumping));
        assert!(!knight.animator.is_flipped_horizontal());

        run(&mut knight, &mut world, FrameInput::axis(-1.0), 1);
        assert!(knight.animator.is_flipped_horizontal());
    }

    #[test]
    fn test_jump_leaves_the_ground() {
        let mut world = level();
        let mut knight =
            Character::spawn("knight", MotionConfig::standard(), &mut world, 0.0, 1.55).unwrap();
        run(&mut knight, &mut world, FrameInput::default(), 10);
        let start = knight.position(&world).unwrap().y;

        let decision = knight.update(&mut world, &FrameInput::jump(), DT).unwrap();
        assert!(decision.jump.is_some());
        world.step();
        run(&mut knight, &mut world, FrameInput::default(), 10);

        assert!(knight.position(&world).unwrap().y > start + 1.0);
        assert!(knight.animator.cue(Cue::Jumping));
    }

    #[test]
    fn test_dash_suspends_gravity_until_it_ends() {
        let mut world = level();
        let mut knight =
            Character::spawn("knight", MotionConfig::standard(), &mut world, 0.0, 1.55).unwrap();
        run(&mut knight, &mut world, FrameInput::default(), 10);

        let decision = knight.update(&mut world, &FrameInput::dash(), DT).unwrap();
        assert!(decision.dash_started);
        assert_eq!(gravity_scale(&knight, &world), 0.0);
        assert_eq!(knight.effects.len(), 1);
        world.step();

        while knight.controller().is_dashing() {
            run(&mut knight, &mut world, FrameInput::default(), 1);
        }
        assert_eq!(gravity_scale(&knight, &world), 1.0);
        assert!(knight.position(&world).unwrap().x > 1.0);
    }

    #[test]
    fn test_respawn_cancels_dash() {
        let mut world = level();
        let mut knight =
            Character::spawn("knight", MotionConfig::standard(), &mut world, 0.0, 1.55).unwrap();
        run(&mut knight, &mut world, FrameInput::dash(), 1);
        assert!(knight.controller().is_dashing());

        knight.respawn(&mut world, -5.0, 4.0).unwrap();

        assert!(!knight.controller().is_dashing());
        assert!(knight.controller().state().dash_on_cooldown());
        assert_eq!(gravity_scale(&knight, &world), 1.0);
        assert_eq!(knight.position(&world).unwrap(), Vec2::new(-5.0, 4.0));
        assert!(knight.effects.is_empty());
    }

    #[test]
    fn test_despawned_body_fails_update() {
        let mut world = level();
        let knight =
            Character::spawn("knight", MotionConfig::standard(), &mut world, 0.0, 1.55).unwrap();
        let handle = knight.body_handle;
        knight.despawn(&mut world);
        assert!(world.get_rigid_body(handle).is_none());

        let mut ghost =
            Character::spawn("ghost", MotionConfig::standard(), &mut world, 0.0, 1.55).unwrap();
        world.remove_rigid_body(ghost.body_handle);
        let result = ghost.update(&mut world, &FrameInput::default(), DT);
        assert!(matches!(result, Err(MotionError::BodyMissing(_))));
    }
}

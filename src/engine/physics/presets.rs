// Rigid bodies and colliders for the level and the player
//
// Every collider gets its `CollisionGroups` here, so ground probes can rely on
// walkable geometry being in the `Ground` group.

use super::collision::CollisionGroups;
use rapier2d::prelude::*;

/// Player body: dynamic, upright, never asleep
///
/// Damping stays at zero since the motion controller sets velocity directly,
/// and CCD keeps fast dashes from tunnelling through thin platforms.
pub fn player_body(x: Real, y: Real) -> RigidBody {
    RigidBodyBuilder::dynamic()
        .translation(vector![x, y])
        .lock_rotations()
        .gravity_scale(1.0)
        .linear_damping(0.0)
        .can_sleep(false)
        .ccd_enabled(true)
        .build()
}

/// Upright capsule spanning `width` x `height`, feet at `-height / 2`
pub fn player_collider(width: Real, height: Real) -> Collider {
    let radius = width / 2.0;
    // A character wider than tall degenerates into a ball
    let half_height = (height / 2.0 - radius).max(0.0);

    ColliderBuilder::capsule_y(half_height, radius)
        .collision_groups(CollisionGroups::Player.to_interaction_groups())
        .friction(0.0)
        .restitution(0.0)
        .density(1.0)
        .build()
}

pub fn ground_body(x: Real, y: Real) -> RigidBody {
    RigidBodyBuilder::fixed().translation(vector![x, y]).build()
}

/// Walkable box centered on its body
pub fn ground_collider(width: Real, height: Real) -> Collider {
    ColliderBuilder::cuboid(width / 2.0, height / 2.0)
        .collision_groups(CollisionGroups::Ground.to_interaction_groups())
        .friction(0.3)
        .restitution(0.0)
        .build()
}

/// Trigger zone; never counts as ground
pub fn sensor_collider(width: Real, height: Real) -> Collider {
    ColliderBuilder::cuboid(width / 2.0, height / 2.0)
        .collision_groups(CollisionGroups::Sensor.to_interaction_groups())
        .sensor(true)
        .build()
}

// Physics system using rapier2d

mod collision;
pub mod presets;
mod world;

pub use collision::CollisionGroups;
pub use world::PhysicsWorld;

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::{ColliderHandle, Real, RigidBodyHandle, Vector};

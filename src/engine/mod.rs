// Engine modules: frame clock, input, physics, camera

pub mod camera;
pub mod game_loop;
pub mod input;
pub mod physics;

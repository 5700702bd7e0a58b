// Player motion and action controller for a 2D side-scrolling action game

pub mod core;
pub mod engine;
pub mod game;

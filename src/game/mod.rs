// Gameplay modules

pub mod characters;

// One-shot visual effects attached to a character
//
// An effect lives exactly as long as its clip takes to play once, then it is
// removed from the pool.

use super::animation::AnimationClip;
use glam::Vec2;

/// Effects the controller can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Dust burst left behind by a grounded dash
    DashBurst,
}

impl Effect {
    /// The clip this effect plays, once
    pub fn clip(self) -> AnimationClip {
        match self {
            Self::DashBurst => AnimationClip::one_shot("dash_burst", 6, 24.0),
        }
    }
}

/// Spawns one-shot effects attached to the character
pub trait EffectSpawner {
    fn spawn_one_shot(&mut self, effect: Effect);
}

/// A live effect instance
#[derive(Debug, Clone)]
pub struct ActiveEffect {
    pub effect: Effect,
    /// Position relative to the owning character
    pub offset: Vec2,
    /// Time since spawn
    pub age: f32,
    lifetime: f32,
}

impl ActiveEffect {
    pub fn remaining(&self) -> f32 {
        (self.lifetime - self.age).max(0.0)
    }
}

/// Owns the effects attached to one character
#[derive(Debug, Default)]
pub struct EffectPool {
    active: Vec<ActiveEffect>,
}

impl EffectPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Age every effect and drop the ones whose clip has finished
    pub fn update(&mut self, dt: f32) {
        for effect in &mut self.active {
            effect.age += dt;
        }
        self.active.retain(|effect| {
            let alive = effect.age < effect.lifetime;
            if !alive {
                log::trace!("{:?} finished after {:.3}s", effect.effect, effect.age);
            }
            alive
        });
    }

    /// Live effects, oldest first
    pub fn active(&self) -> &[ActiveEffect] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

impl EffectSpawner for EffectPool {
    fn spawn_one_shot(&mut self, effect: Effect) {
        let lifetime = effect.clip().total_duration();
        self.active.push(ActiveEffect {
            effect,
            offset: Vec2::ZERO,
            age: 0.0,
            lifetime,
        });
    }
}

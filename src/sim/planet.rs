//! Planets: stationary targets destroyed by repeated ship contact

use glam::Vec2;

use crate::consts::PLANET_RADIUS;

/// A stationary target with hit points. Spawned in batches at level start
/// and removed from the world once destroyed.
#[derive(Debug, Clone)]
pub struct Planet {
    pub pos: Vec2,
    health: i32,
    max_health: i32,
    /// Visual spin accumulator in degrees
    pub rotation: f32,
}

impl Planet {
    pub fn new(pos: Vec2, health: i32) -> Self {
        Self {
            pos,
            health,
            max_health: health,
            rotation: 0.0,
        }
    }

    pub fn radius(&self) -> f32 {
        PLANET_RADIUS
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Remaining health as a fraction of spawn health, in [0, 1]
    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    /// Advance the spin accumulator (one degree per tick)
    pub fn spin(&mut self) {
        self.rotation += 1.0;
    }
}

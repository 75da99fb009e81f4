//! Transient particle effects for impacts and explosions

use glam::Vec2;
use rand::Rng;

use crate::angle_to_vector;
use crate::consts::PARTICLE_DRAG;
use crate::render::Color;

/// A short-lived decaying point
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    pub life: i32,
    max_life: i32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: Color, life: i32) -> Self {
        Self {
            pos,
            vel,
            size,
            color,
            life,
            max_life: life,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel *= PARTICLE_DRAG;
        self.life -= 1;
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0
    }

    /// Remaining life as a fade ratio in [0, 1]
    pub fn life_ratio(&self) -> f32 {
        (self.life as f32 / self.max_life as f32).max(0.0)
    }
}

/// Owns all live particles; spawns bursts and prunes dead ones each tick
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explosion preset: fast, large, long-lived, full base color
    pub fn spawn_explosion(&mut self, rng: &mut impl Rng, pos: Vec2, count: usize, base: Color) {
        for _ in 0..count {
            let dir = angle_to_vector(rng.random_range(0.0..360.0));
            let speed = 2.0 + rng.random_range(0.0..8.0);
            let size = 2.0 + rng.random_range(0.0..5.0);
            let life = 20 + rng.random_range(0..30);
            self.particles
                .push(Particle::new(pos, dir * speed, size, base, life));
        }
    }

    /// Impact preset: slower, smaller, short-lived, channels boosted +50
    pub fn spawn_impact(&mut self, rng: &mut impl Rng, pos: Vec2, count: usize, base: Color) {
        let color = base.lighten(50);
        for _ in 0..count {
            let dir = angle_to_vector(rng.random_range(0.0..360.0));
            let speed = 1.0 + rng.random_range(0.0..4.0);
            let size = 1.0 + rng.random_range(0.0..3.0);
            let life = 10 + rng.random_range(0..20);
            self.particles
                .push(Particle::new(pos, dir * speed, size, color, life));
        }
    }

    /// Advance every particle one tick and drop the dead ones
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_explosion_preset_ranges() {
        let mut system = ParticleSystem::new();
        let mut rng = Pcg32::seed_from_u64(9);
        system.spawn_explosion(&mut rng, Vec2::new(100.0, 100.0), 50, Color::RED);
        assert_eq!(system.len(), 50);
        for p in system.iter() {
            let speed = p.vel.length();
            assert!(speed >= 2.0 - 1e-4 && speed < 10.0);
            assert!(p.size >= 2.0 && p.size < 7.0);
            assert!(p.life >= 20 && p.life < 50);
            assert_eq!(p.color, Color::RED);
        }
    }

    #[test]
    fn test_impact_preset_boosts_color() {
        let mut system = ParticleSystem::new();
        let mut rng = Pcg32::seed_from_u64(9);
        let base = Color::rgb(100, 220, 10);
        system.spawn_impact(&mut rng, Vec2::ZERO, 20, base);
        for p in system.iter() {
            assert_eq!(p.color, Color::rgb(150, 255, 60));
            let speed = p.vel.length();
            assert!(speed >= 1.0 - 1e-4 && speed < 5.0);
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!(p.life >= 10 && p.life < 30);
        }
    }

    #[test]
    fn test_life_is_monotonic_and_removal_is_exact() {
        let mut system = ParticleSystem::new();
        let mut rng = Pcg32::seed_from_u64(4);
        system.spawn_impact(&mut rng, Vec2::ZERO, 30, Color::CYAN);

        let mut last_total: i64 = system.iter().map(|p| p.life as i64).sum();
        for _ in 0..40 {
            let before = system.len();
            let min_life = system.iter().map(|p| p.life).min().unwrap_or(0);
            system.update();
            let expired = if min_life <= 1 {
                before - system.len()
            } else {
                0
            };
            // Only particles that hit zero life may be removed
            assert!(system.len() + expired == before);
            assert!(system.iter().all(|p| p.life > 0));

            let total: i64 = system.iter().map(|p| p.life as i64).sum();
            assert!(total < last_total || system.is_empty());
            last_total = total;
        }
        // Impact lives cap at 29 ticks, so nothing survives 40
        assert!(system.is_empty());
    }

    #[test]
    fn test_velocity_damping() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, Color::WHITE, 30);
        p.update();
        assert!((p.vel.x - 10.0 * PARTICLE_DRAG).abs() < 1e-5);
        assert_eq!(p.pos.x, 10.0);
    }
}

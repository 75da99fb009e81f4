//! Starfall - a touch-driven space arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship physics, homing enemies, particles)
//! - `render`: Translates simulation state into ordered draw commands
//! - `runtime`: Game loop lifecycle, frame pacing, input delivery
//! - `persistence`: Save/load of the score record
//! - `config`: Screen geometry and batch sizes

pub mod config;
pub mod persistence;
pub mod render;
pub mod runtime;
pub mod sim;

pub use config::EngineConfig;
pub use runtime::{GameLoop, Lifecycle};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target duration of one simulation tick (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 35.0;
    pub const SHIP_MAX_SPEED: f32 = 12.0;
    pub const SHIP_ACCELERATION: f32 = 0.5;
    /// Multiplicative velocity damping, applied every tick
    pub const SHIP_FRICTION: f32 = 0.94;
    /// Ship center never leaves [margin, screen - margin] on either axis
    pub const SHIP_WALL_MARGIN: f32 = 40.0;
    /// Engine glow decay per idle tick
    pub const ENGINE_GLOW_DECAY: f32 = 0.9;

    /// Planet defaults
    pub const PLANET_RADIUS: f32 = 70.0;
    pub const PLANET_HIT_DAMAGE: i32 = 25;
    pub const PLANETS_PER_LEVEL: usize = 20;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 45.0;
    /// Respawn trials only run below this population
    pub const ENEMY_TARGET_COUNT: usize = 10;
    /// Distance past any screen edge before an enemy is culled
    pub const ENEMY_DESPAWN_MARGIN: f32 = 100.0;
    /// Percent chance per tick of spawning a replacement enemy
    pub const ENEMY_SPAWN_CHANCE: u32 = 2;

    /// Joystick defaults
    pub const JOYSTICK_BASE_RADIUS: f32 = 120.0;
    /// Touches activate the joystick only below screen_height - this band
    pub const JOYSTICK_BAND_HEIGHT: f32 = 400.0;

    pub const STAR_COUNT: usize = 200;

    /// Particle velocity damping per tick
    pub const PARTICLE_DRAG: f32 = 0.98;
}

/// Convert an angle in degrees to a unit direction vector
#[inline]
pub fn angle_to_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_to_vector_cardinals() {
        assert!((angle_to_vector(0.0) - Vec2::X).length() < 1e-6);
        assert!((angle_to_vector(90.0) - Vec2::Y).length() < 1e-6);
        assert!((angle_to_vector(180.0) + Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_angle_to_vector_is_unit_length() {
        for deg in [13.0f32, 97.5, 211.0, 359.9] {
            assert!((angle_to_vector(deg).length() - 1.0).abs() < 1e-5);
        }
    }
}

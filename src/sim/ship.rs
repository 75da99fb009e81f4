//! Player ship: joystick-driven thrust with friction and screen bounds

use glam::Vec2;

use crate::consts::*;

/// The player's ship. Created once per session and reset in place when
/// destroyed; never removed from the world.
#[derive(Debug, Clone)]
pub struct SpaceShip {
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: i32,
    /// Visual engine intensity in [0, 1]; not a physical quantity
    pub engine_glow: f32,
    bounds: Vec2,
}

impl SpaceShip {
    pub fn new(pos: Vec2, bounds: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            health: 100,
            engine_glow: 0.0,
            bounds,
        }
    }

    pub fn radius(&self) -> f32 {
        SHIP_RADIUS
    }

    /// Advance one tick. Thrust integrates the joystick force into velocity
    /// and clamps speed; friction applies every tick regardless. The
    /// position clamp does not touch velocity, so a ship pushed against a
    /// wall keeps its momentum along the free axis (and into the wall).
    pub fn update(&mut self, force: Vec2, thrusting: bool) {
        if thrusting {
            self.vel += force * SHIP_ACCELERATION;
            self.engine_glow = 1.0;

            let speed = self.vel.length();
            if speed > SHIP_MAX_SPEED {
                self.vel = self.vel / speed * SHIP_MAX_SPEED;
            }
        } else {
            self.engine_glow *= ENGINE_GLOW_DECAY;
        }

        self.vel *= SHIP_FRICTION;
        self.pos += self.vel;

        let margin = Vec2::splat(SHIP_WALL_MARGIN);
        self.pos = self.pos.clamp(margin, self.bounds - margin);
    }

    /// Circle-circle overlap test against another entity
    pub fn collides_with(&self, other_pos: Vec2, other_radius: f32) -> bool {
        self.pos.distance(other_pos) < SHIP_RADIUS + other_radius
    }

    /// Respawn in place: position set, velocity zeroed, health restored
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.health = 100;
    }
}

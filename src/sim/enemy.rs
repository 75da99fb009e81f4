//! Homing enemies: spawn at a screen edge, steer toward the ship

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A homing mine. The level is captured at spawn and scales both the
/// steering acceleration and the speed cap.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    level: u32,
    /// Visual spin accumulator in degrees
    pub rotation: f32,
    /// Visual pulse phase, advanced per tick
    pub pulse_phase: f32,
    bounds: Vec2,
}

impl Enemy {
    /// Spawn just outside a uniformly chosen screen edge
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2, level: u32) -> Self {
        let side = rng.random_range(0..4u8);
        Self::spawn_at_edge(side, rng, bounds, level)
    }

    /// Spawn at a specific edge: 0 = top, 1 = right, 2 = bottom, 3 = left.
    /// Initial velocity points inward at full edge speed, with a randomized
    /// tangential component of at most half that speed.
    pub(crate) fn spawn_at_edge(side: u8, rng: &mut impl Rng, bounds: Vec2, level: u32) -> Self {
        let speed = 2.0 + level as f32 * 0.5;
        let tangential = (rng.random_range(0.0..1.0f32) - 0.5) * speed;
        let (pos, vel) = match side {
            0 => (
                Vec2::new(rng.random_range(0.0..bounds.x), -ENEMY_RADIUS),
                Vec2::new(tangential, speed),
            ),
            1 => (
                Vec2::new(bounds.x + ENEMY_RADIUS, rng.random_range(0.0..bounds.y)),
                Vec2::new(-speed, tangential),
            ),
            2 => (
                Vec2::new(rng.random_range(0.0..bounds.x), bounds.y + ENEMY_RADIUS),
                Vec2::new(tangential, -speed),
            ),
            _ => (
                Vec2::new(-ENEMY_RADIUS, rng.random_range(0.0..bounds.y)),
                Vec2::new(speed, tangential),
            ),
        };

        Self {
            pos,
            vel,
            level,
            rotation: 0.0,
            pulse_phase: 0.0,
            bounds,
        }
    }

    pub fn radius(&self) -> f32 {
        ENEMY_RADIUS
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Speed cap after steering, scaled by level
    pub fn max_speed(&self) -> f32 {
        3.0 + self.level as f32 * 0.5
    }

    /// Pulse factor for rendering, in roughly [0.6, 1.0]
    pub fn pulse(&self) -> f32 {
        self.pulse_phase.sin() * 0.2 + 0.8
    }

    /// Steer toward the ship with capped acceleration and speed, then
    /// integrate. The steering term is skipped when the enemy sits exactly
    /// on the ship to avoid a zero division; position still integrates.
    pub fn update(&mut self, ship_pos: Vec2) {
        let to_ship = ship_pos - self.pos;
        let distance = to_ship.length();

        if distance > 0.0 {
            let steer = 0.08 * (2.0 + self.level as f32 * 0.4);
            self.vel += to_ship / distance * steer;

            let speed = self.vel.length();
            let max = self.max_speed();
            if speed > max {
                self.vel = self.vel / speed * max;
            }
        }

        self.pos += self.vel;
        self.rotation += 4.0;
        self.pulse_phase += 0.16;
    }

    /// Exit condition: more than the despawn margin past any screen edge
    pub fn is_out_of_screen(&self) -> bool {
        self.pos.x < -ENEMY_DESPAWN_MARGIN
            || self.pos.x > self.bounds.x + ENEMY_DESPAWN_MARGIN
            || self.pos.y < -ENEMY_DESPAWN_MARGIN
            || self.pos.y > self.bounds.y + ENEMY_DESPAWN_MARGIN
    }
}

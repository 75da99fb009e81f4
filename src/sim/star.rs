//! Background starfield with ship-velocity parallax

use glam::Vec2;
use rand::Rng;

/// A parallax dot. Visual fields are fixed at creation; only the position
/// changes, driven by the ship's velocity and wrapped at the configured
/// extent.
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    parallax: f32,
    pub brightness: f32,
    wrap: Vec2,
}

impl Star {
    pub fn spawn(rng: &mut impl Rng, screen: Vec2, wrap: Vec2) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..screen.x),
                rng.random_range(0.0..screen.y),
            ),
            size: 1.0 + rng.random_range(0.0..3.0),
            parallax: 0.1 + rng.random_range(0.0..0.5),
            brightness: 0.3 + rng.random_range(0.0..0.7),
            wrap,
        }
    }

    /// Drift opposite the ship's velocity, scaled by this star's parallax
    /// depth, wrapping 20 px past the extent on each side.
    pub fn update(&mut self, ship_vel: Vec2) {
        self.pos -= ship_vel * self.parallax * 0.1;

        if self.pos.x < -20.0 {
            self.pos.x = self.wrap.x;
        } else if self.pos.x > self.wrap.x {
            self.pos.x = -20.0;
        }
        if self.pos.y < -20.0 {
            self.pos.y = self.wrap.y;
        } else if self.pos.y > self.wrap.y {
            self.pos.y = -20.0;
        }
    }
}

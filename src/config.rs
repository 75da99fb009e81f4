//! Engine configuration
//!
//! Screen geometry, batch sizes, and the star wrap extent. All values are
//! fixed for the lifetime of an engine instance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fixed 1080x1920 wrap extent for hosts that want identical star motion
/// on every resolution. New configs wrap at the actual screen dimensions.
pub const LEGACY_STAR_WRAP: Vec2 = Vec2::new(1080.0, 1920.0);

/// Static engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Star wrap extent override. `None` wraps at the screen dimensions.
    pub star_wrap: Option<Vec2>,
    pub star_count: usize,
    pub planets_per_level: usize,
    pub enemies_per_level: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(1080.0, 1920.0)
    }
}

impl EngineConfig {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            star_wrap: None,
            star_count: STAR_COUNT,
            planets_per_level: PLANETS_PER_LEVEL,
            enemies_per_level: ENEMY_TARGET_COUNT,
        }
    }

    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Extent stars wrap around; defaults to the screen itself.
    pub fn star_wrap_extent(&self) -> Vec2 {
        self.star_wrap.unwrap_or_else(|| self.screen())
    }

    /// Ship spawn/reset point (screen center)
    pub fn ship_start(&self) -> Vec2 {
        self.screen() / 2.0
    }

    /// Joystick base center, anchored near the bottom of the screen
    pub fn joystick_center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height - 200.0)
    }

    /// Touches below this y-coordinate may activate the joystick
    pub fn joystick_band_top(&self) -> f32 {
        self.screen_height - JOYSTICK_BAND_HEIGHT
    }
}

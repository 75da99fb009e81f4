//! Draw-command vocabulary and the drawing-surface boundary
//!
//! The simulation never draws. Each tick `frame::build_frame` turns the
//! engine state into an ordered list of primitives; later commands occlude
//! earlier ones. A host supplies a `DrawSurface` to consume them.

pub mod frame;

pub use frame::build_frame;

use glam::Vec2;

/// RGBA color, straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Brighten each channel, saturating at 255; alpha unchanged
    pub const fn lighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
            a: self.a,
        }
    }
}

/// Circle fill style
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Radial gradient from the circle center to its rim
    Radial { center: Color, edge: Color },
}

/// One abstract draw primitive. Order within a frame matters.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle {
        center: Vec2,
        radius: f32,
        fill: Fill,
    },
    RoundedRect {
        min: Vec2,
        max: Vec2,
        corner: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        size: f32,
        color: Color,
        text: String,
    },
}

/// The presentation boundary. An invalid surface causes the loop to skip
/// that tick's draw phase entirely; the update phase still runs.
pub trait DrawSurface {
    fn is_valid(&self) -> bool {
        true
    }

    fn present(&mut self, frame: &[DrawCmd]);
}

/// Surface that discards every frame; used headless and in tests
#[derive(Debug, Default)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn present(&mut self, _frame: &[DrawCmd]) {}
}

/// HUD coin formatting: 2_500_000 -> "2.5M", 45_300 -> "45.3K"
pub fn format_coins(coins: i64) -> String {
    if coins >= 1_000_000 {
        format!("{:.1}M", coins as f64 / 1_000_000.0)
    } else if coins >= 1000 {
        format!("{:.1}K", coins as f64 / 1000.0)
    } else {
        coins.to_string()
    }
}

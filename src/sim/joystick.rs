//! Virtual joystick: maps a raw touch position to a normalized force vector

use glam::Vec2;

/// On-screen joystick with a fixed base and a touch-driven handle.
///
/// The handle is always within `base_radius` of the center; the force
/// vector is the handle offset divided by `base_radius`, so its magnitude
/// never exceeds 1.
#[derive(Debug, Clone)]
pub struct VirtualJoystick {
    center: Vec2,
    base_radius: f32,
    handle: Vec2,
    active: bool,
}

impl VirtualJoystick {
    pub fn new(center: Vec2, base_radius: f32) -> Self {
        Self {
            center,
            base_radius,
            handle: center,
            active: false,
        }
    }

    /// Apply a touch sample. When active, the handle follows the touch
    /// point, clamped linearly to the base disk. When inactive, the handle
    /// snaps back to center and the force returns to zero.
    pub fn set_active(&mut self, active: bool, touch: Vec2) {
        self.active = active;
        if active {
            let offset = touch - self.center;
            let distance = offset.length();
            if distance <= self.base_radius {
                self.handle = touch;
            } else {
                self.handle = self.center + offset / distance * self.base_radius;
            }
        } else {
            self.handle = self.center;
        }
    }

    /// Normalized force vector, bounded to the unit disk
    pub fn force(&self) -> Vec2 {
        (self.handle - self.center) / self.base_radius
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    pub fn handle(&self) -> Vec2 {
        self.handle
    }

    pub fn handle_radius(&self) -> f32 {
        self.base_radius * 0.4
    }
}

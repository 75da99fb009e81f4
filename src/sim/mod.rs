//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, injected at engine construction
//! - No rendering or platform dependencies

pub mod enemy;
pub mod engine;
pub mod joystick;
pub mod particles;
pub mod planet;
pub mod score;
pub mod ship;
pub mod star;

pub use enemy::Enemy;
pub use engine::{GameEngine, TouchEvent, TouchPhase};
pub use joystick::VirtualJoystick;
pub use particles::{Particle, ParticleSystem};
pub use planet::Planet;
pub use score::{COIN_FLOOR, GameState, SaveRecord};
pub use ship::SpaceShip;
pub use star::Star;

//! Score, coins, and level progression

use serde::{Deserialize, Serialize};

/// Coins never drop below this balance, no matter how many penalties land
pub const COIN_FLOOR: i64 = 1_000_000;

/// The three scalars that survive a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub coins: i64,
    pub score: i32,
    pub level: u32,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            coins: COIN_FLOOR,
            score: 0,
            level: 1,
        }
    }
}

/// Score/coins/level counters and the progression formulas.
/// Mutated only by the simulation loop.
#[derive(Debug, Clone)]
pub struct GameState {
    coins: i64,
    score: i32,
    current_level: u32,
    destroyed_planets: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_record(SaveRecord::default())
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume counters from a persisted record
    pub fn from_record(record: SaveRecord) -> Self {
        Self {
            coins: record.coins,
            score: record.score,
            current_level: record.level.max(1),
            destroyed_planets: 0,
        }
    }

    /// Snapshot the persisted scalars
    pub fn record(&self) -> SaveRecord {
        SaveRecord {
            coins: self.coins,
            score: self.score,
            level: self.current_level,
        }
    }

    /// Reward for destroying a planet, scaled by the current level
    pub fn planet_destroyed(&mut self) {
        self.destroyed_planets += 1;
        self.score += 100 * self.current_level as i32;
        self.coins += 50_000 * self.current_level as i64;
    }

    /// Penalty for losing the ship; score floors at 0, coins at the floor
    pub fn ship_destroyed(&mut self) {
        self.score = (self.score - 50).max(0);
        self.coins = (self.coins - 100_000).max(COIN_FLOOR);
    }

    /// Level-complete bonus and progression
    pub fn next_level(&mut self) {
        self.current_level += 1;
        self.destroyed_planets = 0;
        self.coins += 1_000_000;
        self.score += 1000;
    }

    /// Spawn health for planets of the current level
    pub fn planet_health(&self) -> i32 {
        self.current_level as i32 * 10 + 50
    }

    pub fn coins(&self) -> i64 {
        self.coins
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn destroyed_planets(&self) -> u32 {
        self.destroyed_planets
    }
}

//! Headless demo driver: runs the game loop for a few seconds with a
//! scripted touch and prints the resulting counters. Set RUST_LOG=info to
//! watch level batches and collisions go by.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use starfall::persistence::JsonFileStore;
use starfall::render::{NullSurface, format_coins};
use starfall::sim::{TouchEvent, TouchPhase};
use starfall::{EngineConfig, GameLoop};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("seed {seed}");

    let config = EngineConfig::default();
    let stick = config.joystick_center();
    let mut game = GameLoop::new(
        config,
        seed,
        Box::new(NullSurface),
        Box::new(JsonFileStore::new("starfall_save.json")),
    );

    game.start();

    // Hold the stick up-left for a while, then let the ship coast
    game.touch(TouchEvent {
        phase: TouchPhase::Down,
        pos: stick + Vec2::new(-80.0, -80.0),
    });
    thread::sleep(Duration::from_millis(2000));
    game.touch(TouchEvent {
        phase: TouchPhase::Up,
        pos: stick,
    });
    thread::sleep(Duration::from_millis(1000));

    let (ticks, level, score, coins) = game.with_engine(|e| {
        (
            e.ticks,
            e.state.current_level(),
            e.state.score(),
            e.state.coins(),
        )
    });
    println!("{ticks} ticks | level {level} | score {score} | coins {}", format_coins(coins));

    game.stop();
}

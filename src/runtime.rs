//! Game loop lifecycle and frame pacing
//!
//! A single worker thread drives update -> draw -> pace at ~60 Hz. Touch
//! input arrives from the host thread and is applied under the engine lock,
//! so the loop always observes the latest sample (last write wins, no
//! queueing). Pause/stop are flags polled once per tick boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::EngineConfig;
use crate::consts::TICK_MS;
use crate::persistence::ScoreStore;
use crate::render::{DrawSurface, build_frame};
use crate::sim::{GameEngine, GameState, TouchEvent};

/// Loop lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Stopped,
    Running,
    Paused,
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Owns the engine, the drawing surface, and the worker thread.
///
/// `start`/`pause`/`resume`/`stop` implement the lifecycle machine:
/// pause exits the loop thread but keeps all state; resume spawns a fresh
/// thread over the same data; stop is terminal and flushes the save record.
pub struct GameLoop {
    engine: Arc<Mutex<GameEngine>>,
    surface: Arc<Mutex<Box<dyn DrawSurface + Send>>>,
    playing: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    store: Box<dyn ScoreStore + Send>,
    lifecycle: Lifecycle,
    terminated: bool,
}

impl GameLoop {
    /// Build a loop, resuming counters from the store
    pub fn new(
        config: EngineConfig,
        seed: u64,
        surface: Box<dyn DrawSurface + Send>,
        store: Box<dyn ScoreStore + Send>,
    ) -> Self {
        let state = GameState::from_record(store.load());
        let engine = GameEngine::with_state(config, seed, state);
        Self {
            engine: Arc::new(Mutex::new(engine)),
            surface: Arc::new(Mutex::new(surface)),
            playing: Arc::new(AtomicBool::new(false)),
            worker: None,
            store,
            lifecycle: Lifecycle::Stopped,
            terminated: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Begin ticking. No-op if already running or after `stop`.
    pub fn start(&mut self) {
        if self.terminated {
            log::warn!("start ignored: loop already stopped for good");
            return;
        }
        if self.lifecycle == Lifecycle::Running {
            return;
        }

        self.playing.store(true, Ordering::Release);
        let engine = Arc::clone(&self.engine);
        let surface = Arc::clone(&self.surface);
        let playing = Arc::clone(&self.playing);
        self.worker = Some(thread::spawn(move || run_loop(engine, surface, playing)));
        self.lifecycle = Lifecycle::Running;
        log::info!("game loop running");
    }

    /// Resume after a pause; a new thread picks up the retained state
    pub fn resume(&mut self) {
        self.start();
    }

    /// Stop ticking but retain all state. Blocks until the worker exits,
    /// which happens at the next tick boundary.
    pub fn pause(&mut self) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        self.join_worker();
        self.lifecycle = Lifecycle::Paused;
        log::info!("game loop paused");
    }

    /// Terminal shutdown: exits the loop and flushes the save record
    pub fn stop(&mut self) {
        if self.terminated {
            return;
        }
        self.join_worker();
        let record = lock(&self.engine).state.record();
        self.store.save(&record);
        self.lifecycle = Lifecycle::Stopped;
        self.terminated = true;
        log::info!(
            "game loop stopped (level {}, score {}, coins {})",
            record.level,
            record.score,
            record.coins
        );
    }

    /// Deliver a touch sample. Applied under the engine lock, so the loop
    /// sees it no later than its next joystick read.
    pub fn touch(&self, event: TouchEvent) {
        lock(&self.engine).handle_touch(event);
    }

    /// Run a closure against the engine state (HUD queries, tests)
    pub fn with_engine<R>(&self, f: impl FnOnce(&GameEngine) -> R) -> R {
        f(&lock(&self.engine))
    }

    fn join_worker(&mut self) {
        self.playing.store(false, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("loop thread panicked");
            }
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        if !self.terminated {
            self.stop();
        }
    }
}

fn run_loop(
    engine: Arc<Mutex<GameEngine>>,
    surface: Arc<Mutex<Box<dyn DrawSurface + Send>>>,
    playing: Arc<AtomicBool>,
) {
    while playing.load(Ordering::Acquire) {
        let tick_start = Instant::now();
        {
            let mut engine = lock(&engine);
            engine.tick();

            // Skip the draw phase when the surface is unavailable; the
            // next tick re-checks.
            let mut surface = lock(&surface);
            if surface.is_valid() {
                let frame = build_frame(&engine);
                surface.present(&frame);
            }
        }
        pace(tick_start);
    }
}

/// Sleep out the remainder of the 16 ms budget. An overlong tick just
/// starts the next one late; there is no catch-up.
fn pace(tick_start: Instant) {
    let target = Duration::from_millis(TICK_MS);
    let elapsed = tick_start.elapsed();
    if elapsed < target {
        thread::sleep(target - elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::render::{DrawCmd, NullSurface};
    use crate::sim::{SaveRecord, TouchPhase};
    use glam::Vec2;

    fn sleep_ticks(n: u64) {
        thread::sleep(Duration::from_millis(TICK_MS * n));
    }

    fn game(store: MemoryStore) -> GameLoop {
        GameLoop::new(
            EngineConfig::new(1080.0, 1920.0),
            7,
            Box::new(NullSurface),
            Box::new(store),
        )
    }

    #[test]
    fn test_pause_retains_state_and_resume_continues() {
        let mut game = game(MemoryStore::new());
        game.start();
        assert_eq!(game.lifecycle(), Lifecycle::Running);
        sleep_ticks(6);

        game.pause();
        assert_eq!(game.lifecycle(), Lifecycle::Paused);
        let paused_ticks = game.with_engine(|e| e.ticks);
        assert!(paused_ticks > 0);

        sleep_ticks(4);
        assert_eq!(game.with_engine(|e| e.ticks), paused_ticks);

        game.resume();
        sleep_ticks(6);
        game.pause();
        assert!(game.with_engine(|e| e.ticks) > paused_ticks);
        game.stop();
    }

    #[test]
    fn test_stop_flushes_record_and_is_terminal() {
        let store = MemoryStore::new();
        store.save(&SaveRecord {
            coins: 4_000_000,
            score: 123,
            level: 3,
        });

        let mut game = game(store.clone());
        // Counters resumed from the store
        assert_eq!(game.with_engine(|e| e.state.current_level()), 3);

        game.start();
        sleep_ticks(3);
        game.stop();
        assert_eq!(game.lifecycle(), Lifecycle::Stopped);

        let saved = store.saved().expect("record flushed");
        assert_eq!(saved.level, 3);
        assert!(saved.coins >= 4_000_000);

        // Not resumable after stop
        game.start();
        assert_eq!(game.lifecycle(), Lifecycle::Stopped);
    }

    #[test]
    fn test_touch_reaches_joystick_while_running() {
        let mut game = game(MemoryStore::new());
        game.start();
        let center = game.with_engine(|e| e.joystick.center());
        game.touch(TouchEvent {
            phase: TouchPhase::Down,
            pos: center + Vec2::new(-60.0, 0.0),
        });
        assert!(game.with_engine(|e| e.joystick.is_active()));
        sleep_ticks(4);
        // Leftward force has pushed the ship off center
        assert!(game.with_engine(|e| e.ship.vel.x < 0.0));
        game.stop();
    }

    #[test]
    fn test_invalid_surface_skips_draw_but_ticks() {
        struct DeadSurface;
        impl DrawSurface for DeadSurface {
            fn is_valid(&self) -> bool {
                false
            }
            fn present(&mut self, _frame: &[DrawCmd]) {
                panic!("present called on an invalid surface");
            }
        }

        let mut game = GameLoop::new(
            EngineConfig::new(1080.0, 1920.0),
            7,
            Box::new(DeadSurface),
            Box::new(MemoryStore::new()),
        );
        game.start();
        sleep_ticks(5);
        game.stop();
        assert!(game.with_engine(|e| e.ticks) > 0);
    }
}

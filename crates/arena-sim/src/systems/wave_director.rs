//! Wave director: schedules waves, scales difficulty, and declares victory.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use arena_core::constants::*;
use arena_core::enums::{EnemyKind, WavePhase};
use arena_core::types::Bounds;

use super::EventBuffer;
use crate::config::SimConfig;
use crate::store::EntityStore;
use crate::world_setup::{spawn_enemy, spawn_point};

/// Wave bookkeeping for one session.
#[derive(Debug, Clone)]
pub struct WaveDirector {
    /// Next wave to spawn (1-indexed). Exceeds `max_waves` once all have spawned.
    pub wave: u32,
    /// Session wave count, drawn once at session start.
    pub max_waves: u32,
    /// Countdown to the next spawn (seconds). Only runs while the field is clear.
    pub next_wave_in: f64,
    /// Enemies of the current wave not yet removed.
    pub alive_this_wave: i64,
    /// Spawn-count multiplier, grows every wave.
    pub difficulty: f64,
}

/// What the director did this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveOutcome {
    /// Nothing changed state.
    Idle,
    /// A wave spawned. `wave` is the number of the wave that just spawned.
    Spawned { wave: u32, count: usize },
    /// Every wave has been cleared.
    Victory,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self {
            wave: 1,
            max_waves: MAX_WAVES,
            next_wave_in: FIRST_WAVE_DELAY_SECS,
            alive_this_wave: 0,
            difficulty: 1.0,
        }
    }
}

impl WaveDirector {
    /// Fresh director for a new session; draws the session's max-wave count.
    /// An inverted or zero wave range is reordered and floored at one wave.
    pub fn start(config: &SimConfig, rng: &mut ChaCha8Rng) -> Self {
        let lo = config.min_waves.min(config.max_waves).max(1);
        let hi = config.min_waves.max(config.max_waves).max(lo);
        Self {
            max_waves: rng.gen_range(lo..=hi),
            next_wave_in: config.first_wave_delay_secs,
            ..Default::default()
        }
    }

    pub fn phase(&self, live_enemies: usize) -> WavePhase {
        if self.alive_this_wave > 0 || live_enemies > 0 {
            WavePhase::WaveActive
        } else {
            WavePhase::BetweenWaves
        }
    }

    /// Enemy count for the next spawn: floor((6 + 3 * wave) * difficulty).
    pub fn spawn_count(&self) -> usize {
        ((WAVE_BASE_COUNT + WAVE_COUNT_PER_WAVE * self.wave as f64) * self.difficulty).floor()
            as usize
    }

    /// Account for enemies removed from the store.
    pub fn on_enemies_removed(&mut self, count: usize) {
        self.alive_this_wave -= count as i64;
    }

    /// Wave number shown on the HUD, capped at the session maximum.
    pub fn displayed_wave(&self) -> u32 {
        self.wave.min(self.max_waves)
    }

    pub fn waves_remaining(&self) -> u32 {
        self.max_waves - self.displayed_wave()
    }
}

/// Roll thresholds: <= 0.55 Kamikaze, <= 0.83 ZigZag, otherwise Charger.
pub fn kind_for_roll(roll: f64) -> EnemyKind {
    if roll <= SPAWN_ROLL_KAMIKAZE {
        EnemyKind::Kamikaze
    } else if roll <= SPAWN_ROLL_ZIGZAG {
        EnemyKind::ZigZag
    } else {
        EnemyKind::Charger
    }
}

/// Advance the director. The countdown only runs once the store is empty
/// and the alive counter has drained; when it elapses the next wave spawns,
/// or victory is declared if every wave has been used.
pub fn run(
    director: &mut WaveDirector,
    store: &mut EntityStore,
    bounds: &Bounds,
    dt: f64,
    rng: &mut ChaCha8Rng,
    events: &mut EventBuffer,
) -> WaveOutcome {
    if director.phase(store.enemy_count()) == WavePhase::WaveActive {
        return WaveOutcome::Idle;
    }

    director.next_wave_in -= dt;
    if director.next_wave_in > 0.0 {
        return WaveOutcome::Idle;
    }
    if director.wave > director.max_waves {
        return WaveOutcome::Victory;
    }
    spawn_wave(director, store, bounds, rng, events)
}

/// Spawn the next wave around the player and advance the schedule.
pub fn spawn_wave(
    director: &mut WaveDirector,
    store: &mut EntityStore,
    bounds: &Bounds,
    rng: &mut ChaCha8Rng,
    events: &mut EventBuffer,
) -> WaveOutcome {
    let count = director.spawn_count();
    let spawned_wave = director.wave;

    director.alive_this_wave = count as i64;
    director.next_wave_in = rng.gen_range(WAVE_COUNTDOWN_SECS.0..=WAVE_COUNTDOWN_SECS.1);
    director.difficulty += WAVE_DIFFICULTY_STEP;
    director.wave += 1;

    let center = store.player().position;
    for _ in 0..count {
        let kind = kind_for_roll(rng.gen::<f64>());
        let position = spawn_point(rng, center, bounds);
        spawn_enemy(store, rng, kind, position, events);
        debug!(?kind, x = position.x, y = position.y, "enemy spawned");
    }

    info!(
        wave = spawned_wave,
        count,
        difficulty = director.difficulty,
        "wave spawned"
    );
    WaveOutcome::Spawned {
        wave: spawned_wave,
        count,
    }
}

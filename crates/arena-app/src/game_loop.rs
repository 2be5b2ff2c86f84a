//! Game loop thread: runs the simulation engine at the configured tick
//! rate and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Input comes from the autopilot, which
//! reads the previous tick's snapshot.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use arena_core::commands::PlayerCommand;
use arena_core::enums::GamePhase;
use arena_core::state::GameStateSnapshot;
use arena_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::state::{AppState, GameLoopCommand};

/// How the loop measures time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep between ticks and feed measured frame deltas.
    Realtime,
    /// Run as fast as possible with a fixed step of one tick period.
    Fixed,
}

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    pub pacing: Pacing,
    /// Stop after this many loop iterations even if the session is still running.
    pub max_ticks: u64,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            pacing: Pacing::Realtime,
            max_ticks: u64::MAX,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub phase: GamePhase,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub kills: u32,
    pub hp: u32,
    pub wave: u32,
    pub max_waves: u32,
}

impl RunSummary {
    fn from_snapshot(snapshot: &GameStateSnapshot) -> Self {
        Self {
            phase: snapshot.phase,
            ticks: snapshot.time.tick,
            elapsed_secs: snapshot.time.elapsed_secs,
            kills: snapshot.hud.kills,
            hp: snapshot.hud.hp,
            wave: snapshot.hud.wave,
            max_waves: snapshot.hud.max_waves,
        }
    }
}

/// Tick period for a loop rate in Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// `initial_commands` are queued before the thread starts, so the loop sees
/// them on its first tick. Returns the shared state for the host to drive it,
/// and the join handle that yields the run summary once the session ends.
pub fn spawn_game_loop(
    config: SimConfig,
    options: LoopOptions,
    initial_commands: impl IntoIterator<Item = PlayerCommand>,
) -> io::Result<(AppState, JoinHandle<RunSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    for cmd in initial_commands {
        // The receiver is still held here, so the send cannot fail.
        let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(cmd));
    }
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || run_game_loop(config, options, cmd_rx, &shared))?;

    let state = AppState {
        command_tx: Mutex::new(cmd_tx),
        latest_snapshot,
    };
    Ok((state, handle))
}

/// The game loop. Runs until the session ends, a Shutdown command arrives,
/// the channel disconnects, or the tick limit is reached.
pub fn run_game_loop(
    config: SimConfig,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> RunSummary {
    let tick_period = tick_duration(config.tick_rate);
    let fixed_step = tick_period.as_secs_f64();
    let mut engine = SimulationEngine::new(config);
    let mut autopilot = Autopilot::new();
    let mut last = GameStateSnapshot::default();
    let mut last_frame = Instant::now();
    let mut next_tick_time = Instant::now();

    for _ in 0..options.max_ticks {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    if matches!(
                        cmd,
                        PlayerCommand::StartSession | PlayerCommand::ResetSession
                    ) {
                        autopilot.reset();
                    }
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    return RunSummary::from_snapshot(&last);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Sample input from the previous snapshot
        if let Some(cmd) = autopilot.weapon_command(&last) {
            engine.queue_command(cmd);
        }
        let input = autopilot.input(&last);

        // 3. Advance one tick (engine handles pause and dt clamping)
        let dt = match options.pacing {
            Pacing::Realtime => {
                let now = Instant::now();
                let dt = (now - last_frame).as_secs_f64();
                last_frame = now;
                dt
            }
            Pacing::Fixed => fixed_step,
        };
        let snapshot = engine.tick(dt, &input);
        report(&last, &snapshot);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        let finished = snapshot.phase.is_terminal();
        last = snapshot;
        if finished {
            break;
        }

        // 5. Sleep until next tick
        if options.pacing == Pacing::Realtime {
            next_tick_time += tick_period;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_period * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }

    RunSummary::from_snapshot(&last)
}

/// Log HUD transitions between two consecutive snapshots.
fn report(prev: &GameStateSnapshot, snap: &GameStateSnapshot) {
    let hud = &snap.hud;
    if snap.phase != prev.phase {
        info!(?snap.phase, tick = snap.time.tick, "phase changed");
    }
    if hud.wave != prev.hud.wave || hud.enemies_remaining > prev.hud.enemies_remaining {
        info!(
            wave = hud.wave,
            max_waves = hud.max_waves,
            enemies = hud.enemies_remaining,
            "wave underway"
        );
    }
    if hud.hp < prev.hud.hp {
        debug!(hp = hud.hp, "player hit");
    }
    if hud.kills != prev.hud.kills {
        debug!(kills = hud.kills, enemies = hud.enemies_remaining, weapon = %hud.weapon_name, "kill");
    }
    for event in &snap.audio_events {
        debug!(?event, "audio");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::constants::TICK_RATE;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartSession)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartSession);
        let autopilot = Autopilot::new();

        // Run past the first wave so enemies and projectiles exist
        let mut snapshot = GameStateSnapshot::default();
        for _ in 0..90 {
            let input = autopilot.input(&snapshot);
            snapshot = engine.tick(1.0 / 30.0, &input);
        }
        assert!(!snapshot.enemies.is_empty());

        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_fixed_loop_stops_at_tick_limit() {
        let (tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();

        let options = LoopOptions {
            pacing: Pacing::Fixed,
            max_ticks: 120,
        };
        let summary = run_game_loop(SimConfig::default(), options, rx, &latest);

        assert_eq!(summary.phase, GamePhase::Playing);
        assert_eq!(summary.ticks, 120);
        assert!((summary.elapsed_secs - 4.0).abs() < 1e-6);
        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_spawned_loop_starts_on_first_tick() {
        let options = LoopOptions {
            pacing: Pacing::Fixed,
            max_ticks: 5,
        };
        let (state, handle) =
            spawn_game_loop(SimConfig::default(), options, [PlayerCommand::StartSession])
                .unwrap();
        let summary = handle.join().unwrap();

        assert_eq!(summary.phase, GamePhase::Playing);
        assert_eq!(summary.ticks, 5, "every loop iteration should advance the session");
        assert_eq!(state.snapshot().map(|s| s.time.tick), Some(5));
    }

    #[test]
    fn test_shutdown_ends_loop() {
        let (tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let options = LoopOptions {
            pacing: Pacing::Fixed,
            max_ticks: 1_000,
        };
        let summary = run_game_loop(SimConfig::default(), options, rx, &latest);
        assert_eq!(summary.phase, GamePhase::MainMenu);
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_fixed_loop_reaches_terminal_phase() {
        let (tx, rx) = mpsc::channel();
        let latest = Mutex::new(None);
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession))
            .unwrap();

        // Ten simulated minutes is far longer than any session can last.
        let options = LoopOptions {
            pacing: Pacing::Fixed,
            max_ticks: 30 * 600,
        };
        let summary = run_game_loop(SimConfig::default(), options, rx, &latest);
        assert!(summary.phase.is_terminal(), "ended in {:?}", summary.phase);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(tick_duration(TICK_RATE).as_nanos(), expected_nanos as u128);
    }
}

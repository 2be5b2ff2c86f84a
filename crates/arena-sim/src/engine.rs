//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the entity store, processes session commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use arena_core::commands::{InputFrame, PlayerCommand};
use arena_core::components::{Enemy, SpawnOrder};
use arena_core::enums::{EnemyKind, GamePhase};
use arena_core::events::AudioEvent;
use arena_core::state::GameStateSnapshot;
use arena_core::types::SimTime;

use crate::config::SimConfig;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::wave_director::{WaveDirector, WaveOutcome};
use crate::systems::EventBuffer;
use crate::world_setup::{self, Arena};

/// The simulation engine. Owns the entity store and all session state.
pub struct SimulationEngine {
    config: SimConfig,
    store: EntityStore,
    arena: Arena,
    waves: WaveDirector,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: EventBuffer,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. The engine
    /// starts in the main menu; nothing moves until a session is started.
    /// An invalid config is logged and run with its values normalised.
    pub fn new(config: SimConfig) -> Self {
        if let Err(err) = config.validate() {
            warn!(%err, "simulation config out of range");
        }
        let arena = world_setup::build_arena(&config);
        let player = world_setup::new_player(&arena.bounds);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            store: EntityStore::new(player),
            arena,
            waves: WaveDirector::default(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            events: EventBuffer::default(),
            config,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick of `dt` seconds and return the
    /// resulting snapshot. `dt` is clamped to `[0, MAX_DT]`.
    pub fn tick(&mut self, dt: f64, input: &InputFrame) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            let dt = SimTime::clamp_step(dt);
            self.run_systems(dt, input);
            self.time.advance(dt);
        }

        let (audio_events, effect_events) = self.events.take();
        systems::snapshot::build_snapshot(
            &self.store,
            &self.arena,
            &self.waves,
            &self.time,
            self.phase,
            audio_events,
            effect_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Get a read-only reference to the wave director.
    pub fn waves(&self) -> &WaveDirector {
        &self.waves
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Spawn an enemy at a fixed position (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: EnemyKind,
        position: arena_core::types::Position,
    ) -> hecs::Entity {
        world_setup::spawn_enemy(&mut self.store, &mut self.rng, kind, position, &mut self.events)
    }

    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(test)]
    pub fn waves_mut(&mut self) -> &mut WaveDirector {
        &mut self.waves
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::MainMenu || self.phase.is_terminal() {
                    self.begin_session();
                }
            }
            PlayerCommand::ResetSession => {
                self.begin_session();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                    info!(tick = self.time.tick, "paused");
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                    info!(tick = self.time.tick, "resumed");
                }
            }
            PlayerCommand::SelectWeapon { index } => {
                if self.phase != GamePhase::Playing {
                    return;
                }
                let player = self.store.player_mut();
                systems::player::select_weapon(player, index);
                debug!(requested = index, active = player.weapon_index, "weapon selected");
            }
        }
    }

    /// Discard all session state and start playing. The RNG stream carries
    /// over so consecutive sessions differ.
    fn begin_session(&mut self) {
        self.silence_enemies();

        self.arena = world_setup::build_arena(&self.config);
        self.store = EntityStore::new(world_setup::new_player(&self.arena.bounds));
        self.waves = WaveDirector::start(&self.config, &mut self.rng);
        self.time = SimTime::default();
        self.phase = GamePhase::Playing;
        self.events.audio.push(AudioEvent::AmbienceStart);

        info!(max_waves = self.waves.max_waves, "session started");
    }

    /// Stop every running kamikaze scream.
    fn silence_enemies(&mut self) {
        let screaming: Vec<u32> = self
            .store
            .world()
            .query::<(&Enemy, &SpawnOrder)>()
            .iter()
            .filter(|(_, (enemy, _))| enemy.kind == EnemyKind::Kamikaze && !enemy.dead)
            .map(|(_, (_, order))| order.0)
            .collect();
        self.events
            .audio
            .extend(screaming.into_iter().map(|enemy_id| AudioEvent::ScreamStop { enemy_id }));
    }

    /// Enter a terminal phase. Later calls are no-ops.
    fn finish(&mut self, phase: GamePhase) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = phase;
        self.silence_enemies();
        self.events.audio.push(AudioEvent::AmbienceStop);
        info!(
            ?phase,
            tick = self.time.tick,
            kills = self.store.player().kills,
            "session over"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, input: &InputFrame) {
        let bounds = self.arena.bounds;

        // 1. Player intents
        systems::player::run(self.store.player_mut(), input, dt);
        // 2. Weapons (cooldowns, firing)
        systems::weapons::run(&mut self.store, input, dt, &mut self.rng, &mut self.events);
        // 3. Movement integration (player, projectiles)
        systems::movement::run_player(self.store.player_mut(), &bounds, dt);
        systems::movement::run_projectiles(self.store.split_mut().0, &bounds, dt);
        // 4. Enemy AI (steering, enemy movement, contact damage)
        let player_killed =
            systems::enemy_ai::run(&mut self.store, &bounds, dt, &mut self.rng, &mut self.events);
        if player_killed {
            self.finish(GamePhase::Defeated);
        }
        // 5. Combat (projectile hits, removal)
        let outcome = systems::combat::run(&mut self.store, &mut self.events);
        self.waves.on_enemies_removed(outcome.enemies_removed);
        // 6. Wave director
        if self.phase != GamePhase::Playing {
            return;
        }
        let wave = systems::wave_director::run(
            &mut self.waves,
            &mut self.store,
            &bounds,
            dt,
            &mut self.rng,
            &mut self.events,
        );
        if wave == WaveOutcome::Victory {
            self.finish(GamePhase::Victory);
        }
    }
}

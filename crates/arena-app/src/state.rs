//! State shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use arena_core::commands::PlayerCommand;
use arena_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A session command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop.
///
/// The sender is wrapped in a `Mutex` so the handle can be shared across
/// threads (`Sender` is Send but not Sync).
pub struct AppState {
    pub command_tx: Mutex<mpsc::Sender<GameLoopCommand>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl AppState {
    /// Forward a session command. Returns false if the loop has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.send_raw(GameLoopCommand::PlayerCommand(command))
    }

    /// Ask the loop to stop after its current tick.
    pub fn shutdown(&self) -> bool {
        self.send_raw(GameLoopCommand::Shutdown)
    }

    /// Clone of the most recent snapshot, if any tick has run yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    fn send_raw(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(tx) => tx.send(command).is_ok(),
            Err(_) => false,
        }
    }
}

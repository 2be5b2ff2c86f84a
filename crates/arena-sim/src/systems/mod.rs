//! Systems that operate on the entity store each tick.
//!
//! Systems are plain functions over the store and the engine's tick state.
//! They do not own state. Entity state lives in components, session state
//! in the engine.

pub mod combat;
pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod snapshot;
pub mod wave_director;
pub mod weapons;

use arena_core::events::{AudioEvent, EffectEvent};

/// Feedback events accumulated during a tick, drained into the snapshot.
#[derive(Debug, Default)]
pub struct EventBuffer {
    pub audio: Vec<AudioEvent>,
    pub effects: Vec<EffectEvent>,
}

impl EventBuffer {
    /// Move everything out, leaving the buffer empty for the next tick.
    pub fn take(&mut self) -> (Vec<AudioEvent>, Vec<EffectEvent>) {
        (
            std::mem::take(&mut self.audio),
            std::mem::take(&mut self.effects),
        )
    }
}

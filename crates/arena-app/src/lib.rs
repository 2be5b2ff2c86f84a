//! Headless host for the arena simulation.
//!
//! This crate drives the engine on a dedicated thread at a fixed rate,
//! feeds it scripted input, and logs session progress.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use arena_core as core;

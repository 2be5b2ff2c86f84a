//! Simulation engine for the arena shooter.
//!
//! Owns the hecs ECS world, runs systems once per host frame,
//! and produces GameStateSnapshots for the presentation layer.

pub mod config;
pub mod engine;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;

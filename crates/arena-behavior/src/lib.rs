//! Enemy and weapon behaviour for the arena simulation.
//!
//! Implements the per-kind enemy state machines, contact-damage policy,
//! weapon cooldown gating, and pellet geometry. Pure functions over plain
//! data; randomness comes from a caller-supplied `rand::Rng`.

pub mod fsm;
pub mod profiles;
pub mod weapon;

pub use arena_core as core;

#[cfg(test)]
mod tests;

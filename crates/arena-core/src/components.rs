//! ECS components for hecs entities, plus the player singleton.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, Velocity};

/// Circular collision extent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Monotonic insertion stamp. Fixes iteration order for collision sweeps
/// and doubles as the enemy id reported to collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u32);

/// Hostile unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// May dip below zero before death processing.
    pub hp: f64,
    /// Base movement speed (units/s).
    pub speed: f64,
    /// Contact damage value (one-shot for Kamikaze, per-second base otherwise).
    pub contact_damage: f64,
    /// Kill score awarded on death.
    pub score: u32,
    /// Once set, never cleared.
    pub dead: bool,
    /// Cosmetic hit-flash timer (seconds).
    pub hit_flash: f64,
}

/// Per-kind behaviour state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EnemyBehaviorState {
    Kamikaze,
    ZigZag {
        /// Oscillation phase (radians).
        phase: f64,
        /// Lateral amplitude, already scaled.
        amplitude: f64,
    },
    Charger {
        phase: ChargerPhase,
        /// Time left in the current phase (seconds).
        phase_timer: f64,
        /// Charge acceleration scalar in [0, 1].
        accel: f64,
        /// Speed target set on phase entry (units/s).
        target_speed: f64,
    },
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
}

/// Live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f64,
    /// Remaining lifetime (seconds). Expired at <= 0.
    pub lifetime: f64,
    pub owner: ProjectileOwner,
    pub weapon: WeaponKind,
}

/// A weapon instance in the player's loadout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// Seconds until the next shot is allowed. Never negative.
    pub cooldown: f64,
    /// Cosmetic barrel rotation (radians).
    pub barrel_spin: f64,
}

/// The player singleton. Lives outside the hecs world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    /// Hit points in [0, max]. Clamped to 0 on death.
    pub hp: f64,
    pub kills: u32,
    pub alive: bool,
    /// Movement speed (units/s).
    pub speed: f64,
    pub weapon_index: usize,
    pub weapons: Vec<Weapon>,
    /// Latest aim angle (radians).
    pub aim_angle: f64,
    /// Damage overlay timer (seconds).
    pub damage_flash: f64,
}

/// Static axis-aligned obstacle. Decorative: nothing collides with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

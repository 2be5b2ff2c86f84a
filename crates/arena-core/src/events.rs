//! Events emitted by the simulation for audio and visual feedback.
//!
//! The core never synthesizes sound or draws particles; it only names
//! what happened.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Audio cues for the external sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A weapon fired successfully.
    WeaponFired { weapon: WeaponKind },
    /// An enemy died.
    EnemyDied,
    /// The player took damage.
    PlayerDamaged,
    /// Arena ambience loop should start (session start).
    AmbienceStart,
    /// Arena ambience loop should stop (defeat or victory).
    AmbienceStop,
    /// A kamikaze's continuous scream loop starts.
    ScreamStart { enemy_id: u32 },
    /// A kamikaze's scream loop stops.
    ScreamStop { enemy_id: u32 },
}

/// Cosmetic effect triggers for the external particle system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    /// Muzzle flash at the barrel tip.
    MuzzleFlash { position: Position, angle: f64 },
    /// Enemy took a projectile.
    BloodBurst { position: Position },
    /// Kamikaze detonation burst.
    Explosion { position: Position },
    /// Full-screen damage overlay.
    DamageFlash,
}

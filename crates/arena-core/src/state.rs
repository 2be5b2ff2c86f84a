//! Game state snapshot: the complete visible state handed to the
//! presentation collaborator after each tick.

use serde::{Deserialize, Serialize};

use crate::components::Obstacle;
use crate::enums::*;
use crate::events::{AudioEvent, EffectEvent};
use crate::types::{Bounds, Position, SimTime};

/// Complete read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub world: WorldView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub hud: HudView,
    pub audio_events: Vec<AudioEvent>,
    pub effect_events: Vec<EffectEvent>,
}

/// Static arena geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldView {
    pub bounds: Bounds,
    pub obstacles: Vec<Obstacle>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub radius: f64,
    pub alive: bool,
    pub aim_angle: f64,
    pub weapon: WeaponKind,
    /// Cosmetic barrel rotation of the active weapon.
    pub barrel_spin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Position,
    pub radius: f64,
    pub hp: f64,
    /// Hit-flash active (draw highlighted).
    pub hit_flash: bool,
    /// Charger phase, if this is a charger.
    pub charger_phase: Option<ChargerPhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub radius: f64,
}

/// Scalar HUD values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Whole hit points, never negative.
    pub hp: u32,
    pub weapon_name: String,
    pub ammo_text: String,
    pub kills: u32,
    /// Current wave, capped at `max_waves`.
    pub wave: u32,
    pub max_waves: u32,
    pub waves_remaining: u32,
    pub enemies_remaining: u32,
    /// Damage overlay timer (seconds, 0 when inactive).
    pub damage_flash: f64,
}

impl Default for WorldView {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(
                crate::constants::WORLD_WIDTH,
                crate::constants::WORLD_HEIGHT,
            ),
            obstacles: Vec::new(),
        }
    }
}

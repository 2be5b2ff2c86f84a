//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. The set is closed; behaviour is dispatched by match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast runner that detonates on contact.
    Kamikaze,
    /// Melee beast approaching on a sine-weave path.
    ZigZag,
    /// Heavy bruiser cycling walk / charge / cool.
    Charger,
}

/// Player weapon. Index order matches the loadout order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Accurate single-shot pistol.
    #[default]
    Sidearm,
    /// Multi-pellet shotgun.
    Spread,
    /// High-rate minigun.
    Rapid,
}

/// Charger behaviour phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargerPhase {
    #[default]
    Walk,
    Charge,
    Cool,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session started yet.
    #[default]
    MainMenu,
    Playing,
    Paused,
    /// Player died. Terminal until reset.
    Defeated,
    /// All waves cleared. Terminal until reset.
    Victory,
}

/// Wave director state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Countdown running, no enemies required to exist.
    #[default]
    BetweenWaves,
    /// Enemies present or still counted as alive.
    WaveActive,
}

/// Static obstacle tag (geometry only, not collidable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Pillar,
    Wall,
}

impl WeaponKind {
    /// Loadout order.
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Sidearm, WeaponKind::Spread, WeaponKind::Rapid];

    /// Display name for the HUD.
    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Sidearm => "Sidearm",
            WeaponKind::Spread => "Spread",
            WeaponKind::Rapid => "Rapid",
        }
    }
}

impl GamePhase {
    /// Defeated and Victory can only be left through a session reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Defeated | GamePhase::Victory)
    }
}

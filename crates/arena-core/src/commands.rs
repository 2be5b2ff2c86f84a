//! Commands and per-tick input sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Input is sampled once per tick and never queued.

use serde::{Deserialize, Serialize};

/// Discrete session-level actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a session from the menu or a terminal screen.
    StartSession,
    /// Discard everything and start over, whatever the current phase.
    ResetSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Switch the active weapon. Out-of-range indices select weapon 0.
    SelectWeapon { index: usize },
}

/// Input intents for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Movement direction. Normalized by the simulation; zero means stand still.
    pub move_x: f64,
    pub move_y: f64,
    /// Aim angle in radians (0 = +x).
    pub aim_angle: f64,
    /// Fire button held.
    pub fire: bool,
}

impl InputFrame {
    /// Input with no movement and no fire.
    pub fn idle(aim_angle: f64) -> Self {
        Self {
            aim_angle,
            ..Default::default()
        }
    }
}

//! Scripted input source for headless runs.
//!
//! Reads the previous snapshot and produces the next tick's input: aim at
//! the nearest enemy, fire while anything is alive, circle-strafe around
//! it, and back off when it gets close.

use arena_core::commands::{InputFrame, PlayerCommand};
use arena_core::enums::WeaponKind;
use arena_core::state::{EnemyView, GameStateSnapshot};

/// Below this range the autopilot backs away instead of strafing.
const RETREAT_RANGE: f64 = 160.0;
/// Crowd size that makes the spread weapon worth it.
const CROWD_SIZE: usize = 6;

#[derive(Debug, Default)]
pub struct Autopilot {
    current: WeaponKind,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next tick given the last snapshot.
    pub fn input(&self, snapshot: &GameStateSnapshot) -> InputFrame {
        let player = &snapshot.player;
        let Some(target) = nearest(snapshot) else {
            return InputFrame::idle(player.aim_angle);
        };

        let to_target = (
            target.position.x - player.position.x,
            target.position.y - player.position.y,
        );
        let aim_angle = to_target.1.atan2(to_target.0);
        let range = player.position.range_to(&target.position);

        // Strafe clockwise; add a retreat component when crowded.
        let (mut move_x, mut move_y) = (-to_target.1, to_target.0);
        if range < RETREAT_RANGE {
            move_x -= to_target.0 * 2.0;
            move_y -= to_target.1 * 2.0;
        }

        InputFrame {
            move_x,
            move_y,
            aim_angle,
            fire: true,
        }
    }

    /// Weapon switch to issue before the next tick, if any.
    pub fn weapon_command(&mut self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        let wanted = match snapshot.enemies.len() {
            0 => return None,
            n if n >= CROWD_SIZE => WeaponKind::Spread,
            _ => WeaponKind::Rapid,
        };
        if wanted == self.current {
            return None;
        }
        self.current = wanted;
        let index = WeaponKind::ALL.iter().position(|&k| k == wanted)?;
        Some(PlayerCommand::SelectWeapon { index })
    }

    /// Forget the weapon choice after a session reset.
    pub fn reset(&mut self) {
        self.current = WeaponKind::default();
    }
}

fn nearest(snapshot: &GameStateSnapshot) -> Option<&EnemyView> {
    let origin = snapshot.player.position;
    snapshot.enemies.iter().min_by(|a, b| {
        origin
            .distance_sq(&a.position)
            .total_cmp(&origin.distance_sq(&b.position))
    })
}

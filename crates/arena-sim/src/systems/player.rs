//! Player input handling and damage response.

use glam::DVec2;

use arena_core::commands::InputFrame;
use arena_core::components::{PlayerState, Weapon};
use arena_core::constants::DAMAGE_FLASH_SECS;
use arena_core::events::{AudioEvent, EffectEvent};
use arena_core::types::unit_or_zero;

use super::EventBuffer;

/// Apply this tick's input intents: aim, and velocity from the normalized
/// movement direction (zero when there is no input). Also decays the damage
/// overlay.
pub fn run(player: &mut PlayerState, input: &InputFrame, dt: f64) {
    player.aim_angle = input.aim_angle;
    let direction = unit_or_zero(DVec2::new(input.move_x, input.move_y));
    player.velocity = (direction * player.speed).into();
    player.damage_flash = (player.damage_flash - dt).max(0.0);
}

/// Switch the active weapon. Indices outside the loadout fall back to 0.
pub fn select_weapon(player: &mut PlayerState, index: usize) {
    player.weapon_index = if index < player.weapons.len() { index } else { 0 };
}

/// The currently active weapon.
pub fn active_weapon(player: &PlayerState) -> Option<&Weapon> {
    player
        .weapons
        .get(player.weapon_index)
        .or_else(|| player.weapons.first())
}

/// Apply damage to the player. No-op once dead. Returns true when this
/// call killed the player.
pub fn take_damage(player: &mut PlayerState, amount: f64, events: &mut EventBuffer) -> bool {
    if !player.alive {
        return false;
    }
    player.hp -= amount;
    player.damage_flash = DAMAGE_FLASH_SECS;
    events.audio.push(AudioEvent::PlayerDamaged);
    events.effects.push(EffectEvent::DamageFlash);

    if player.hp <= 0.0 {
        player.hp = 0.0;
        player.alive = false;
        return true;
    }
    false
}

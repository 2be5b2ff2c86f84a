//! Weapon system: cooldowns and firing.

use rand_chacha::ChaCha8Rng;

use arena_behavior::profiles::weapon_profile;
use arena_behavior::weapon;
use arena_core::commands::InputFrame;
use arena_core::events::{AudioEvent, EffectEvent};

use super::EventBuffer;
use crate::store::EntityStore;
use crate::world_setup::spawn_projectile;

/// Tick every weapon's cooldown, then honour a fire request on the active
/// weapon if its cooldown has elapsed. Returns the number of projectiles
/// created.
pub fn run(
    store: &mut EntityStore,
    input: &InputFrame,
    dt: f64,
    rng: &mut ChaCha8Rng,
    events: &mut EventBuffer,
) -> usize {
    let player = store.player_mut();
    let active = player.weapon_index;
    for (index, w) in player.weapons.iter_mut().enumerate() {
        weapon::tick(w, dt, input.fire && index == active);
    }

    if !input.fire || !player.alive {
        return 0;
    }
    let origin = player.position;
    let aim = player.aim_angle;
    let Some(active_weapon) = player.weapons.get_mut(active) else {
        return 0;
    };
    if !weapon::try_trigger(active_weapon) {
        return 0;
    }
    let kind = active_weapon.kind;

    let pellets = weapon::pellets(kind, origin, aim, rng);
    for pellet in &pellets {
        spawn_projectile(store, kind, pellet);
    }

    events.audio.push(AudioEvent::WeaponFired { weapon: kind });
    events.effects.push(EffectEvent::MuzzleFlash {
        position: origin.offset(aim, weapon_profile(kind).muzzle_offset),
        angle: aim,
    });
    pellets.len()
}

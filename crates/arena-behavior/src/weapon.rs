//! Weapon cooldown gate and projectile spawn geometry.

use rand::Rng;

use arena_core::components::Weapon;
use arena_core::constants::RAPID_SPIN_RATE;
use arena_core::enums::WeaponKind;
use arena_core::types::{Position, Velocity};

use crate::profiles::weapon_profile;

/// One projectile a successful shot should create.
#[derive(Debug, Clone, Copy)]
pub struct PelletSpawn {
    pub position: Position,
    pub velocity: Velocity,
    /// Travel direction (radians).
    pub angle: f64,
    pub damage: f64,
}

/// A fresh weapon with no cooldown pending.
pub fn new_weapon(kind: WeaponKind) -> Weapon {
    Weapon {
        kind,
        cooldown: 0.0,
        barrel_spin: 0.0,
    }
}

/// Count the cooldown down by `dt`, floored at 0.
/// The rapid weapon's barrel also spins while the trigger is held.
pub fn tick(weapon: &mut Weapon, dt: f64, trigger_held: bool) {
    weapon.cooldown = (weapon.cooldown - dt).max(0.0);
    if weapon.kind == WeaponKind::Rapid && trigger_held {
        weapon.barrel_spin = (weapon.barrel_spin + dt * RAPID_SPIN_RATE) % std::f64::consts::TAU;
    }
}

/// Cooldown gate. Returns true and re-arms the cooldown only when it has
/// fully elapsed; otherwise the request is ignored.
pub fn try_trigger(weapon: &mut Weapon) -> bool {
    if weapon.cooldown > 0.0 {
        return false;
    }
    weapon.cooldown = 1.0 / weapon_profile(weapon.kind).fire_rate;
    true
}

/// Projectiles for one shot fired from `origin` toward `aim_angle`.
/// Each pellet gets an independent jitter in `[-spread, spread]`.
pub fn pellets<R: Rng + ?Sized>(
    kind: WeaponKind,
    origin: Position,
    aim_angle: f64,
    rng: &mut R,
) -> Vec<PelletSpawn> {
    let profile = weapon_profile(kind);
    (0..profile.pellets)
        .map(|_| {
            let angle = aim_angle + rng.gen_range(-profile.spread..=profile.spread);
            PelletSpawn {
                position: origin.offset(angle, profile.muzzle_offset),
                velocity: Velocity::from_angle(angle, profile.projectile_speed),
                angle,
                damage: profile.damage,
            }
        })
        .collect()
}

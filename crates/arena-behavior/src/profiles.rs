//! Kind-specific stat profiles.
//!
//! Consolidates per-kind parameters for enemies and weapons.

use arena_core::enums::{EnemyKind, WeaponKind};

/// Spawn-time stats for an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    pub hp: f64,
    pub radius: f64,
    /// Base (walk) speed in units/s.
    pub speed: f64,
    pub contact_damage: f64,
    pub score: u32,
}

/// Firing characteristics for a weapon kind.
#[derive(Debug, Clone, Copy)]
pub struct WeaponProfile {
    /// Shots per second.
    pub fire_rate: f64,
    /// Damage per projectile.
    pub damage: f64,
    /// Half-width of the uniform angular jitter (radians).
    pub spread: f64,
    /// Projectiles per shot.
    pub pellets: u32,
    /// Projectile speed (units/s).
    pub projectile_speed: f64,
    /// Distance from the player centre at which projectiles appear.
    pub muzzle_offset: f64,
}

/// Get the stat profile for an enemy kind.
pub fn enemy_profile(kind: EnemyKind) -> EnemyProfile {
    use arena_core::constants::*;

    match kind {
        EnemyKind::Kamikaze => EnemyProfile {
            hp: KAMIKAZE_HP,
            radius: KAMIKAZE_RADIUS,
            speed: KAMIKAZE_SPEED,
            contact_damage: KAMIKAZE_DAMAGE,
            score: KAMIKAZE_SCORE,
        },
        EnemyKind::ZigZag => EnemyProfile {
            hp: ZIGZAG_HP,
            radius: ZIGZAG_RADIUS,
            speed: ZIGZAG_SPEED,
            contact_damage: ZIGZAG_DAMAGE,
            score: ZIGZAG_SCORE,
        },
        EnemyKind::Charger => EnemyProfile {
            hp: CHARGER_HP,
            radius: CHARGER_RADIUS,
            speed: CHARGER_WALK_SPEED,
            contact_damage: CHARGER_DAMAGE,
            score: CHARGER_SCORE,
        },
    }
}

/// Get the firing profile for a weapon kind.
pub fn weapon_profile(kind: WeaponKind) -> WeaponProfile {
    match kind {
        WeaponKind::Sidearm => WeaponProfile {
            fire_rate: 2.2,
            damage: 14.0,
            spread: 0.03,
            pellets: 1,
            projectile_speed: 700.0,
            muzzle_offset: 22.0,
        },
        WeaponKind::Spread => WeaponProfile {
            fire_rate: 1.1,
            damage: 9.0,
            spread: 0.35,
            pellets: 8,
            projectile_speed: 620.0,
            muzzle_offset: 22.0,
        },
        WeaponKind::Rapid => WeaponProfile {
            fire_rate: 14.0,
            damage: 4.0,
            spread: 0.06,
            pellets: 1,
            projectile_speed: 900.0,
            muzzle_offset: 24.0,
        },
    }
}

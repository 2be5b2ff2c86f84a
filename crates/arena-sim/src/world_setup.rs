//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the arena, the player, and enemy/projectile entities with
//! appropriate component bundles.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_behavior::fsm::initial_state;
use arena_behavior::profiles::enemy_profile;
use arena_behavior::weapon::{new_weapon, PelletSpawn};
use arena_core::components::*;
use arena_core::constants::*;
use arena_core::enums::*;
use arena_core::events::AudioEvent;
use arena_core::types::{Bounds, Position, Velocity};

use crate::config::SimConfig;
use crate::store::EntityStore;
use crate::systems::EventBuffer;

/// Static arena geometry.
#[derive(Debug, Clone)]
pub struct Arena {
    pub bounds: Bounds,
    pub obstacles: Vec<Obstacle>,
}

/// Build the arena: bounds from config and the fixed obstacle layout.
pub fn build_arena(config: &SimConfig) -> Arena {
    let pillars = PILLARS.iter().map(|r| (ObstacleKind::Pillar, r));
    let walls = WALLS.iter().map(|r| (ObstacleKind::Wall, r));
    let obstacles = pillars
        .chain(walls)
        .map(|(kind, &(x, y, w, h))| Obstacle { kind, x, y, w, h })
        .collect();

    Arena {
        bounds: Bounds::new(config.world_width, config.world_height),
        obstacles,
    }
}

/// Fresh player at the arena centre with the full weapon loadout.
pub fn new_player(bounds: &Bounds) -> PlayerState {
    PlayerState {
        position: bounds.center(),
        velocity: Velocity::default(),
        radius: PLAYER_RADIUS,
        hp: PLAYER_MAX_HP,
        kills: 0,
        alive: true,
        speed: PLAYER_SPEED,
        weapon_index: 0,
        weapons: WeaponKind::ALL.iter().map(|&kind| new_weapon(kind)).collect(),
        aim_angle: 0.0,
        damage_flash: 0.0,
    }
}

/// Spawn a single enemy of `kind` at `position`.
/// Kamikazes start their scream loop on spawn.
pub fn spawn_enemy(
    store: &mut EntityStore,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    position: Position,
    events: &mut EventBuffer,
) -> Entity {
    let profile = enemy_profile(kind);
    let enemy = Enemy {
        kind,
        hp: profile.hp,
        speed: profile.speed,
        contact_damage: profile.contact_damage,
        score: profile.score,
        dead: false,
        hit_flash: 0.0,
    };
    let behavior = initial_state(kind, rng);
    let (entity, order) = store.insert_enemy(enemy, behavior, position, profile.radius);

    if kind == EnemyKind::Kamikaze {
        events.audio.push(AudioEvent::ScreamStart { enemy_id: order.0 });
    }
    entity
}

/// Spawn a player projectile from a pellet description.
pub fn spawn_projectile(store: &mut EntityStore, weapon: WeaponKind, pellet: &PelletSpawn) -> Entity {
    store.insert_projectile(
        Projectile {
            damage: pellet.damage,
            lifetime: PROJECTILE_LIFETIME,
            owner: ProjectileOwner::Player,
            weapon,
        },
        pellet.position,
        pellet.velocity,
        PROJECTILE_RADIUS,
    )
}

/// Random spawn point around `center`: uniform angle, radial distance in
/// the spawn band, clamped inside the world with the spawn margin.
pub fn spawn_point(rng: &mut ChaCha8Rng, center: Position, bounds: &Bounds) -> Position {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let distance: f64 = rng.gen_range(SPAWN_DISTANCE.0..=SPAWN_DISTANCE.1);
    bounds.clamp_inset(center.offset(angle, distance), SPAWN_EDGE_MARGIN)
}

//! Snapshot system: reads the entity store and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use arena_core::components::*;
use arena_core::constants::AMMO_TEXT;
use arena_core::enums::*;
use arena_core::events::{AudioEvent, EffectEvent};
use arena_core::state::*;
use arena_core::types::{Position, SimTime};

use super::player::active_weapon;
use super::wave_director::WaveDirector;
use crate::store::EntityStore;
use crate::world_setup::Arena;

/// Build a complete GameStateSnapshot from the current store state.
pub fn build_snapshot(
    store: &EntityStore,
    arena: &Arena,
    waves: &WaveDirector,
    time: &SimTime,
    phase: GamePhase,
    audio_events: Vec<AudioEvent>,
    effect_events: Vec<EffectEvent>,
) -> GameStateSnapshot {
    let enemies = build_enemies(store.world());

    GameStateSnapshot {
        time: *time,
        phase,
        world: WorldView {
            bounds: arena.bounds,
            obstacles: arena.obstacles.clone(),
        },
        player: build_player(store.player()),
        hud: build_hud(store.player(), waves, enemies.len()),
        enemies,
        projectiles: build_projectiles(store.world()),
        audio_events,
        effect_events,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    let weapon = active_weapon(player);
    PlayerView {
        position: player.position,
        radius: player.radius,
        alive: player.alive,
        aim_angle: player.aim_angle,
        weapon: weapon.map(|w| w.kind).unwrap_or_default(),
        barrel_spin: weapon.map(|w| w.barrel_spin).unwrap_or(0.0),
    }
}

/// Live enemies, ordered by spawn id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EnemyBehaviorState, &Position, &Collider, &SpawnOrder)>()
        .iter()
        .filter(|(_, (enemy, ..))| !enemy.dead)
        .map(|(_, (enemy, behavior, pos, collider, order))| EnemyView {
            id: order.0,
            kind: enemy.kind,
            position: *pos,
            radius: collider.radius,
            hp: enemy.hp,
            hit_flash: enemy.hit_flash > 0.0,
            charger_phase: match behavior {
                EnemyBehaviorState::Charger { phase, .. } => Some(*phase),
                _ => None,
            },
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Collider)>()
        .iter()
        .filter(|(_, (projectile, ..))| projectile.lifetime > 0.0)
        .map(|(_, (_, pos, collider))| ProjectileView {
            position: *pos,
            radius: collider.radius,
        })
        .collect()
}

fn build_hud(player: &PlayerState, waves: &WaveDirector, enemies_remaining: usize) -> HudView {
    let weapon_name = active_weapon(player)
        .map(|w| w.kind)
        .unwrap_or_default()
        .name()
        .to_string();

    HudView {
        hp: player.hp.max(0.0).floor() as u32,
        weapon_name,
        ammo_text: AMMO_TEXT.to_string(),
        kills: player.kills,
        wave: waves.displayed_wave(),
        max_waves: waves.max_waves,
        waves_remaining: waves.waves_remaining(),
        enemies_remaining: enemies_remaining as u32,
        damage_flash: player.damage_flash,
    }
}

//! Combat resolution: projectile hits, enemy death, and cleanup.

use hecs::{Entity, World};

use arena_core::components::*;
use arena_core::constants::HIT_FLASH_SECS;
use arena_core::enums::EnemyKind;
use arena_core::events::{AudioEvent, EffectEvent};
use arena_core::types::{circles_overlap, Position};

use super::EventBuffer;
use crate::store::EntityStore;

/// What a combat pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatOutcome {
    pub hits: usize,
    pub enemies_removed: usize,
    pub projectiles_removed: usize,
}

/// Mark an enemy dead and award its score. Idempotent: an enemy that is
/// already dead produces no score and no events. Returns true on the
/// transition.
pub fn kill_enemy(
    enemy: &mut Enemy,
    id: SpawnOrder,
    position: Position,
    player: &mut PlayerState,
    events: &mut EventBuffer,
) -> bool {
    if enemy.dead {
        return false;
    }
    enemy.dead = true;
    player.kills += enemy.score;
    events.audio.push(AudioEvent::EnemyDied);

    if enemy.kind == EnemyKind::Kamikaze {
        events.effects.push(EffectEvent::Explosion { position });
        events.audio.push(AudioEvent::ScreamStop { enemy_id: id.0 });
    }
    true
}

/// Apply projectile damage to an enemy, killing it at 0 hp.
pub fn damage_enemy(
    enemy: &mut Enemy,
    id: SpawnOrder,
    position: Position,
    amount: f64,
    player: &mut PlayerState,
    events: &mut EventBuffer,
) {
    enemy.hp -= amount;
    enemy.hit_flash = HIT_FLASH_SECS;
    events.effects.push(EffectEvent::BloodBurst { position });
    if enemy.hp <= 0.0 {
        kill_enemy(enemy, id, position, player, events);
    }
}

/// Run the combat pass: each live projectile hits at most the first live
/// enemy (insertion order) it overlaps; then dead enemies and expired
/// projectiles are removed.
pub fn run(store: &mut EntityStore, events: &mut EventBuffer) -> CombatOutcome {
    let targets = collect_targets(store);
    let mut hits = 0;

    {
        let (world, player) = store.split_mut();
        for (_entity, (projectile, pos, collider)) in
            world.query::<(&mut Projectile, &Position, &Collider)>().iter()
        {
            if projectile.lifetime <= 0.0 {
                continue;
            }
            for target in &targets {
                if !circles_overlap(pos, collider.radius, &target.position, target.radius) {
                    continue;
                }
                let Ok(mut enemy) = world.get::<&mut Enemy>(target.entity) else {
                    continue;
                };
                if enemy.dead {
                    continue;
                }
                projectile.lifetime = 0.0;
                damage_enemy(
                    &mut enemy,
                    target.order,
                    target.position,
                    projectile.damage,
                    player,
                    events,
                );
                hits += 1;
                break;
            }
        }
    }

    CombatOutcome {
        hits,
        enemies_removed: store.remove_dead_enemies(),
        projectiles_removed: store.remove_expired_projectiles(),
    }
}

struct Target {
    entity: Entity,
    order: SpawnOrder,
    position: Position,
    radius: f64,
}

fn collect_targets(store: &EntityStore) -> Vec<Target> {
    let world: &World = store.world();
    store
        .enemies_in_order()
        .into_iter()
        .filter_map(|(entity, order)| {
            let mut query = world
                .query_one::<(&Enemy, &Position, &Collider)>(entity)
                .ok()?;
            let (enemy, position, collider) = query.get()?;
            (!enemy.dead).then(|| Target {
                entity,
                order,
                position: *position,
                radius: collider.radius,
            })
        })
        .collect()
}

//! Enemy AI system. Steers enemies each tick and resolves contact with
//! the player.
//!
//! Calls the behaviour FSM from arena-behavior, integrates the result, then
//! applies the kind's contact-damage policy on overlap.

use rand_chacha::ChaCha8Rng;

use arena_behavior::fsm::{contact_effect, steer, ContactEffect, EnemyContext};
use arena_core::components::*;
use arena_core::types::{circles_overlap, Bounds, Position, Velocity};

use super::combat::kill_enemy;
use super::movement::step_clamped;
use super::player::take_damage;
use super::EventBuffer;
use crate::store::EntityStore;

/// Run the enemy AI for every live enemy. Returns true if contact damage
/// killed the player during this pass.
pub fn run(
    store: &mut EntityStore,
    bounds: &Bounds,
    dt: f64,
    rng: &mut ChaCha8Rng,
    events: &mut EventBuffer,
) -> bool {
    let mut player_killed = false;
    let (world, player) = store.split_mut();

    for (_entity, (enemy, behavior, pos, vel, collider, order)) in world.query_mut::<(
        &mut Enemy,
        &mut EnemyBehaviorState,
        &mut Position,
        &mut Velocity,
        &Collider,
        &SpawnOrder,
    )>() {
        if enemy.dead {
            continue;
        }
        enemy.hit_flash = (enemy.hit_flash - dt).max(0.0);

        let ctx = EnemyContext {
            state: *behavior,
            position: *pos,
            base_speed: enemy.speed,
            player_position: player.position,
            dt,
        };
        let update = steer(&ctx, rng);
        *behavior = update.state;
        *vel = update.velocity;
        step_clamped(pos, vel, collider.radius, bounds, dt);

        if !circles_overlap(pos, collider.radius, &player.position, player.radius) {
            continue;
        }
        match contact_effect(behavior, enemy.contact_damage, dt) {
            ContactEffect::Detonate { damage } => {
                player_killed |= take_damage(player, damage, events);
                kill_enemy(enemy, *order, *pos, player, events);
            }
            ContactEffect::Sustained { damage } => {
                player_killed |= take_damage(player, damage, events);
            }
        }
    }

    player_killed
}

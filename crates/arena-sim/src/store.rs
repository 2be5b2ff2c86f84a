//! Entity store: the hecs world holding enemies and projectiles, plus the
//! player singleton.
//!
//! Only the combat pass removes entities; only the weapon and wave systems
//! insert them.

use hecs::{Entity, World};

use arena_core::components::*;
use arena_core::types::{Position, Velocity};

pub struct EntityStore {
    world: World,
    player: PlayerState,
    next_spawn_order: u32,
    despawn_buffer: Vec<Entity>,
}

impl EntityStore {
    pub fn new(player: PlayerState) -> Self {
        Self {
            world: World::new(),
            player,
            next_spawn_order: 0,
            despawn_buffer: Vec::new(),
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Borrow the world and the player at the same time.
    pub fn split_mut(&mut self) -> (&mut World, &mut PlayerState) {
        (&mut self.world, &mut self.player)
    }

    /// Append an enemy. Returns its handle and insertion stamp.
    pub fn insert_enemy(
        &mut self,
        enemy: Enemy,
        behavior: EnemyBehaviorState,
        position: Position,
        radius: f64,
    ) -> (Entity, SpawnOrder) {
        let order = SpawnOrder(self.next_spawn_order);
        self.next_spawn_order += 1;
        let entity = self.world.spawn((
            enemy,
            behavior,
            position,
            Velocity::default(),
            Collider { radius },
            order,
        ));
        (entity, order)
    }

    /// Append a projectile.
    pub fn insert_projectile(
        &mut self,
        projectile: Projectile,
        position: Position,
        velocity: Velocity,
        radius: f64,
    ) -> Entity {
        self.world
            .spawn((projectile, position, velocity, Collider { radius }))
    }

    /// Number of enemies in the store, dead or alive.
    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Enemy handles in insertion order.
    pub fn enemies_in_order(&self) -> Vec<(Entity, SpawnOrder)> {
        let mut enemies: Vec<(Entity, SpawnOrder)> = self
            .world
            .query::<(&Enemy, &SpawnOrder)>()
            .iter()
            .map(|(entity, (_enemy, order))| (entity, *order))
            .collect();
        enemies.sort_by_key(|(_, order)| *order);
        enemies
    }

    /// Remove every enemy flagged dead. Returns how many were removed.
    pub fn remove_dead_enemies(&mut self) -> usize {
        self.despawn_buffer.clear();
        for (entity, enemy) in self.world.query_mut::<&Enemy>() {
            if enemy.dead {
                self.despawn_buffer.push(entity);
            }
        }
        self.despawn_collected()
    }

    /// Remove every projectile whose lifetime has run out.
    pub fn remove_expired_projectiles(&mut self) -> usize {
        self.despawn_buffer.clear();
        for (entity, projectile) in self.world.query_mut::<&Projectile>() {
            if projectile.lifetime <= 0.0 {
                self.despawn_buffer.push(entity);
            }
        }
        self.despawn_collected()
    }

    fn despawn_collected(&mut self) -> usize {
        let mut removed = 0;
        for entity in self.despawn_buffer.drain(..) {
            if self.world.despawn(entity).is_ok() {
                removed += 1;
            }
        }
        removed
    }
}

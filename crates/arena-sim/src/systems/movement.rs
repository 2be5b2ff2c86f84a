//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Integration is type-agnostic; callers decide what velocity to feed it.

use hecs::World;

use arena_core::components::{PlayerState, Projectile};
use arena_core::types::{Bounds, Position, Velocity};

/// Advance one body and keep its circle inside the world.
pub fn step_clamped(pos: &mut Position, vel: &Velocity, radius: f64, bounds: &Bounds, dt: f64) {
    pos.integrate(vel, dt);
    *pos = bounds.clamp_inset(*pos, radius);
}

/// Integrate the player and clamp it into the world minus its radius.
pub fn run_player(player: &mut PlayerState, bounds: &Bounds, dt: f64) {
    let velocity = player.velocity;
    step_clamped(&mut player.position, &velocity, player.radius, bounds, dt);
}

/// Integrate projectiles and burn their lifetime. Projectiles leaving the
/// world are expired immediately.
pub fn run_projectiles(world: &mut World, bounds: &Bounds, dt: f64) {
    for (_entity, (pos, vel, projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Projectile)>()
    {
        pos.integrate(vel, dt);
        projectile.lifetime -= dt;
        if !bounds.contains(pos) {
            projectile.lifetime = 0.0;
        }
    }
}

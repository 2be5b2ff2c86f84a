//! Enemy behaviour state machines.
//!
//! Pure functions that advance per-kind behaviour state and compute the
//! velocity an enemy wants this tick, plus the contact-damage policy.
//! No ECS dependency; operates on plain data.

use glam::DVec2;
use rand::Rng;

use arena_core::components::EnemyBehaviorState;
use arena_core::constants::*;
use arena_core::enums::{ChargerPhase, EnemyKind};
use arena_core::types::{Position, Velocity};

/// Input to the behaviour FSM for a single enemy.
pub struct EnemyContext {
    pub state: EnemyBehaviorState,
    pub position: Position,
    /// Base speed from the enemy's profile.
    pub base_speed: f64,
    pub player_position: Position,
    pub dt: f64,
}

/// Output from the behaviour FSM.
pub struct EnemyUpdate {
    pub state: EnemyBehaviorState,
    pub velocity: Velocity,
    pub phase_changed: bool,
}

/// What overlapping the player does this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactEffect {
    /// Apply the damage once, then the enemy dies.
    Detonate { damage: f64 },
    /// Apply the damage for this tick only; overlap next tick applies again.
    Sustained { damage: f64 },
}

/// Fresh behaviour state for a newly spawned enemy.
pub fn initial_state<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> EnemyBehaviorState {
    match kind {
        EnemyKind::Kamikaze => EnemyBehaviorState::Kamikaze,
        EnemyKind::ZigZag => EnemyBehaviorState::ZigZag {
            phase: rng.gen_range(0.0..ZIGZAG_INITIAL_PHASE_MAX),
            amplitude: rng.gen_range(ZIGZAG_AMPLITUDE_MIN..=ZIGZAG_AMPLITUDE_MAX)
                * ZIGZAG_AMPLITUDE_SCALE,
        },
        EnemyKind::Charger => EnemyBehaviorState::Charger {
            phase: ChargerPhase::Walk,
            phase_timer: sample(rng, CHARGER_WALK_SECS),
            accel: 0.0,
            target_speed: CHARGER_WALK_SPEED,
        },
    }
}

/// Kind of enemy a behaviour state belongs to.
pub fn kind_of(state: &EnemyBehaviorState) -> EnemyKind {
    match state {
        EnemyBehaviorState::Kamikaze => EnemyKind::Kamikaze,
        EnemyBehaviorState::ZigZag { .. } => EnemyKind::ZigZag,
        EnemyBehaviorState::Charger { .. } => EnemyKind::Charger,
    }
}

/// Evaluate the FSM for one enemy. Returns the updated state and velocity.
pub fn steer<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyUpdate {
    let toward = ctx.position.direction_to(&ctx.player_position);

    match ctx.state {
        EnemyBehaviorState::Kamikaze => EnemyUpdate {
            state: ctx.state,
            velocity: (toward * ctx.base_speed).into(),
            phase_changed: false,
        },
        EnemyBehaviorState::ZigZag { phase, amplitude } => {
            let phase = phase + ctx.dt * ZIGZAG_PHASE_RATE;
            let weave = phase.sin() * amplitude;
            let velocity = toward * ctx.base_speed + toward.perp() * ctx.base_speed * weave;
            EnemyUpdate {
                state: EnemyBehaviorState::ZigZag { phase, amplitude },
                velocity: velocity.into(),
                phase_changed: false,
            }
        }
        EnemyBehaviorState::Charger {
            phase,
            phase_timer,
            accel,
            target_speed,
        } => steer_charger(ctx, rng, toward, phase, phase_timer, accel, target_speed),
    }
}

fn steer_charger<R: Rng + ?Sized>(
    ctx: &EnemyContext,
    rng: &mut R,
    toward: DVec2,
    mut phase: ChargerPhase,
    mut phase_timer: f64,
    accel: f64,
    mut target_speed: f64,
) -> EnemyUpdate {
    phase_timer -= ctx.dt;
    let phase_changed = phase_timer <= 0.0;
    if phase_changed {
        let (next, duration) = match phase {
            ChargerPhase::Walk => (ChargerPhase::Charge, CHARGER_CHARGE_SECS),
            ChargerPhase::Charge => (ChargerPhase::Cool, CHARGER_COOL_SECS),
            ChargerPhase::Cool => (ChargerPhase::Walk, CHARGER_WALK_SECS),
        };
        phase = next;
        phase_timer = sample(rng, duration);
        target_speed = match phase {
            ChargerPhase::Walk => ctx.base_speed,
            ChargerPhase::Charge => CHARGER_CHARGE_SPEED,
            ChargerPhase::Cool => ctx.base_speed * CHARGER_COOL_FACTOR,
        };
    }

    let accel = if phase == ChargerPhase::Charge {
        (accel + ctx.dt * CHARGER_ACCEL_RAMP).min(1.0)
    } else {
        (accel - ctx.dt * CHARGER_ACCEL_DECAY).max(0.0)
    };
    let speed = target_speed * (CHARGER_SPEED_FLOOR + (1.0 - CHARGER_SPEED_FLOOR) * accel);

    EnemyUpdate {
        state: EnemyBehaviorState::Charger {
            phase,
            phase_timer,
            accel,
            target_speed,
        },
        velocity: (toward * speed).into(),
        phase_changed,
    }
}

/// Contact-damage policy for an enemy overlapping the player this tick.
pub fn contact_effect(state: &EnemyBehaviorState, contact_damage: f64, dt: f64) -> ContactEffect {
    match state {
        EnemyBehaviorState::Kamikaze => ContactEffect::Detonate {
            damage: contact_damage,
        },
        EnemyBehaviorState::ZigZag { .. } => ContactEffect::Sustained {
            damage: contact_damage * dt * ZIGZAG_CONTACT_RATE,
        },
        EnemyBehaviorState::Charger { phase, .. } => {
            let rate = if *phase == ChargerPhase::Charge {
                CHARGER_CONTACT_RATE_CHARGING
            } else {
                CHARGER_CONTACT_RATE
            };
            ContactEffect::Sustained {
                damage: contact_damage * dt * rate,
            }
        }
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    rng.gen_range(lo..=hi)
}

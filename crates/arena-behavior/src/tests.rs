#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use arena_core::components::EnemyBehaviorState;
    use arena_core::constants::*;
    use arena_core::enums::{ChargerPhase, EnemyKind, WeaponKind};
    use arena_core::types::Position;

    use crate::fsm::{contact_effect, initial_state, kind_of, steer, ContactEffect, EnemyContext};
    use crate::profiles::{enemy_profile, weapon_profile};
    use crate::weapon::{new_weapon, pellets, tick, try_trigger};

    const DT: f64 = 1.0 / 30.0;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn make_context(state: EnemyBehaviorState, base_speed: f64) -> EnemyContext {
        // Enemy 300 units left of the player on the x-axis.
        EnemyContext {
            state,
            position: Position::new(100.0, 500.0),
            base_speed,
            player_position: Position::new(400.0, 500.0),
            dt: DT,
        }
    }

    // ---- Enemy behaviour ----

    #[test]
    fn test_kamikaze_homes_at_full_speed() {
        let ctx = make_context(EnemyBehaviorState::Kamikaze, KAMIKAZE_SPEED);
        let update = steer(&ctx, &mut rng());
        assert!((update.velocity.x - KAMIKAZE_SPEED).abs() < 1e-9);
        assert!(update.velocity.y.abs() < 1e-9);
        assert!(!update.phase_changed);
    }

    #[test]
    fn test_enemy_on_top_of_player_has_zero_velocity() {
        let mut ctx = make_context(EnemyBehaviorState::Kamikaze, KAMIKAZE_SPEED);
        ctx.position = ctx.player_position;
        let update = steer(&ctx, &mut rng());
        assert_eq!(update.velocity.x, 0.0);
        assert_eq!(update.velocity.y, 0.0);
    }

    #[test]
    fn test_zigzag_phase_advances_and_weaves() {
        let state = EnemyBehaviorState::ZigZag {
            phase: 0.0,
            amplitude: 1.0 * ZIGZAG_AMPLITUDE_SCALE,
        };
        let ctx = make_context(state, ZIGZAG_SPEED);
        let update = steer(&ctx, &mut rng());

        let EnemyBehaviorState::ZigZag { phase, amplitude } = update.state else {
            panic!("ZigZag must stay ZigZag");
        };
        assert!((phase - DT * ZIGZAG_PHASE_RATE).abs() < 1e-12);
        assert_eq!(amplitude, ZIGZAG_AMPLITUDE_SCALE);

        // Forward component is the base speed; lateral is speed * sin(phase) * amp.
        assert!((update.velocity.x - ZIGZAG_SPEED).abs() < 1e-9);
        let expected_lateral = ZIGZAG_SPEED * phase.sin() * amplitude;
        assert!((update.velocity.y - expected_lateral).abs() < 1e-9);
        assert!(update.velocity.y > 0.0);
    }

    #[test]
    fn test_zigzag_initial_amplitude_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let EnemyBehaviorState::ZigZag { phase, amplitude } =
                initial_state(EnemyKind::ZigZag, &mut rng)
            else {
                panic!("expected ZigZag state");
            };
            assert!((0.0..ZIGZAG_INITIAL_PHASE_MAX).contains(&phase));
            let lo = ZIGZAG_AMPLITUDE_MIN * ZIGZAG_AMPLITUDE_SCALE;
            let hi = ZIGZAG_AMPLITUDE_MAX * ZIGZAG_AMPLITUDE_SCALE;
            assert!(amplitude >= lo && amplitude <= hi, "amplitude {amplitude}");
        }
    }

    #[test]
    fn test_charger_cycles_walk_charge_cool_walk() {
        let mut rng = rng();
        let mut state = initial_state(EnemyKind::Charger, &mut rng);
        let mut seen = vec![ChargerPhase::Walk];

        for _ in 0..600 {
            let ctx = make_context(state, CHARGER_WALK_SPEED);
            let update = steer(&ctx, &mut rng);
            state = update.state;
            if update.phase_changed {
                let EnemyBehaviorState::Charger { phase, .. } = state else {
                    panic!("Charger must stay Charger");
                };
                seen.push(phase);
            }
        }

        assert!(seen.len() >= 5, "expected several transitions, got {seen:?}");
        let cycle = [ChargerPhase::Walk, ChargerPhase::Charge, ChargerPhase::Cool];
        for (i, phase) in seen.iter().enumerate() {
            assert_eq!(*phase, cycle[i % 3], "out of order at {i}: {seen:?}");
        }
    }

    #[test]
    fn test_charger_phase_durations_in_range() {
        let mut rng = rng();
        let mut state = initial_state(EnemyKind::Charger, &mut rng);
        if let EnemyBehaviorState::Charger { phase_timer, .. } = state {
            assert!((CHARGER_WALK_SECS.0..=CHARGER_WALK_SECS.1).contains(&phase_timer));
        }

        for _ in 0..900 {
            let update = steer(&make_context(state, CHARGER_WALK_SPEED), &mut rng);
            state = update.state;
            if !update.phase_changed {
                continue;
            }
            let EnemyBehaviorState::Charger {
                phase,
                phase_timer,
                target_speed,
                ..
            } = state
            else {
                panic!("Charger must stay Charger");
            };
            let (range, speed) = match phase {
                ChargerPhase::Walk => (CHARGER_WALK_SECS, CHARGER_WALK_SPEED),
                ChargerPhase::Charge => (CHARGER_CHARGE_SECS, CHARGER_CHARGE_SPEED),
                ChargerPhase::Cool => (CHARGER_COOL_SECS, CHARGER_WALK_SPEED * CHARGER_COOL_FACTOR),
            };
            assert!(phase_timer >= range.0 && phase_timer <= range.1);
            assert!((target_speed - speed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_charger_accel_ramps_during_charge_and_decays_after() {
        let charging = EnemyBehaviorState::Charger {
            phase: ChargerPhase::Charge,
            phase_timer: 10.0,
            accel: 0.0,
            target_speed: CHARGER_CHARGE_SPEED,
        };
        let update = steer(&make_context(charging, CHARGER_WALK_SPEED), &mut rng());
        let EnemyBehaviorState::Charger { accel, .. } = update.state else {
            panic!();
        };
        assert!((accel - DT * CHARGER_ACCEL_RAMP).abs() < 1e-12);
        let expected_speed = CHARGER_CHARGE_SPEED * (0.4 + 0.6 * accel);
        assert!((update.velocity.speed() - expected_speed).abs() < 1e-9);

        let walking = EnemyBehaviorState::Charger {
            phase: ChargerPhase::Walk,
            phase_timer: 10.0,
            accel: 0.01,
            target_speed: CHARGER_WALK_SPEED,
        };
        let update = steer(&make_context(walking, CHARGER_WALK_SPEED), &mut rng());
        let EnemyBehaviorState::Charger { accel, .. } = update.state else {
            panic!();
        };
        assert_eq!(accel, 0.0, "accel floors at 0");
        assert!((update.velocity.speed() - CHARGER_WALK_SPEED * 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_contact_policies() {
        assert_eq!(
            contact_effect(&EnemyBehaviorState::Kamikaze, KAMIKAZE_DAMAGE, DT),
            ContactEffect::Detonate {
                damage: KAMIKAZE_DAMAGE
            }
        );

        let zig = EnemyBehaviorState::ZigZag {
            phase: 0.0,
            amplitude: 1.0,
        };
        let ContactEffect::Sustained { damage } = contact_effect(&zig, ZIGZAG_DAMAGE, DT) else {
            panic!("zigzag damage is sustained");
        };
        assert!((damage - ZIGZAG_DAMAGE * DT * 6.0).abs() < 1e-12);

        let mut charger = EnemyBehaviorState::Charger {
            phase: ChargerPhase::Charge,
            phase_timer: 1.0,
            accel: 1.0,
            target_speed: CHARGER_CHARGE_SPEED,
        };
        let ContactEffect::Sustained { damage } = contact_effect(&charger, CHARGER_DAMAGE, DT) else {
            panic!();
        };
        assert!((damage - CHARGER_DAMAGE * DT * 9.0).abs() < 1e-12);

        if let EnemyBehaviorState::Charger { phase, .. } = &mut charger {
            *phase = ChargerPhase::Cool;
        }
        let ContactEffect::Sustained { damage } = contact_effect(&charger, CHARGER_DAMAGE, DT) else {
            panic!();
        };
        assert!((damage - CHARGER_DAMAGE * DT * 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_kind_of_matches_initial_state() {
        let mut rng = rng();
        for kind in [EnemyKind::Kamikaze, EnemyKind::ZigZag, EnemyKind::Charger] {
            assert_eq!(kind_of(&initial_state(kind, &mut rng)), kind);
        }
        assert_eq!(enemy_profile(EnemyKind::Charger).score, 4);
    }

    // ---- Weapons ----

    #[test]
    fn test_sidearm_cooldown_gate() {
        let mut weapon = new_weapon(WeaponKind::Sidearm);
        assert!(try_trigger(&mut weapon));
        assert!((weapon.cooldown - 1.0 / 2.2).abs() < 1e-12);

        // 13 ticks at 1/30 s = 0.433 s < 0.4545 s: still gated.
        for _ in 0..13 {
            tick(&mut weapon, DT, true);
            assert!(!try_trigger(&mut weapon));
        }
        tick(&mut weapon, DT, true);
        assert_eq!(weapon.cooldown, 0.0);
        assert!(try_trigger(&mut weapon));
        assert!(!try_trigger(&mut weapon), "only one shot per elapsed interval");
    }

    #[test]
    fn test_cooldown_never_negative() {
        let mut weapon = new_weapon(WeaponKind::Rapid);
        tick(&mut weapon, 5.0, false);
        assert_eq!(weapon.cooldown, 0.0);
    }

    #[test]
    fn test_spread_fires_eight_pellets_within_cone() {
        let aim = 1.0;
        let shots = pellets(WeaponKind::Spread, Position::new(500.0, 500.0), aim, &mut rng());
        assert_eq!(shots.len(), 8);
        for shot in &shots {
            assert!((shot.angle - aim).abs() <= 0.35 + 1e-12);
            assert!((shot.velocity.speed() - 620.0).abs() < 1e-9);
            assert!((shot.velocity.heading() - shot.angle).abs() < 1e-9);
            assert_eq!(shot.damage, 9.0);
            let muzzle = Position::new(500.0, 500.0).range_to(&shot.position);
            assert!((muzzle - 22.0).abs() < 1e-9);
        }
        // Independent jitter per pellet.
        assert!(shots.windows(2).any(|w| w[0].angle != w[1].angle));
    }

    #[test]
    fn test_single_shot_weapons_fire_one_projectile() {
        for kind in [WeaponKind::Sidearm, WeaponKind::Rapid] {
            let shots = pellets(kind, Position::new(0.0, 0.0), 0.0, &mut rng());
            assert_eq!(shots.len(), 1);
            let profile = weapon_profile(kind);
            assert!(shots[0].angle.abs() <= profile.spread);
            assert!((shots[0].velocity.speed() - profile.projectile_speed).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rapid_barrel_spins_only_while_held() {
        let mut weapon = new_weapon(WeaponKind::Rapid);
        tick(&mut weapon, 0.02, false);
        assert_eq!(weapon.barrel_spin, 0.0);
        tick(&mut weapon, 0.02, true);
        assert!((weapon.barrel_spin - 0.5).abs() < 1e-12);

        let mut sidearm = new_weapon(WeaponKind::Sidearm);
        tick(&mut sidearm, 0.02, true);
        assert_eq!(sidearm.barrel_spin, 0.0);
    }
}

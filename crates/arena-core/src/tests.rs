#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    #[test]
    fn test_zero_vector_normalizes_without_nan() {
        let v = unit_or_zero(DVec2::ZERO);
        assert!(v.x.is_finite() && v.y.is_finite());
        assert_eq!(v, DVec2::ZERO);
        // Deterministic across calls
        assert_eq!(unit_or_zero(DVec2::ZERO), v);
    }

    #[test]
    fn test_nonzero_vector_normalizes_to_unit() {
        let v = unit_or_zero(DVec2::new(3.0, -4.0));
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.y + 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_same_point_is_zero() {
        let p = Position::new(10.0, 10.0);
        assert_eq!(p.direction_to(&p), DVec2::ZERO);
    }

    #[test]
    fn test_clamp_step_bounds() {
        assert_eq!(SimTime::clamp_step(0.5), MAX_DT);
        assert_eq!(SimTime::clamp_step(-1.0), 0.0);
        assert_eq!(SimTime::clamp_step(f64::NAN), 0.0);
        assert_eq!(SimTime::clamp_step(f64::INFINITY), 0.0);
        assert_eq!(SimTime::clamp_step(0.01), 0.01);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.25);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_clamp_inset() {
        let b = Bounds::new(100.0, 50.0);
        let p = b.clamp_inset(Position::new(-20.0, 80.0), 10.0);
        assert_eq!(p, Position::new(10.0, 40.0));
        let inside = b.clamp_inset(Position::new(50.0, 25.0), 10.0);
        assert_eq!(inside, Position::new(50.0, 25.0));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let b = Bounds::new(100.0, 100.0);
        assert!(b.contains(&Position::new(0.0, 100.0)));
        assert!(!b.contains(&Position::new(-0.1, 50.0)));
        assert!(!b.contains(&Position::new(50.0, 100.1)));
    }

    #[test]
    fn test_circle_overlap_is_strict() {
        let a = Position::new(0.0, 0.0);
        // Exactly touching does not count as overlap.
        assert!(!circles_overlap(&a, 10.0, &Position::new(20.0, 0.0), 10.0));
        assert!(circles_overlap(&a, 10.0, &Position::new(19.9, 0.0), 10.0));
    }

    #[test]
    fn test_offset_and_from_angle() {
        let p = Position::new(0.0, 0.0).offset(std::f64::consts::FRAC_PI_2, 22.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 22.0).abs() < 1e-9);

        let v = Velocity::from_angle(0.0, 700.0);
        assert!((v.speed() - 700.0).abs() < 1e-9);
        assert!(v.heading().abs() < 1e-12);
    }

    #[test]
    fn test_weapon_names_follow_loadout_order() {
        let names: Vec<_> = WeaponKind::ALL.iter().map(|w| w.name()).collect();
        assert_eq!(names, vec!["Sidearm", "Spread", "Rapid"]);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::Defeated.is_terminal());
        assert!(GamePhase::Victory.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
        assert!(!GamePhase::Paused.is_terminal());
        assert!(!GamePhase::MainMenu.is_terminal());
    }

    #[test]
    fn test_audio_event_is_tagged() {
        let json = serde_json::to_string(&AudioEvent::WeaponFired {
            weapon: WeaponKind::Spread,
        })
        .unwrap();
        assert!(json.contains("\"type\":\"WeaponFired\""), "{json}");
        assert!(json.contains("\"weapon\":\"Spread\""), "{json}");
    }

    #[test]
    fn test_command_deserializes_from_tagged_json() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectWeapon","index":2}"#).unwrap();
        assert!(matches!(cmd, PlayerCommand::SelectWeapon { index: 2 }));
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert_eq!(back.world.bounds.width, WORLD_WIDTH);
    }
}

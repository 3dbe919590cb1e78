use super::*;

const PRESETS: [SpringConfig; 5] = [
    SpringConfig::TILT,
    SpringConfig::SPOTLIGHT,
    SpringConfig::GENTLE,
    SpringConfig::CARD,
    SpringConfig::DRIFT,
];

const DT: f64 = 1.0 / 60.0;

#[test]
fn settles_on_constant_input() {
    for cfg in PRESETS {
        let mut s = Spring::new(cfg, 0.0);
        s.set_target(1.0);
        for _ in 0..600 {
            s.step(DT);
        }
        assert!((s.value() - 1.0).abs() < 1e-3, "{cfg:?}");
        assert!(s.is_settled(), "{cfg:?}");
    }
}

#[test]
fn presets_do_not_overshoot_perceptibly() {
    for cfg in PRESETS {
        assert!(cfg.overshoot() < 0.02, "{cfg:?}");
        let mut s = Spring::new(cfg, 0.0);
        s.set_target(1.0);
        let mut peak = 0.0_f64;
        for _ in 0..600 {
            peak = peak.max(s.step(DT));
        }
        assert!(peak < 1.02, "{cfg:?} peaked at {peak}");
    }
}

#[test]
fn critically_and_over_damped_never_cross_target() {
    for cfg in [SpringConfig::new(100.0, 20.0, 1.0), SpringConfig::GENTLE] {
        assert!(cfg.damping_ratio() >= 1.0 - 1e-9);
        let mut s = Spring::new(cfg, 0.0);
        s.set_target(10.0);
        for _ in 0..600 {
            assert!(s.step(DT) <= 10.0);
        }
    }
}

#[test]
fn step_changes_are_bounded_by_spring_energy() {
    // Damping only removes energy, so |v| <= ω₀·|step| for a spring released from rest.
    for cfg in PRESETS {
        let mut s = Spring::new(cfg, 0.0);
        s.set_target(1.0);
        let max_speed = cfg.natural_frequency();
        let mut prev = s.value();
        for _ in 0..600 {
            let next = s.step(DT);
            assert!(s.velocity().abs() <= max_speed + 1e-9, "{cfg:?}");
            assert!(
                (next - prev).abs() <= max_speed * DT + cfg.rest_delta,
                "{cfg:?} jumped by {}",
                next - prev
            );
            prev = next;
        }
    }
}

#[test]
fn first_step_after_a_step_input_is_small() {
    let mut s = Spring::new(SpringConfig::TILT, 0.0);
    s.set_target(1.0);
    let first = s.step(DT);
    assert!(first > 0.0);
    assert!(first < 0.03, "moved {first}");
}

#[test]
fn step_size_does_not_change_the_trajectory() {
    let mut coarse = Spring::new(SpringConfig::SPOTLIGHT, 0.0);
    let mut fine = Spring::new(SpringConfig::SPOTLIGHT, 0.0);
    coarse.set_target(5.0);
    fine.set_target(5.0);
    coarse.step(0.1);
    for _ in 0..10 {
        fine.step(0.01);
    }
    assert!((coarse.value() - fine.value()).abs() < 1e-9);
    assert!((coarse.velocity() - fine.velocity()).abs() < 1e-9);
}

#[test]
fn ignores_non_finite_input() {
    let mut s = Spring::new(SpringConfig::CARD, 2.0);
    s.set_target(f64::NAN);
    assert_eq!(s.target(), 2.0);
    assert_eq!(s.step(f64::INFINITY), 2.0);
    assert_eq!(s.step(-1.0), 2.0);
    s.jump(f64::NAN);
    assert_eq!(s.value(), 2.0);
}

#[test]
fn jump_stops_immediately() {
    let mut s = Spring::new(SpringConfig::TILT, 0.0);
    s.set_target(15.0);
    s.step(DT);
    s.jump(0.0);
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.velocity(), 0.0);
    assert!(s.is_settled());
    assert_eq!(s.step(DT), 0.0);
}

#[test]
fn filters_are_independent() {
    let mut a = Spring::new(SpringConfig::TILT, 0.0);
    let b = Spring::new(SpringConfig::TILT, 0.0);
    a.set_target(1.0);
    a.step(DT);
    assert!(a.value() > 0.0);
    assert_eq!(b.value(), 0.0);
}

#[test]
fn validate_rejects_nonsense() {
    assert!(SpringConfig::new(0.0, 10.0, 1.0).validate().is_err());
    assert!(SpringConfig::new(100.0, -1.0, 1.0).validate().is_err());
    assert!(SpringConfig::new(100.0, 10.0, 0.0).validate().is_err());
    for cfg in PRESETS {
        assert!(cfg.validate().is_ok());
    }
}

#[test]
fn json_defaults_mass_and_rest_thresholds() {
    let cfg: SpringConfig = serde_json::from_str(r#"{ "stiffness": 150, "damping": 20 }"#).unwrap();
    assert_eq!(cfg, SpringConfig::SPOTLIGHT);
}

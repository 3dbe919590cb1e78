use super::*;

const ALL: [Ease; 12] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutExpo,
    Ease::FLUID,
    Ease::GLIDE,
    Ease::LUXURY,
    Ease::EASE_OUT,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=200 {
            let v = ease.apply(f64::from(i) / 200.0);
            assert!(v + 1e-9 >= prev, "{ease:?} dipped at step {i}");
            prev = v;
        }
    }
}

#[test]
fn diagonal_bezier_is_linear() {
    let ease = Ease::cubic_bezier(0.25, 0.25, 0.75, 0.75);
    for t in [0.1, 0.33, 0.5, 0.9] {
        assert!((ease.apply(t) - t).abs() < 1e-9);
    }
}

#[test]
fn fluid_is_symmetric_around_midpoint() {
    let a = Ease::FLUID.apply(0.3);
    let b = Ease::FLUID.apply(0.7);
    assert!((a + b - 1.0).abs() < 1e-5);
    assert!((Ease::FLUID.apply(0.5) - 0.5).abs() < 1e-5);
}

#[test]
fn glide_front_loads_progress() {
    assert!(Ease::GLIDE.apply(0.25) > 0.6);
}

#[test]
fn validate_rejects_out_of_range_x() {
    assert!(Ease::cubic_bezier(1.2, 0.0, 0.5, 1.0).validate().is_err());
    assert!(Ease::cubic_bezier(0.2, f64::NAN, 0.5, 1.0).validate().is_err());
    assert!(Ease::FLUID.validate().is_ok());
    assert!(Ease::OutCubic.validate().is_ok());
}

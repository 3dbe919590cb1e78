use super::*;

fn zoom() -> InterpolationTable {
    InterpolationTable::new([(0.0, 1.0), (1.0, 1.4)]).unwrap()
}

#[test]
fn clamps_outside_domain() {
    let t = zoom();
    assert_eq!(t.map(-0.3), 1.0);
    assert_eq!(t.map(1.7), 1.4);
    assert_eq!(t.map(f64::NEG_INFINITY), 1.0);
    assert_eq!(t.map(f64::INFINITY), 1.4);
    assert_eq!(t.map(f64::NAN), 1.0);
}

#[test]
fn interpolates_inside_domain() {
    let t = zoom();
    assert_eq!(t.map(0.0), 1.0);
    assert!((t.map(0.5) - 1.2).abs() < 1e-12);
    assert_eq!(t.map(1.0), 1.4);
}

#[test]
fn multi_segment_tables_pick_the_right_segment() {
    let fade = InterpolationTable::new([(0.0, 1.0), (0.6, 0.0), (1.0, 0.0)]).unwrap();
    assert!((fade.map(0.3) - 0.5).abs() < 1e-12);
    assert_eq!(fade.map(0.8), 0.0);
}

#[test]
fn reversed_outputs_are_allowed() {
    let tilt = InterpolationTable::linear([-0.5, 0.5], [15.0, -15.0]).unwrap();
    assert_eq!(tilt.map(-0.5), 15.0);
    assert_eq!(tilt.map(0.0), 0.0);
    assert_eq!(tilt.map(0.5), -15.0);
}

#[test]
fn duplicate_inputs_make_a_step() {
    let step = InterpolationTable::new([(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)]).unwrap();
    assert_eq!(step.map(0.49), 0.0);
    assert_eq!(step.map(0.5), 1.0);
}

#[test]
fn single_stop_is_constant() {
    let c = InterpolationTable::new([(0.3, 7.0)]).unwrap();
    assert_eq!(c.map(-1.0), 7.0);
    assert_eq!(c.map(0.3), 7.0);
    assert_eq!(c.map(9.0), 7.0);
    assert_eq!(c.domain(), (0.3, 0.3));
}

#[test]
fn independent_tables_share_one_progress() {
    let opacity = InterpolationTable::linear([0.0, 0.6], [1.0, 0.0]).unwrap();
    let offset = InterpolationTable::linear([0.0, 1.0], [0.0, 20.0]).unwrap();
    let p = 0.3;
    assert!((opacity.map(p) - 0.5).abs() < 1e-12);
    assert!((offset.map(p) - 6.0).abs() < 1e-12);
    // Evaluation order does not matter.
    assert!((opacity.map(p) - 0.5).abs() < 1e-12);
}

#[test]
fn rejects_invalid_tables() {
    assert!(InterpolationTable::new(Vec::<(f64, f64)>::new()).is_err());
    assert!(InterpolationTable::new([(1.0, 0.0), (0.0, 1.0)]).is_err());
    assert!(InterpolationTable::new([(0.0, f64::NAN)]).is_err());
}

#[test]
fn json_form_is_pairs_and_validated() {
    let t: InterpolationTable = serde_json::from_str("[[0, 1], [1, 1.4]]").unwrap();
    assert_eq!(t, zoom());
    assert_eq!(serde_json::to_string(&t).unwrap(), "[[0.0,1.0],[1.0,1.4]]");
    assert!(serde_json::from_str::<InterpolationTable>("[[1, 0], [0, 1]]").is_err());
}

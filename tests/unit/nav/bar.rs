use super::*;
use crate::foundation::core::{Point, Rect, Viewport};

fn run(bar: &mut NavBar, secs: f64) {
    let frames = (secs * 60.0).ceil() as usize;
    for _ in 0..frames {
        bar.step(1.0 / 60.0);
    }
}

#[test]
fn starts_visible_at_rest() {
    let bar = NavBar::new(NavConfig::default());
    let snap = bar.snapshot();
    assert_eq!(snap.visibility, NavVisibility::Visible);
    assert_eq!(
        (snap.y_percent, snap.opacity, snap.scale),
        (0.0, 1.0, 1.0)
    );
    assert!(snap.channels.is_empty(), "tilt waits for the bar's box");
}

#[test]
fn hide_and_show_tween_variants() {
    let mut bar = NavBar::new(NavConfig::default());
    bar.on_scroll(400.0);
    assert_eq!(bar.visibility(), NavVisibility::Hidden);

    bar.step(0.1);
    let mid = bar.snapshot();
    assert!(mid.y_percent < 0.0 && mid.y_percent > -150.0);
    assert!(mid.opacity < 1.0 && mid.opacity > 0.0);

    run(&mut bar, 0.6);
    let hidden = bar.snapshot();
    assert_eq!(
        (hidden.y_percent, hidden.opacity, hidden.scale),
        (-150.0, 0.0, 0.95)
    );

    bar.on_scroll(350.0);
    assert_eq!(bar.visibility(), NavVisibility::Visible);
    run(&mut bar, 1.0);
    let shown = bar.snapshot();
    assert_eq!((shown.y_percent, shown.opacity, shown.scale), (0.0, 1.0, 1.0));
}

#[test]
fn interrupted_hide_reverses_smoothly() {
    let mut bar = NavBar::new(NavConfig::default());
    bar.on_scroll(400.0);
    bar.step(0.05);
    let before = bar.snapshot().y_percent;
    bar.on_scroll(390.0);
    assert_eq!(bar.snapshot().y_percent, before, "retarget starts from current value");
}

#[test]
fn menu_pins_bar_visible() {
    let mut bar = NavBar::new(NavConfig::default());
    bar.on_scroll(400.0);
    bar.set_menu_open(true);
    assert_eq!(bar.visibility(), NavVisibility::Visible);
    bar.on_scroll(800.0);
    assert_eq!(bar.visibility(), NavVisibility::Visible);
    assert!(bar.snapshot().menu_open);
}

#[test]
fn tilt_follows_pointer_and_snaps_on_leave() {
    let mut bar = NavBar::new(NavConfig::default());
    let section = bar.section_mut();
    section.on_resize(Viewport {
        width: 1280.0,
        height: 800.0,
    });
    section.on_layout(0.0, 0.0, Some(Rect::new(440.0, 32.0, 840.0, 96.0)));
    // Top right corner of the island.
    section.on_pointer_move(Point::new(840.0, 32.0));
    run(&mut bar, 3.0);

    let channels = bar.snapshot().channels;
    assert_eq!(channels["rotate_x"], 15.0);
    assert_eq!(channels["rotate_y"], 15.0);

    bar.section_mut().on_pointer_leave();
    let channels = bar.snapshot().channels;
    assert_eq!(channels["rotate_x"], 0.0);
    assert_eq!(channels["rotate_y"], 0.0);
}

#[test]
fn config_parses_partial_json() {
    let cfg: NavConfig = serde_json::from_str(r#"{"hide_threshold": 80}"#).unwrap();
    assert_eq!(cfg.hide_threshold, 80.0);
    assert_eq!(cfg.show, NavConfig::default().show);
    assert_eq!(cfg.section.name, "nav");
    assert!(cfg.validate().is_ok());

    let bad = NavConfig {
        hide_threshold: f64::INFINITY,
        ..NavConfig::default()
    };
    assert!(bad.validate().is_err());
}

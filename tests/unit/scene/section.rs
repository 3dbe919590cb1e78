use super::*;
use crate::{
    animation::{interp::InterpolationTable, spring::SpringConfig},
    input::scroll::ScrollOffsets,
};

const DESKTOP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

fn identity() -> InterpolationTable {
    InterpolationTable::linear([0.0, 1.0], [0.0, 1.0]).unwrap()
}

fn tilt_table() -> InterpolationTable {
    InterpolationTable::linear([-0.5, 0.5], [-10.0, 10.0]).unwrap()
}

fn scroll_section(offsets: Option<ScrollOffsets>) -> Section {
    Section::new(SectionConfig {
        name: "s".to_owned(),
        offsets,
        pointer: None,
        channels: vec![ChannelConfig::new("p", Source::ScrollProgress, identity())],
    })
}

fn pointer_section(spring: Option<SpringConfig>, pointer: PointerConfig) -> Section {
    let mut ch = ChannelConfig::new("tilt", Source::PointerX, tilt_table());
    ch.spring = spring;
    let mut s = Section::new(SectionConfig {
        name: "card".to_owned(),
        offsets: None,
        pointer: Some(pointer),
        channels: vec![ch],
    });
    s.on_resize(DESKTOP);
    s.on_layout(0.0, 0.0, Some(Rect::new(100.0, 100.0, 300.0, 300.0)));
    s
}

fn settle(s: &mut Section) {
    for _ in 0..600 {
        s.step(1.0 / 60.0);
    }
}

#[test]
fn scroll_channel_waits_for_geometry() {
    let mut s = scroll_section(Some(ScrollOffsets::CONTAINED));
    s.on_scroll(1500.0);
    assert!(s.values().is_empty());

    s.on_layout(1000.0, 1800.0, None);
    assert!(s.value("p").is_none(), "no viewport yet");

    s.on_resize(DESKTOP);
    let region = s.region().unwrap();
    assert_eq!((region.start(), region.end()), (1000.0, 2000.0));
    assert_eq!(s.value("p"), Some(0.5));

    for (y, expected) in [(1000.0, 0.0), (2000.0, 1.0), (2500.0, 1.0), (200.0, 0.0)] {
        s.on_scroll(y);
        assert_eq!(s.value("p"), Some(expected));
    }
}

#[test]
fn zero_viewport_suppresses_values() {
    let mut s = scroll_section(Some(ScrollOffsets::CONTAINED));
    s.on_layout(1000.0, 1800.0, None);
    s.on_resize(DESKTOP);
    assert!(s.progress().is_some());
    s.on_resize(Viewport {
        width: 0.0,
        height: 0.0,
    });
    assert!(s.progress().is_none());
    assert!(s.values().is_empty());
}

#[test]
fn page_section_tracks_document() {
    let mut s = scroll_section(None);
    s.on_resize(DESKTOP);
    s.on_document_height(3000.0);
    s.on_scroll(1100.0);
    assert_eq!(s.value("p"), Some(0.5));
}

#[test]
fn pointer_channel_maps_and_resets() {
    let mut s = Section::new(SectionConfig {
        name: "card".to_owned(),
        offsets: None,
        pointer: Some(PointerConfig::default()),
        channels: vec![ChannelConfig::new("tilt", Source::PointerX, tilt_table())],
    });
    s.on_pointer_move(Point::new(200.0, 200.0));
    assert!(s.value("tilt").is_none(), "no box yet");

    s.on_resize(DESKTOP);
    s.on_layout(0.0, 0.0, Some(Rect::new(100.0, 100.0, 300.0, 300.0)));
    s.on_pointer_move(Point::new(250.0, 200.0));
    assert_eq!(s.value("tilt"), Some(5.0));
    s.on_pointer_move(Point::new(900.0, 200.0));
    assert_eq!(s.value("tilt"), Some(10.0));
    s.on_pointer_leave();
    assert_eq!(s.value("tilt"), Some(0.0));
}

#[test]
fn spring_follows_then_springs_back() {
    let mut s = pointer_section(Some(SpringConfig::CARD), PointerConfig::default());
    assert_eq!(s.value("tilt"), Some(0.0));

    s.on_pointer_move(Point::new(300.0, 200.0));
    assert_eq!(s.value("tilt"), Some(0.0), "springs move only on frames");
    s.step(1.0 / 60.0);
    let first = s.value("tilt").unwrap();
    assert!(first > 0.0 && first < 10.0);
    settle(&mut s);
    assert_eq!(s.value("tilt"), Some(10.0));

    s.on_pointer_leave();
    assert_eq!(s.value("tilt"), Some(10.0));
    settle(&mut s);
    assert_eq!(s.value("tilt"), Some(0.0));
}

#[test]
fn snap_on_leave_removes_residual_tilt() {
    let mut s = pointer_section(
        Some(SpringConfig::TILT),
        PointerConfig {
            min_viewport_width: 0.0,
            snap_on_leave: true,
        },
    );
    s.on_pointer_move(Point::new(300.0, 200.0));
    for _ in 0..5 {
        s.step(1.0 / 60.0);
    }
    assert!(s.value("tilt").unwrap() > 0.0);
    s.on_pointer_leave();
    assert_eq!(s.value("tilt"), Some(0.0));
    s.step(1.0 / 60.0);
    assert_eq!(s.value("tilt"), Some(0.0));
}

#[test]
fn narrow_viewport_disables_pointer() {
    let mut s = pointer_section(
        None,
        PointerConfig {
            min_viewport_width: 768.0,
            snap_on_leave: false,
        },
    );
    s.on_pointer_move(Point::new(300.0, 200.0));
    assert_eq!(s.value("tilt"), Some(10.0));

    s.on_resize(Viewport {
        width: 500.0,
        height: 800.0,
    });
    assert_eq!(s.value("tilt"), Some(0.0));
    s.on_pointer_move(Point::new(300.0, 200.0));
    assert_eq!(s.value("tilt"), Some(0.0));

    s.on_resize(DESKTOP);
    s.on_pointer_move(Point::new(100.0, 200.0));
    assert_eq!(s.value("tilt"), Some(-10.0));
}

#[test]
fn velocity_is_smoothed_before_mapping() {
    let skew = ChannelConfig::new(
        "skew",
        Source::ScrollVelocity,
        InterpolationTable::linear([-1.0, 1.0], [30.0, -30.0]).unwrap(),
    )
    .with_spring(SpringConfig::CARD)
    .smoothed_before_map();
    let mut s = Section::new(SectionConfig {
        name: "gallery".to_owned(),
        offsets: Some(ScrollOffsets::CONTAINED),
        pointer: None,
        channels: vec![skew],
    });
    s.on_resize(DESKTOP);
    s.on_layout(0.0, 4000.0, None);
    s.step(0.1);
    assert_eq!(s.value("skew"), Some(0.0));

    // 320 px over a 3200 px region in 0.1 s: progress speed 1 per second.
    s.on_scroll(320.0);
    s.step(0.1);
    let skew = s.value("skew").unwrap();
    assert!(skew < 0.0 && skew > -30.0, "{skew}");

    // Scrolling stops; the skew relaxes back to zero.
    settle(&mut s);
    assert_eq!(s.value("skew"), Some(0.0));
}

#[test]
fn local_tilt_rests_at_box_center_after_leave() {
    let hero = crate::scene::presets::photographer_page()
        .sections
        .into_iter()
        .find(|s| s.name == "hero")
        .unwrap();
    let mut s = Section::new(hero);
    s.on_resize(DESKTOP);
    s.on_layout(0.0, 800.0, Some(Rect::new(0.0, 0.0, 1280.0, 800.0)));

    // Box center: 400/1000 of the way from 5 to -5, 640/1500 of the way from -5 to 5.
    let rest_x = 5.0 - 10.0 * 400.0 / 1000.0;
    let rest_y = -5.0 + 10.0 * 640.0 / 1500.0;
    assert!((s.value("rotate_x").unwrap() - rest_x).abs() < 1e-9);
    assert!((s.value("rotate_y").unwrap() - rest_y).abs() < 1e-9);

    s.on_pointer_move(Point::new(1200.0, 50.0));
    settle(&mut s);
    assert!(s.value("rotate_x").unwrap() > 4.0);

    s.on_pointer_leave();
    assert!((s.value("spotlight_x").unwrap() - 640.0).abs() < 1e-9);
    assert!((s.value("spotlight_y").unwrap() - 400.0).abs() < 1e-9);
    for _ in 0..600 {
        s.step(1.0 / 60.0);
        assert!(s.value("rotate_x").unwrap() < 4.9);
        assert!(s.value("rotate_y").unwrap() < 4.9);
    }
    assert!((s.value("rotate_x").unwrap() - rest_x).abs() < 1e-9);
    assert!((s.value("rotate_y").unwrap() - rest_y).abs() < 1e-9);
}

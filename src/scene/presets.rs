//! Built-in scene: the photographer portfolio page.

use crate::{
    animation::{interp::InterpolationTable, spring::SpringConfig},
    input::{scroll::ScrollOffsets, smooth_scroll::SmoothScrollConfig},
    nav::bar::NavConfig,
    preloader::view::PreloaderConfig,
    scene::config::{ChannelConfig, PointerConfig, SceneConfig, SectionConfig, Source},
};

// Wide enough to pass pixel coordinates through unchanged.
const PIXEL_SPAN: f64 = 10_000.0;

// Narrower screens skip the tilt effects.
const DESKTOP_MIN_WIDTH: f64 = 768.0;

fn table(stops: &[(f64, f64)]) -> InterpolationTable {
    InterpolationTable::from_literal(stops)
}

fn ramp(input: (f64, f64), output: (f64, f64)) -> InterpolationTable {
    table(&[(input.0, output.0), (input.1, output.1)])
}

fn pixels() -> InterpolationTable {
    ramp((-PIXEL_SPAN, PIXEL_SPAN), (-PIXEL_SPAN, PIXEL_SPAN))
}

fn progress(name: &str, input: (f64, f64), output: (f64, f64)) -> ChannelConfig {
    ChannelConfig::new(name, Source::ScrollProgress, ramp(input, output))
}

fn pointer(name: &str, source: Source, output: (f64, f64), spring: SpringConfig) -> ChannelConfig {
    ChannelConfig::new(name, source, ramp((-0.5, 0.5), output)).with_spring(spring)
}

fn section(
    name: &str,
    offsets: Option<ScrollOffsets>,
    pointer: Option<PointerConfig>,
    channels: Vec<ChannelConfig>,
) -> SectionConfig {
    SectionConfig {
        name: name.to_owned(),
        offsets,
        pointer,
        channels,
    }
}

fn hero() -> SectionConfig {
    section(
        "hero",
        Some(ScrollOffsets::LEAVE),
        Some(PointerConfig::default()),
        vec![
            progress("image_scale", (0.0, 1.0), (1.0, 1.4)),
            progress("image_y_percent", (0.0, 1.0), (0.0, 20.0)),
            progress("opacity", (0.0, 0.6), (1.0, 0.0)),
            progress("title_top_y_percent", (0.0, 1.0), (0.0, -100.0)),
            progress("title_bottom_y_percent", (0.0, 1.0), (0.0, 100.0)),
            ChannelConfig::new("rotate_x", Source::PointerLocalY, ramp((0.0, 1000.0), (5.0, -5.0)))
                .with_spring(SpringConfig::GENTLE)
                .smoothed_before_map(),
            ChannelConfig::new("rotate_y", Source::PointerLocalX, ramp((0.0, 1500.0), (-5.0, 5.0)))
                .with_spring(SpringConfig::GENTLE)
                .smoothed_before_map(),
            ChannelConfig::new("spotlight_x", Source::PointerLocalX, pixels()),
            ChannelConfig::new("spotlight_y", Source::PointerLocalY, pixels()),
        ],
    )
}

fn gallery() -> SectionConfig {
    section(
        "gallery",
        Some(ScrollOffsets::CONTAINED),
        None,
        vec![
            progress("x_percent", (0.0, 1.0), (0.0, -90.0)),
            ChannelConfig::new("skew_x", Source::ScrollVelocity, ramp((-1.0, 1.0), (30.0, -30.0)))
                .with_spring(SpringConfig::CARD)
                .smoothed_before_map(),
            progress("backdrop_a_x_percent", (0.0, 1.0), (0.0, -30.0)),
            progress("backdrop_b_x_percent", (0.0, 1.0), (-30.0, 0.0)),
        ],
    )
}

fn philosophy() -> SectionConfig {
    section(
        "philosophy",
        Some(ScrollOffsets::ENTER_EXIT),
        Some(PointerConfig {
            min_viewport_width: DESKTOP_MIN_WIDTH,
            snap_on_leave: false,
        }),
        vec![
            progress("image_y", (0.0, 1.0), (0.0, -50.0)),
            progress("text_y", (0.0, 1.0), (50.0, -50.0)),
            pointer("rotate_x", Source::PointerY, (7.0, -7.0), SpringConfig::GENTLE),
            pointer("rotate_y", Source::PointerX, (-7.0, 7.0), SpringConfig::GENTLE),
            pointer("brightness", Source::PointerY, (1.0, 1.2), SpringConfig::GENTLE),
        ],
    )
}

fn stories() -> SectionConfig {
    section(
        "stories",
        Some(ScrollOffsets::ENTER_EXIT),
        None,
        vec![progress("line_height_percent", (0.0, 0.8), (0.0, 100.0))],
    )
}

fn story_card() -> SectionConfig {
    section(
        "story_card",
        None,
        Some(PointerConfig {
            min_viewport_width: DESKTOP_MIN_WIDTH,
            snap_on_leave: false,
        }),
        vec![
            pointer("rotate_x", Source::PointerY, (7.0, -7.0), SpringConfig::CARD),
            pointer("rotate_y", Source::PointerX, (-7.0, 7.0), SpringConfig::CARD),
            pointer("text_x", Source::PointerX, (-20.0, 20.0), SpringConfig::CARD),
            pointer("text_y", Source::PointerY, (-20.0, 20.0), SpringConfig::CARD),
        ],
    )
}

fn footer() -> SectionConfig {
    section(
        "footer",
        Some(ScrollOffsets::ARRIVE),
        None,
        vec![
            progress("content_y", (0.0, 1.0), (-50.0, 0.0))
                .with_spring(SpringConfig::DRIFT)
                .smoothed_before_map(),
        ],
    )
}

fn nav_links() -> SectionConfig {
    section(
        "nav_links",
        None,
        Some(PointerConfig::default()),
        vec![
            ChannelConfig::new("magnet_x", Source::PointerCenterX, pixels())
                .with_spring(SpringConfig::TILT),
            ChannelConfig::new("magnet_y", Source::PointerCenterY, pixels())
                .with_spring(SpringConfig::TILT),
        ],
    )
}

fn nav() -> NavConfig {
    let mut nav = NavConfig::default();
    nav.section.channels.extend([
        ChannelConfig::new("spotlight_x", Source::PointerLocalX, pixels())
            .with_spring(SpringConfig::SPOTLIGHT),
        ChannelConfig::new("spotlight_y", Source::PointerLocalY, pixels())
            .with_spring(SpringConfig::SPOTLIGHT),
    ]);
    nav
}

/// The portfolio page: hero, horizontal gallery, philosophy, love stories and footer, with the
/// floating navigation island on top.
pub fn photographer_page() -> SceneConfig {
    SceneConfig {
        sections: vec![
            hero(),
            gallery(),
            philosophy(),
            stories(),
            story_card(),
            footer(),
            nav_links(),
        ],
        nav: nav(),
        preloader: PreloaderConfig::default(),
        smooth_scroll: SmoothScrollConfig::default(),
    }
}

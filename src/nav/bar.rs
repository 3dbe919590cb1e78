use std::collections::BTreeMap;

use crate::{
    animation::{
        ease::Ease,
        interp::InterpolationTable,
        spring::SpringConfig,
        tween::{Transition, Tween},
    },
    foundation::error::{ApertureError, ApertureResult},
    nav::visibility::{NavVisibility, NavVisibilityController},
    scene::config::{ChannelConfig, PointerConfig, SectionConfig, Source},
    scene::section::Section,
};

/// Target values of one navigation bar variant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavVariant {
    /// Vertical translation as a percentage of the bar's own height.
    pub y_percent: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl NavVariant {
    pub const VISIBLE: Self = Self {
        y_percent: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };
    pub const HIDDEN: Self = Self {
        y_percent: -150.0,
        opacity: 0.0,
        scale: 0.95,
    };
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll offset past which downward scrolling hides the bar.
    pub hide_threshold: f64,
    pub show: Transition,
    pub hide: Transition,
    /// Pointer section of the bar itself (island tilt).
    pub section: SectionConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        let tilt = |name: &str, source, out: (f64, f64)| {
            ChannelConfig::new(
                name,
                source,
                InterpolationTable::from_literal(&[(-0.5, out.0), (0.5, out.1)]),
            )
            .with_spring(SpringConfig::TILT)
        };
        Self {
            hide_threshold: 150.0,
            show: Transition::new(0.8, Ease::GLIDE),
            hide: Transition::new(0.6, Ease::GLIDE),
            section: SectionConfig {
                name: "nav".to_owned(),
                offsets: None,
                pointer: Some(PointerConfig {
                    min_viewport_width: 0.0,
                    snap_on_leave: true,
                }),
                channels: vec![
                    tilt("rotate_x", Source::PointerY, (15.0, -15.0)),
                    tilt("rotate_y", Source::PointerX, (-15.0, 15.0)),
                ],
            },
        }
    }
}

impl NavConfig {
    pub fn validate(&self) -> ApertureResult<()> {
        if !self.hide_threshold.is_finite() {
            return Err(ApertureError::validation(
                "nav.hide_threshold must be finite",
            ));
        }
        self.show.validate()?;
        self.hide.validate()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavSnapshot {
    pub visibility: NavVisibility,
    pub menu_open: bool,
    pub y_percent: f64,
    pub opacity: f64,
    pub scale: f64,
    pub channels: BTreeMap<String, f64>,
}

/// The floating navigation bar: visibility, variant tweens and its own pointer section.
#[derive(Clone, Debug)]
pub struct NavBar {
    config: NavConfig,
    visibility: NavVisibilityController,
    y_percent: Tween,
    opacity: Tween,
    scale: Tween,
    section: Section,
}

impl NavBar {
    pub fn new(config: NavConfig) -> Self {
        let v = NavVariant::VISIBLE;
        Self {
            visibility: NavVisibilityController::new(config.hide_threshold),
            y_percent: Tween::at_rest(v.y_percent),
            opacity: Tween::at_rest(v.opacity),
            scale: Tween::at_rest(v.scale),
            section: Section::new(config.section.clone()),
            config,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility.visibility()
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn section_mut(&mut self) -> &mut Section {
        &mut self.section
    }

    pub fn on_scroll(&mut self, y: f64) {
        let before = self.visibility.visibility();
        let after = self.visibility.on_scroll(y);
        self.section.on_scroll(y);
        if after != before {
            self.animate_to(after);
        }
    }

    pub fn set_menu_open(&mut self, open: bool) {
        let before = self.visibility.visibility();
        let after = self.visibility.set_menu_open(open);
        if after != before {
            self.animate_to(after);
        }
    }

    pub fn step(&mut self, dt: f64) {
        self.y_percent.advance(dt);
        self.opacity.advance(dt);
        self.scale.advance(dt);
        self.section.step(dt);
    }

    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            visibility: self.visibility.visibility(),
            menu_open: self.visibility.is_menu_open(),
            y_percent: self.y_percent.value(),
            opacity: self.opacity.value(),
            scale: self.scale.value(),
            channels: self.section.values(),
        }
    }

    fn animate_to(&mut self, visibility: NavVisibility) {
        tracing::debug!(?visibility, "nav visibility changed");
        let (variant, transition) = match visibility {
            NavVisibility::Visible => (NavVariant::VISIBLE, self.config.show),
            NavVisibility::Hidden => (NavVariant::HIDDEN, self.config.hide),
        };
        self.y_percent.retarget(variant.y_percent, transition);
        self.opacity.retarget(variant.opacity, transition);
        self.scale.retarget(variant.scale, transition);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/bar.rs"]
mod tests;

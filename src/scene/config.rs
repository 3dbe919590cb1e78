use std::collections::BTreeSet;

use crate::{
    animation::{interp::InterpolationTable, spring::SpringConfig},
    foundation::error::{ApertureError, ApertureResult},
    input::{scroll::ScrollOffsets, smooth_scroll::SmoothScrollConfig},
    nav::bar::NavConfig,
    preloader::view::PreloaderConfig,
};

/// Normalized signal a channel reads from its section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Scroll progress through the section's region, `[0, 1]`.
    ScrollProgress,
    /// Rate of change of the scroll progress, per second.
    ScrollVelocity,
    /// Pointer offset from the box center, `[-0.5, 0.5]`.
    PointerX,
    PointerY,
    /// Pointer position inside the box, in pixels.
    PointerLocalX,
    PointerLocalY,
    /// Pointer distance from the box center, in pixels.
    PointerCenterX,
    PointerCenterY,
}

impl Source {
    pub fn is_pointer(self) -> bool {
        !matches!(self, Self::ScrollProgress | Self::ScrollVelocity)
    }
}

/// Where the spring sits relative to the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothStage {
    /// Smooth the mapped output.
    #[default]
    AfterMap,
    /// Smooth the raw source, then map.
    BeforeMap,
}

/// One animated value: `table(source)`, optionally spring-smoothed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelConfig {
    pub name: String,
    pub source: Source,
    pub table: InterpolationTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spring: Option<SpringConfig>,
    #[serde(default)]
    pub smooth_stage: SmoothStage,
}

impl ChannelConfig {
    pub fn new(name: impl Into<String>, source: Source, table: InterpolationTable) -> Self {
        Self {
            name: name.into(),
            source,
            table,
            spring: None,
            smooth_stage: SmoothStage::AfterMap,
        }
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = Some(spring);
        self
    }

    pub fn smoothed_before_map(mut self) -> Self {
        self.smooth_stage = SmoothStage::BeforeMap;
        self
    }
}

/// Pointer tracking for a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Below this viewport width the pointer source is disabled and rests at zero.
    pub min_viewport_width: f64,
    /// Leaving the box snaps pointer channels to rest instead of springing back.
    pub snap_on_leave: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionConfig {
    pub name: String,
    /// Scroll range tracked for this section. `None` tracks the whole page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsets: Option<ScrollOffsets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<PointerConfig>,
    #[serde(default)]
    pub channels: Vec<ChannelConfig>,
}

impl SectionConfig {
    pub fn validate(&self) -> ApertureResult<()> {
        if self.name.trim().is_empty() {
            return Err(ApertureError::validation("section name must be non-empty"));
        }
        if let Some(pointer) = &self.pointer
            && (!pointer.min_viewport_width.is_finite() || pointer.min_viewport_width < 0.0)
        {
            return Err(ApertureError::validation(format!(
                "section '{}': pointer.min_viewport_width must be finite and >= 0",
                self.name
            )));
        }

        let mut names = BTreeSet::new();
        for ch in &self.channels {
            if ch.name.trim().is_empty() {
                return Err(ApertureError::validation(format!(
                    "section '{}': channel name must be non-empty",
                    self.name
                )));
            }
            if !names.insert(ch.name.as_str()) {
                return Err(ApertureError::validation(format!(
                    "section '{}': duplicate channel '{}'",
                    self.name, ch.name
                )));
            }
            if ch.source.is_pointer() && self.pointer.is_none() {
                return Err(ApertureError::validation(format!(
                    "section '{}': channel '{}' reads the pointer but the section has no pointer settings",
                    self.name, ch.name
                )));
            }
            ch.table.validate()?;
            if let Some(spring) = &ch.spring {
                spring.validate().map_err(|e| {
                    ApertureError::validation(format!(
                        "section '{}': channel '{}': {e}",
                        self.name, ch.name
                    ))
                })?;
            }
        }
        Ok(())
    }
}

/// Everything needed to build a [`crate::scene::Scene`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub preloader: PreloaderConfig,
    #[serde(default)]
    pub smooth_scroll: SmoothScrollConfig,
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> ApertureResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_pretty(&self) -> ApertureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ApertureResult<()> {
        let mut names = BTreeSet::new();
        for section in self.sections.iter().chain([&self.nav.section]) {
            section.validate()?;
            if !names.insert(section.name.as_str()) {
                return Err(ApertureError::validation(format!(
                    "duplicate section '{}'",
                    section.name
                )));
            }
        }
        self.nav.validate()?;
        self.preloader.validate()?;
        self.smooth_scroll.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;

use std::collections::BTreeMap;

use crate::{
    animation::{spring::Spring, velocity::VelocityTracker},
    foundation::core::{Point, Rect, Viewport},
    input::{pointer::PointerParallax, scroll::ScrollRegion},
    scene::config::{ChannelConfig, PointerConfig, SectionConfig, SmoothStage, Source},
};

#[derive(Clone, Debug)]
struct Channel {
    config: ChannelConfig,
    // Created the first time the source is ready, so it starts at rest on the real value.
    spring: Option<Spring>,
}

impl Channel {
    fn new(config: ChannelConfig) -> Self {
        Self {
            config,
            spring: None,
        }
    }

    /// Value the spring should chase for a raw source reading.
    fn spring_target(&self, raw: f64) -> f64 {
        match self.config.smooth_stage {
            SmoothStage::AfterMap => self.config.table.map(raw),
            SmoothStage::BeforeMap => raw,
        }
    }

    fn retarget(&mut self, raw: f64) {
        let Some(cfg) = self.config.spring else {
            return;
        };
        let target = self.spring_target(raw);
        match &mut self.spring {
            Some(spring) => spring.set_target(target),
            None => self.spring = Some(Spring::new(cfg, target)),
        }
    }

    fn snap(&mut self, raw: f64) {
        let target = self.spring_target(raw);
        if let Some(spring) = &mut self.spring {
            spring.jump(target);
        }
    }

    fn value(&self, raw: f64) -> f64 {
        match (&self.spring, self.config.smooth_stage) {
            (Some(spring), SmoothStage::AfterMap) => spring.value(),
            (Some(spring), SmoothStage::BeforeMap) => self.config.table.map(spring.value()),
            (None, _) => self.config.table.map(raw),
        }
    }
}

#[derive(Clone, Debug)]
struct PointerTrack {
    config: PointerConfig,
    parallax: PointerParallax,
}

/// Runtime state of one declared section: its scroll region, pointer box and channels.
#[derive(Clone, Debug)]
pub struct Section {
    name: String,
    config: SectionConfig,
    viewport: Option<Viewport>,
    layout: Option<(f64, f64)>,
    document_height: Option<f64>,
    region: Option<ScrollRegion>,
    scroll_y: f64,
    progress: Option<f64>,
    velocity: VelocityTracker,
    pointer: Option<PointerTrack>,
    channels: Vec<Channel>,
}

impl Section {
    pub fn new(config: SectionConfig) -> Self {
        Self {
            name: config.name.clone(),
            pointer: config.pointer.map(|config| PointerTrack {
                config,
                parallax: PointerParallax::new(),
            }),
            channels: config.channels.iter().cloned().map(Channel::new).collect(),
            config,
            viewport: None,
            layout: None,
            document_height: None,
            region: None,
            scroll_y: 0.0,
            progress: None,
            velocity: VelocityTracker::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> Option<ScrollRegion> {
        self.region
    }

    /// Scroll progress, once the region is known.
    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport.ready();
        if let Some(track) = &mut self.pointer {
            let wide = viewport.width >= track.config.min_viewport_width;
            if track.parallax.is_enabled() != wide {
                tracing::debug!(section = %self.name, enabled = wide, "pointer tracking toggled");
            }
            track.parallax.set_enabled(wide);
        }
        self.resolve();
    }

    /// Element geometry in document coordinates. `bounds` is the pointer box in client
    /// coordinates; sections without pointer settings ignore it.
    pub fn on_layout(&mut self, top: f64, height: f64, bounds: Option<Rect>) {
        self.layout = Some((top, height));
        if let (Some(track), Some(bounds)) = (&mut self.pointer, bounds) {
            track.parallax.set_bounds(bounds);
        }
        self.resolve();
    }

    pub fn on_document_height(&mut self, height: f64) {
        self.document_height = Some(height);
        self.resolve();
    }

    pub fn on_scroll(&mut self, y: f64) {
        if !y.is_finite() {
            return;
        }
        self.scroll_y = y;
        self.progress = self.region.map(|r| r.progress(y));
        self.retarget();
    }

    pub fn on_pointer_move(&mut self, client: Point) {
        let Some(track) = &mut self.pointer else {
            return;
        };
        track.parallax.on_move(client);
        self.retarget();
    }

    pub fn on_pointer_leave(&mut self) {
        let Some(track) = &mut self.pointer else {
            return;
        };
        track.parallax.on_leave();
        let snap = track.config.snap_on_leave;
        self.retarget();
        if snap {
            for i in 0..self.channels.len() {
                if !self.channels[i].config.source.is_pointer() {
                    continue;
                }
                if let Some(raw) = self.raw(self.channels[i].config.source) {
                    self.channels[i].snap(raw);
                }
            }
        }
    }

    /// Samples the scroll velocity and steps every spring by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if let Some(progress) = self.progress {
            self.velocity.sample(progress, dt);
        }
        self.retarget();
        for ch in &mut self.channels {
            if let Some(spring) = &mut ch.spring {
                spring.step(dt);
            }
        }
    }

    /// Current values of every channel whose source is ready.
    pub fn values(&self) -> BTreeMap<String, f64> {
        self.channels
            .iter()
            .filter_map(|ch| {
                let raw = self.raw(ch.config.source)?;
                Some((ch.config.name.clone(), ch.value(raw)))
            })
            .collect()
    }

    pub fn value(&self, channel: &str) -> Option<f64> {
        let ch = self.channels.iter().find(|ch| ch.config.name == channel)?;
        let raw = self.raw(ch.config.source)?;
        Some(ch.value(raw))
    }

    fn resolve(&mut self) {
        let Some(viewport) = self.viewport else {
            self.region = None;
            self.progress = None;
            return;
        };
        self.region = match self.config.offsets {
            Some(offsets) => self
                .layout
                .and_then(|(top, height)| ScrollRegion::resolve(top, height, viewport, offsets)),
            None => self
                .document_height
                .and_then(|h| ScrollRegion::page(h, viewport)),
        };
        let progress = self.region.map(|r| r.progress(self.scroll_y));
        if progress.is_none() {
            self.velocity.reset();
        }
        self.progress = progress;
        self.retarget();
    }

    fn retarget(&mut self) {
        for i in 0..self.channels.len() {
            if let Some(raw) = self.raw(self.channels[i].config.source) {
                self.channels[i].retarget(raw);
            }
        }
    }

    fn raw(&self, source: Source) -> Option<f64> {
        match source {
            Source::ScrollProgress => self.progress,
            Source::ScrollVelocity => self.progress.map(|_| self.velocity.velocity()),
            pointer => {
                let track = self.pointer.as_ref()?;
                track.parallax.bounds()?;
                let p = &track.parallax;
                Some(match pointer {
                    Source::PointerX => p.normalized().x,
                    Source::PointerY => p.normalized().y,
                    Source::PointerLocalX => p.local().x,
                    Source::PointerLocalY => p.local().y,
                    Source::PointerCenterX => p.from_center().x,
                    Source::PointerCenterY => p.from_center().y,
                    Source::ScrollProgress | Source::ScrollVelocity => return None,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/section.rs"]
mod tests;

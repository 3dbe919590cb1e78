use std::{collections::BTreeMap, time::Duration};

use crate::{
    foundation::core::{Point, Rect, Viewport},
    foundation::error::ApertureResult,
    foundation::math::{finite_or, ms_to_secs},
    host::timer::TimerQueue,
    input::smooth_scroll::SmoothScroller,
    nav::bar::{NavBar, NavSnapshot},
    preloader::counter::TickDelay,
    preloader::view::{PreloaderSnapshot, PreloaderView},
    scene::config::SceneConfig,
    scene::section::Section,
};

/// One host event, in delivery order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Resize {
        width: f64,
        height: f64,
    },
    /// Element geometry for a section, in document pixels. `bounds` is its box in client
    /// pixels, used for pointer tracking.
    Layout {
        section: String,
        top: f64,
        height: f64,
        #[serde(default)]
        bounds: Option<Rect>,
    },
    DocumentHeight {
        height: f64,
    },
    Wheel {
        delta: f64,
    },
    ScrollTo {
        y: f64,
        #[serde(default)]
        duration_ms: Option<f64>,
    },
    /// Native scroll position change (scrollbar, keyboard, restore).
    Scroll {
        y: f64,
    },
    PointerMove {
        section: String,
        x: f64,
        y: f64,
    },
    PointerLeave {
        section: String,
    },
    MenuToggle {
        open: bool,
    },
    Frame {
        dt_ms: f64,
    },
}

/// Everything the render layer reads after an event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneSnapshot {
    pub time_ms: f64,
    pub scroll: f64,
    /// True once the preloader has left and the page is interactive.
    pub revealed: bool,
    pub preloader: PreloaderSnapshot,
    pub nav: NavSnapshot,
    pub sections: BTreeMap<String, BTreeMap<String, f64>>,
}

/// A mounted page: the single scroll producer plus every consumer of it.
pub struct Scene {
    viewport: Option<Viewport>,
    document_height: Option<f64>,
    timers: TimerQueue,
    scroller: SmoothScroller,
    preloader: PreloaderView,
    nav: NavBar,
    sections: Vec<Section>,
    last_scroll: f64,
    revealed: bool,
}

impl Scene {
    /// Validates `config` and mounts the preloader, scheduling its first tick.
    pub fn new(config: SceneConfig, delay: Box<dyn TickDelay>) -> ApertureResult<Self> {
        config.validate()?;
        let SceneConfig {
            sections,
            nav,
            preloader,
            smooth_scroll,
        } = config;

        let mut timers = TimerQueue::new();
        let mut preloader = PreloaderView::new(preloader, delay);
        preloader.mount(&mut timers);

        tracing::debug!(sections = sections.len(), "scene mounted");
        Ok(Self {
            viewport: None,
            document_height: None,
            timers,
            scroller: SmoothScroller::new(smooth_scroll),
            preloader,
            nav: NavBar::new(nav),
            sections: sections.into_iter().map(Section::new).collect(),
            last_scroll: 0.0,
            revealed: false,
        })
    }

    /// Builds a scene with the config's jittered tick delay. A seed makes replays reproducible.
    pub fn with_seed(config: SceneConfig, seed: Option<u64>) -> ApertureResult<Self> {
        let delay = config.preloader.tick_delay(seed)?;
        Self::new(config, Box::new(delay))
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroller.offset()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        if self.nav.section().name() == name {
            return Some(self.nav.section());
        }
        self.sections.iter().find(|s| s.name() == name)
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn preloader(&self) -> &PreloaderView {
        &self.preloader
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resize { width, height } => self.on_resize(Viewport { width, height }),
            InputEvent::Layout {
                section,
                top,
                height,
                bounds,
            } => {
                if let Some(s) = self.section_mut(&section) {
                    s.on_layout(top, height, bounds);
                }
            }
            InputEvent::DocumentHeight { height } => {
                if !height.is_finite() || height < 0.0 {
                    tracing::warn!(height, "ignoring invalid document height");
                    return;
                }
                self.document_height = Some(height);
                self.update_limit();
                for s in self.sections_mut() {
                    s.on_document_height(height);
                }
            }
            InputEvent::Wheel { delta } => self.scroller.on_wheel(delta),
            InputEvent::ScrollTo { y, duration_ms } => {
                let duration = duration_ms.map(ms_to_secs);
                self.scroller.scroll_to(y, duration);
            }
            InputEvent::Scroll { y } => {
                self.scroller.jump(y);
                self.dispatch_scroll();
            }
            InputEvent::PointerMove { section, x, y } => {
                if let Some(s) = self.section_mut(&section) {
                    s.on_pointer_move(Point::new(x, y));
                }
            }
            InputEvent::PointerLeave { section } => {
                if let Some(s) = self.section_mut(&section) {
                    s.on_pointer_leave();
                }
            }
            InputEvent::MenuToggle { open } => self.nav.set_menu_open(open),
            InputEvent::Frame { dt_ms } => self.on_frame(ms_to_secs(dt_ms)),
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            time_ms: self.timers.now().as_nanos() as f64 / 1e6,
            scroll: self.scroller.offset(),
            revealed: self.revealed,
            preloader: self.preloader.snapshot(),
            nav: self.nav.snapshot(),
            sections: self
                .sections
                .iter()
                .map(|s| (s.name().to_owned(), s.values()))
                .collect(),
        }
    }

    /// Cancels every pending timer. The scene stops ticking but can still be inspected.
    pub fn unmount(&mut self) {
        self.preloader.unmount(&mut self.timers);
        let dropped = self.timers.clear();
        tracing::debug!(dropped, "scene unmounted");
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport.ready();
        if self.viewport.is_none() {
            tracing::debug!(?viewport, "viewport not ready");
        }
        self.preloader.on_resize(viewport);
        self.update_limit();
        for s in self.sections_mut() {
            s.on_resize(viewport);
        }
        self.dispatch_scroll();
    }

    fn on_frame(&mut self, dt: f64) {
        // Frames too long for a Duration saturate so every pending tick still fires.
        let step = Duration::try_from_secs_f64(finite_or(dt, 0.0).max(0.0))
            .unwrap_or(Duration::MAX);
        let deadline = self.timers.now().saturating_add(step);
        while let Some(id) = self.timers.pop_due(deadline) {
            if !self.preloader.on_timer(id, &mut self.timers) {
                tracing::warn!(?id, "fired timer has no owner");
            }
        }
        self.timers.settle(deadline);

        if self.preloader.on_frame(dt) && !self.revealed {
            self.revealed = true;
            self.scroller.jump(0.0);
            tracing::debug!("page revealed");
        }

        self.scroller.advance(dt);
        self.dispatch_scroll();
        for s in self.sections_mut() {
            s.step(dt);
        }
        self.nav.step(dt);
    }

    fn dispatch_scroll(&mut self) {
        let y = self.scroller.offset();
        for s in &mut self.sections {
            s.on_scroll(y);
        }
        // The bar compares consecutive samples, so it only sees actual changes.
        if y != self.last_scroll {
            self.last_scroll = y;
            self.nav.on_scroll(y);
        }
    }

    fn update_limit(&mut self) {
        if let (Some(vp), Some(h)) = (self.viewport, self.document_height) {
            self.scroller.set_limit(h - vp.height);
        }
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        if self.nav.section().name() == name {
            return Some(self.nav.section_mut());
        }
        let found = self.sections.iter_mut().find(|s| s.name() == name);
        if found.is_none() {
            tracing::warn!(section = name, "event for unknown section ignored");
        }
        found
    }

    // Every section including the nav bar's own.
    fn sections_mut(&mut self) -> impl Iterator<Item = &mut Section> {
        self.sections
            .iter_mut()
            .chain(std::iter::once(self.nav.section_mut()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/runtime.rs"]
mod tests;

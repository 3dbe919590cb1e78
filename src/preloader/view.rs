use std::time::Duration;

use crate::{
    animation::{
        ease::Ease,
        tween::{Transition, Tween},
    },
    foundation::core::Viewport,
    foundation::error::{ApertureError, ApertureResult},
    host::timer::{TimerId, TimerQueue},
    preloader::counter::{JitterDelay, PreloaderCounter, TickDelay},
    preloader::curtain::curtain_path,
};

/// Timing and look of the preloader overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreloaderConfig {
    pub min_tick_ms: u64,
    pub max_tick_ms: u64,
    /// How far the curtain's bottom edge sags below the fold, in pixels.
    pub bulge: f64,
    pub text_opacity: f64,
    pub text_fade: Transition,
    pub exit_curve: Transition,
    pub exit_slide: Transition,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            min_tick_ms: 10,
            max_tick_ms: 30,
            bulge: 300.0,
            text_opacity: 0.75,
            text_fade: Transition::new(1.0, Ease::EASE_OUT).with_delay(0.2),
            exit_curve: Transition::new(0.7, Ease::FLUID).with_delay(0.3),
            exit_slide: Transition::new(0.8, Ease::FLUID).with_delay(0.2),
        }
    }
}

impl PreloaderConfig {
    pub fn validate(&self) -> ApertureResult<()> {
        if self.min_tick_ms > self.max_tick_ms {
            return Err(ApertureError::validation(
                "preloader.min_tick_ms must be <= max_tick_ms",
            ));
        }
        if !self.bulge.is_finite() || self.bulge < 0.0 {
            return Err(ApertureError::validation(
                "preloader.bulge must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.text_opacity) {
            return Err(ApertureError::validation(
                "preloader.text_opacity must be in [0, 1]",
            ));
        }
        self.text_fade.validate()?;
        self.exit_curve.validate()?;
        self.exit_slide.validate()
    }

    /// Jittered tick delay over the configured range. A seed makes the cadence reproducible.
    pub fn tick_delay(&self, seed: Option<u64>) -> ApertureResult<JitterDelay> {
        let min = Duration::from_millis(self.min_tick_ms);
        let max = Duration::from_millis(self.max_tick_ms);
        match seed {
            Some(seed) => JitterDelay::seeded(min, max, seed),
            None => JitterDelay::from_entropy(min, max),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Counting,
    Exiting,
    Dismissed,
}

/// What the render layer needs to draw the overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PreloaderSnapshot {
    /// False before the first viewport is known and after dismissal.
    pub visible: bool,
    pub percent: u8,
    pub complete: bool,
    pub text_opacity: f64,
    /// 0 while the curtain hangs, 1 once it has folded flat.
    pub curve_lift: f64,
    /// Vertical offset of the panel in pixels; reaches minus one viewport height.
    pub slide_y: f64,
    /// SVG path data of the curtain, when visible.
    pub curtain: Option<String>,
}

/// Mounted preloader: drives the counter from timers, then plays the exit.
pub struct PreloaderView {
    config: PreloaderConfig,
    counter: PreloaderCounter,
    delay: Box<dyn TickDelay>,
    pending: Option<TimerId>,
    viewport: Option<Viewport>,
    phase: Phase,
    text_opacity: Tween,
    curve_lift: Tween,
    slide: Tween,
}

impl PreloaderView {
    pub fn new(config: PreloaderConfig, delay: Box<dyn TickDelay>) -> Self {
        Self {
            config,
            counter: PreloaderCounter::new(),
            delay,
            pending: None,
            viewport: None,
            phase: Phase::Idle,
            text_opacity: Tween::at_rest(0.0),
            curve_lift: Tween::at_rest(0.0),
            slide: Tween::at_rest(0.0),
        }
    }

    /// Schedules the first tick and starts the text fade-in. Mounting twice is a no-op.
    pub fn mount(&mut self, timers: &mut TimerQueue) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Counting;
        self.text_opacity
            .retarget(self.config.text_opacity, self.config.text_fade);
        self.schedule_tick(timers);
    }

    /// Cancels the pending tick. The view stays where it was and never ticks again.
    pub fn unmount(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.pending.take() {
            timers.cancel(id);
        }
        if self.phase == Phase::Counting {
            self.phase = Phase::Idle;
        }
    }

    /// Handles a fired timer. Returns false when the timer belongs to someone else.
    pub fn on_timer(&mut self, id: TimerId, timers: &mut TimerQueue) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.counter.tick();
        if self.counter.is_complete() {
            tracing::debug!(at = ?timers.now(), "preloader count complete");
            self.start_exit();
        } else {
            self.schedule_tick(timers);
        }
        true
    }

    /// Advances the fade and exit transitions. Returns true on the frame the exit finishes.
    pub fn on_frame(&mut self, dt: f64) -> bool {
        self.text_opacity.advance(dt);
        if self.phase != Phase::Exiting {
            return false;
        }
        self.curve_lift.advance(dt);
        self.slide.advance(dt);
        if self.curve_lift.is_finished() && self.slide.is_finished() {
            self.phase = Phase::Dismissed;
            tracing::debug!("preloader dismissed");
            return true;
        }
        false
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport.ready();
    }

    pub fn percent(&self) -> u8 {
        self.counter.count()
    }

    pub fn is_complete(&self) -> bool {
        self.counter.is_complete()
    }

    pub fn is_dismissed(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    pub fn snapshot(&self) -> PreloaderSnapshot {
        let viewport = self.viewport.filter(|_| !self.is_dismissed());
        let curve_lift = self.curve_lift.value();
        PreloaderSnapshot {
            visible: viewport.is_some(),
            percent: self.counter.count(),
            complete: self.counter.is_complete(),
            text_opacity: self.text_opacity.value(),
            curve_lift,
            slide_y: viewport.map_or(0.0, |vp| -self.slide.value() * vp.height),
            curtain: viewport.map(|vp| curtain_path(vp, self.config.bulge, curve_lift).to_svg()),
        }
    }

    fn schedule_tick(&mut self, timers: &mut TimerQueue) {
        let delay = self.delay.next_delay();
        self.pending = Some(timers.schedule(delay));
    }

    fn start_exit(&mut self) {
        self.phase = Phase::Exiting;
        self.curve_lift.retarget(1.0, self.config.exit_curve);
        self.slide.retarget(1.0, self.config.exit_slide);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preloader/view.rs"]
mod tests;

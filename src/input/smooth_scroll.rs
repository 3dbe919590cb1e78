use crate::{
    animation::{
        ease::Ease,
        tween::{Transition, Tween},
    },
    foundation::error::{ApertureError, ApertureResult},
    foundation::math::{damp, finite_or},
};

/// Inertial wheel scrolling settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SmoothScrollConfig {
    /// Fraction of the remaining distance covered per 60 Hz frame.
    pub lerp: f64,
    #[serde(default = "default_wheel_multiplier")]
    pub wheel_multiplier: f64,
    /// When false, wheel input moves the page immediately.
    #[serde(default = "default_smooth_wheel")]
    pub smooth_wheel: bool,
}

fn default_wheel_multiplier() -> f64 {
    1.0
}

fn default_smooth_wheel() -> bool {
    true
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            lerp: 0.08,
            wheel_multiplier: 1.0,
            smooth_wheel: true,
        }
    }
}

impl SmoothScrollConfig {
    pub fn validate(&self) -> ApertureResult<()> {
        if !self.lerp.is_finite() || self.lerp <= 0.0 || self.lerp > 1.0 {
            return Err(ApertureError::validation(
                "smooth_scroll.lerp must be in (0, 1]",
            ));
        }
        if !self.wheel_multiplier.is_finite() || self.wheel_multiplier <= 0.0 {
            return Err(ApertureError::validation(
                "smooth_scroll.wheel_multiplier must be finite and > 0",
            ));
        }
        Ok(())
    }
}

// Remaining distance (px) below which the scroller snaps onto its target.
const SNAP_PX: f64 = 0.01;

#[derive(Clone, Debug)]
enum Motion {
    Idle,
    Damped,
    Glide(Tween),
}

/// The page's single scroll offset producer.
///
/// Wheel input moves a target; [`SmoothScroller::advance`] eases the actual offset toward it
/// once per frame. Every consumer reads the offset, none writes it.
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    config: SmoothScrollConfig,
    current: f64,
    target: f64,
    limit: f64,
    motion: Motion,
}

impl SmoothScroller {
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self {
            config,
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            motion: Motion::Idle,
        }
    }

    pub fn offset(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_moving(&self) -> bool {
        !matches!(self.motion, Motion::Idle)
    }

    /// Maximum scroll offset (document height minus viewport height).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = finite_or(limit, 0.0).max(0.0);
        self.target = self.target.min(self.limit);
        if self.current > self.limit {
            self.current = self.limit;
        }
        // A glide aimed past the new limit would run outside the page.
        if let Motion::Glide(tween) = &self.motion
            && tween.target() > self.limit
        {
            self.motion = Motion::Damped;
        }
    }

    pub fn on_wheel(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.target = self.clamp(self.target + delta * self.config.wheel_multiplier);
        if self.config.smooth_wheel {
            self.motion = Motion::Damped;
        } else {
            self.jump(self.target);
        }
    }

    /// Native scroll (scrollbar drag, keyboard, restore): no smoothing.
    pub fn jump(&mut self, y: f64) {
        if !y.is_finite() {
            return;
        }
        self.current = self.clamp(y);
        self.target = self.current;
        self.motion = Motion::Idle;
    }

    /// Programmatic scroll. With a duration it glides on an exponential ease-out, otherwise it
    /// joins the damped wheel motion.
    pub fn scroll_to(&mut self, y: f64, duration: Option<f64>) {
        if !y.is_finite() {
            return;
        }
        self.target = self.clamp(y);
        self.motion = match duration.filter(|d| d.is_finite() && *d > 0.0) {
            Some(d) => Motion::Glide(Tween::new(
                self.current,
                self.target,
                Transition::new(d, Ease::OutExpo),
            )),
            None => Motion::Damped,
        };
    }

    /// Advances one frame of `dt` seconds and returns the new offset.
    pub fn advance(&mut self, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.current;
        }
        match &mut self.motion {
            Motion::Idle => {}
            Motion::Damped => {
                self.current = damp(self.current, self.target, self.config.lerp * 60.0, dt);
                if (self.target - self.current).abs() < SNAP_PX {
                    self.current = self.target;
                    self.motion = Motion::Idle;
                }
            }
            Motion::Glide(tween) => {
                self.current = tween.advance(dt).clamp(0.0, self.limit);
                if tween.is_finished() {
                    self.current = self.target;
                    self.motion = Motion::Idle;
                }
            }
        }
        self.current
    }

    fn clamp(&self, y: f64) -> f64 {
        y.clamp(0.0, self.limit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/smooth_scroll.rs"]
mod tests;

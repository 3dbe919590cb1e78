use crate::{
    animation::ease::Ease,
    foundation::error::{ApertureError, ApertureResult},
    foundation::math::lerp,
};

/// Timing of a variant change: wait `delay`, then ease over `duration` (both in seconds).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
        }
    }

    pub const fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn validate(&self) -> ApertureResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ApertureError::animation(
                "transition duration must be finite and >= 0",
            ));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(ApertureError::animation(
                "transition delay must be finite and >= 0",
            ));
        }
        self.ease.validate()
    }
}

/// A running transition from one value to another.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    transition: Transition,
    elapsed: f64,
}

impl Tween {
    pub fn new(from: f64, to: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            transition,
            elapsed: 0.0,
        }
    }

    /// A tween that already sits at `value`.
    pub fn at_rest(value: f64) -> Self {
        let mut tween = Self::new(value, value, Transition::new(0.0, Ease::Linear));
        tween.elapsed = f64::INFINITY;
        tween
    }

    /// Starts over from the current value, so an interrupted tween never snaps.
    pub fn retarget(&mut self, to: f64, transition: Transition) {
        let from = self.value();
        *self = Self::new(from, to, transition);
    }

    pub fn advance(&mut self, dt: f64) -> f64 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        lerp(self.from, self.to, self.transition.ease.apply(self.progress()))
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Linear time progress in `[0, 1]`, excluding the delay.
    pub fn progress(&self) -> f64 {
        let active = self.elapsed - self.transition.delay;
        if self.transition.duration <= 0.0 {
            return if active >= 0.0 { 1.0 } else { 0.0 };
        }
        if active <= 0.0 {
            return 0.0;
        }
        (active / self.transition.duration).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;

//! Damped second-order smoothing.
//!
//! A [`Spring`] chases a moving target the way a mass on a damped spring would:
//! `m·x'' + c·x' + k·x = 0`, where `x` is the displacement from the target. Each step applies
//! the closed-form solution for the current displacement and velocity, so the filter is exact
//! for any step size and never integrates its way into instability.

use crate::foundation::error::{ApertureError, ApertureResult};

/// Physical parameters of a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c` (not the ratio; see [`SpringConfig::damping_ratio`]).
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Displacement below which the spring may come to rest.
    #[serde(default = "default_rest_delta")]
    pub rest_delta: f64,
    /// Speed (units per second) below which the spring may come to rest.
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f64,
}

fn default_mass() -> f64 {
    1.0
}

fn default_rest_delta() -> f64 {
    0.005
}

fn default_rest_speed() -> f64 {
    0.01
}

impl SpringConfig {
    /// Navigation island tilt and magnetic buttons.
    pub const TILT: Self = Self::new(100.0, 15.0, 0.5);
    /// Cursor spotlight position.
    pub const SPOTLIGHT: Self = Self::new(150.0, 20.0, 1.0);
    /// Slow, heavy parallax (hero and philosophy tilt).
    pub const GENTLE: Self = Self::new(50.0, 20.0, 1.0);
    /// Story card tilt and gallery velocity.
    pub const CARD: Self = Self::new(100.0, 30.0, 1.0);
    /// Footer content drift.
    pub const DRIFT: Self = Self::new(100.0, 20.0, 0.5);

    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.005,
            rest_speed: 0.01,
        }
    }

    pub fn validate(&self) -> ApertureResult<()> {
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(ApertureError::validation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ApertureError::validation(
                "spring damping must be finite and >= 0",
            ));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ApertureError::validation(
                "spring mass must be finite and > 0",
            ));
        }
        if !self.rest_delta.is_finite() || self.rest_delta < 0.0 {
            return Err(ApertureError::validation(
                "spring rest_delta must be finite and >= 0",
            ));
        }
        if !self.rest_speed.is_finite() || self.rest_speed < 0.0 {
            return Err(ApertureError::validation(
                "spring rest_speed must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Undamped angular frequency `ω₀ = √(k/m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `ζ = c / (2·√(k·m))`; below 1 the spring overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Fraction of a step input the spring overshoots by (0 when `ζ >= 1`).
    pub fn overshoot(&self) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            return 0.0;
        }
        (-zeta * std::f64::consts::PI / (1.0 - zeta * zeta).sqrt()).exp()
    }
}

/// Stateful damped filter for one animated channel.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        let initial = if initial.is_finite() { initial } else { 0.0 };
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Non-finite targets are dropped; the spring keeps chasing the previous one.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Teleports to `value` and stops.
    pub fn jump(&mut self, value: f64) {
        if value.is_finite() {
            self.position = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 || self.is_settled() {
            return self.position;
        }

        let (x, v) = self.response(self.position - self.target, self.velocity, dt);
        self.position = self.target + x;
        self.velocity = v;

        if x.abs() < self.config.rest_delta && v.abs() < self.config.rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    /// Displacement and velocity after `t` seconds, starting from `(x0, v0)`.
    fn response(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let w0 = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped.
            let b = v0 + w0 * x0;
            let e = (-w0 * t).exp();
            let x = e * (x0 + b * t);
            let v = e * (b - w0 * (x0 + b * t));
            (x, v)
        } else if zeta < 1.0 {
            let a = zeta * w0;
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + a * x0) / wd;
            let e = (-a * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = e * (x0 * cos + b * sin);
            let v = e * ((b * wd - a * x0) * cos - (a * b + x0 * wd) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;

/// Rate of change of a sampled signal, in units per second.
///
/// Sampled once per frame. A frame without movement reports zero, so the velocity falls back
/// to rest as soon as scrolling stops.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    last: Option<f64>,
    velocity: f64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, value: f64, dt: f64) -> f64 {
        if !value.is_finite() {
            return self.velocity;
        }
        self.velocity = match self.last {
            Some(prev) if dt.is_finite() && dt > 0.0 => (value - prev) / dt,
            Some(_) => self.velocity,
            None => 0.0,
        };
        self.last = Some(value);
        self.velocity
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

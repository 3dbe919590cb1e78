use crate::{
    foundation::error::{ApertureError, ApertureResult},
    foundation::math::lerp,
};

/// One breakpoint of an [`InterpolationTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stop {
    pub input: f64,
    pub output: f64,
}

/// Piecewise-linear mapping defined by ordered `(input, output)` breakpoints.
///
/// Inputs outside the table's domain clamp to the first/last output, so a table never produces
/// a value outside the range of its own outputs. Serializes as `[[input, output], ...]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct InterpolationTable {
    stops: Vec<Stop>, // inputs non-decreasing
}

impl InterpolationTable {
    pub fn new(stops: impl IntoIterator<Item = (f64, f64)>) -> ApertureResult<Self> {
        let table = Self {
            stops: stops
                .into_iter()
                .map(|(input, output)| Stop { input, output })
                .collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Two-stop table mapping `[in0, in1]` onto `[out0, out1]`.
    pub fn linear(input: [f64; 2], output: [f64; 2]) -> ApertureResult<Self> {
        Self::new([(input[0], output[0]), (input[1], output[1])])
    }

    /// Table from literal stops known to be valid (built-in presets).
    pub(crate) fn from_literal(stops: &[(f64, f64)]) -> Self {
        let table = Self {
            stops: stops
                .iter()
                .map(|&(input, output)| Stop { input, output })
                .collect(),
        };
        debug_assert!(table.validate().is_ok());
        table
    }

    pub fn validate(&self) -> ApertureResult<()> {
        if self.stops.is_empty() {
            return Err(ApertureError::validation(
                "interpolation table must have at least one stop",
            ));
        }
        if !self
            .stops
            .iter()
            .all(|s| s.input.is_finite() && s.output.is_finite())
        {
            return Err(ApertureError::validation(
                "interpolation table stops must be finite",
            ));
        }
        if !self.stops.windows(2).all(|w| w[0].input <= w[1].input) {
            return Err(ApertureError::validation(
                "interpolation table inputs must be non-decreasing",
            ));
        }
        Ok(())
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// `(first input, last input)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.first().input, self.last().input)
    }

    pub fn map(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.first().output;
        }

        let idx = self.stops.partition_point(|s| s.input <= x);
        if idx == 0 {
            return self.first().output;
        }
        if idx >= self.stops.len() {
            return self.last().output;
        }

        let a = self.stops[idx - 1];
        let b = self.stops[idx];
        // a.input <= x < b.input, so the span is strictly positive.
        let t = (x - a.input) / (b.input - a.input);
        lerp(a.output, b.output, t)
    }

    fn first(&self) -> Stop {
        self.stops[0]
    }

    fn last(&self) -> Stop {
        self.stops[self.stops.len() - 1]
    }
}

impl TryFrom<Vec<[f64; 2]>> for InterpolationTable {
    type Error = ApertureError;

    fn try_from(pairs: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::new(pairs.into_iter().map(|[i, o]| (i, o)))
    }
}

impl From<InterpolationTable> for Vec<[f64; 2]> {
    fn from(table: InterpolationTable) -> Self {
        table.stops.iter().map(|s| [s.input, s.output]).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;

use std::{fmt, str::FromStr};

use crate::foundation::{core::Viewport, error::ApertureError};

/// An edge of the tracked element or of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

impl FromStr for Edge {
    type Err = ApertureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => Err(ApertureError::validation(format!(
                "unknown scroll edge '{other}' (expected start|center|end)"
            ))),
        }
    }
}

/// The moment an element edge meets a viewport edge, written `"<element> <viewport>"`.
///
/// `"start end"` is the instant the element's top enters at the bottom of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Document scroll offset at which this intersection happens.
    fn scroll_offset(self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.target.fraction() * element_height
            - self.container.fraction() * viewport_height
    }
}

impl FromStr for Intersection {
    type Err = ApertureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let target = parts
            .next()
            .ok_or_else(|| ApertureError::validation("scroll intersection must not be empty"))?
            .parse::<Edge>()?;
        let container = match parts.next() {
            Some(p) => p.parse::<Edge>()?,
            None => target,
        };
        if parts.next().is_some() {
            return Err(ApertureError::validation(format!(
                "scroll intersection '{s}' has more than two edges"
            )));
        }
        Ok(Self { target, container })
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.target.as_str(), self.container.as_str())
    }
}

impl TryFrom<String> for Intersection {
    type Error = ApertureError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Intersection> for String {
    fn from(i: Intersection) -> Self {
        i.to_string()
    }
}

/// Pair of intersections delimiting a scroll-tracked range: progress is 0 at `start`, 1 at `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[Intersection; 2]", into = "[Intersection; 2]")]
pub struct ScrollOffsets {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffsets {
    /// Element is tracked while any part of it is on screen.
    pub const ENTER_EXIT: Self = Self::new(
        Intersection::new(Edge::Start, Edge::End),
        Intersection::new(Edge::End, Edge::Start),
    );
    /// Element fills the viewport for the whole range (sticky sections).
    pub const CONTAINED: Self = Self::new(
        Intersection::new(Edge::Start, Edge::Start),
        Intersection::new(Edge::End, Edge::End),
    );
    /// From resting at the top until scrolled fully out.
    pub const LEAVE: Self = Self::new(
        Intersection::new(Edge::Start, Edge::Start),
        Intersection::new(Edge::End, Edge::Start),
    );
    /// From peeking in at the bottom until its end reaches the bottom.
    pub const ARRIVE: Self = Self::new(
        Intersection::new(Edge::Start, Edge::End),
        Intersection::new(Edge::End, Edge::End),
    );

    pub const fn new(start: Intersection, end: Intersection) -> Self {
        Self { start, end }
    }
}

impl From<[Intersection; 2]> for ScrollOffsets {
    fn from([start, end]: [Intersection; 2]) -> Self {
        Self { start, end }
    }
}

impl From<ScrollOffsets> for [Intersection; 2] {
    fn from(o: ScrollOffsets) -> Self {
        [o.start, o.end]
    }
}

/// Scroll offsets bounding a tracked range, in document pixels. `end > start` always holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    start: f64,
    end: f64,
}

impl ScrollRegion {
    /// `None` for empty, inverted or non-finite ranges.
    pub fn new(start: f64, end: f64) -> Option<Self> {
        (start.is_finite() && end.is_finite() && end > start).then_some(Self { start, end })
    }

    /// Region for an element laid out at `element_top` with `element_height`.
    ///
    /// Returns `None` until the element and viewport have real geometry.
    pub fn resolve(
        element_top: f64,
        element_height: f64,
        viewport: Viewport,
        offsets: ScrollOffsets,
    ) -> Option<Self> {
        let viewport = viewport.ready()?;
        if !element_top.is_finite() || !element_height.is_finite() || element_height <= 0.0 {
            return None;
        }
        Self::new(
            offsets
                .start
                .scroll_offset(element_top, element_height, viewport.height),
            offsets
                .end
                .scroll_offset(element_top, element_height, viewport.height),
        )
    }

    /// Whole-document region: 0 at the top, 1 when the last screen is reached.
    pub fn page(document_height: f64, viewport: Viewport) -> Option<Self> {
        let viewport = viewport.ready()?;
        Self::new(0.0, document_height - viewport.height)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if scroll_y.is_nan() {
            return 0.0;
        }
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/scroll.rs"]
mod tests;

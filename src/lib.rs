//! Aperture is the motion core of a scroll-driven portfolio page.
//!
//! It turns raw host input (scroll offsets, wheel deltas, pointer positions, viewport and
//! element geometry, frame ticks) into plain animated values that a render layer applies.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: scroll offsets become `[0, 1]` progress through a [`ScrollRegion`], pointer
//!    positions become `[-0.5, 0.5]` offsets through a [`PointerParallax`]
//! 2. **Map**: an [`InterpolationTable`] turns progress into a CSS-ready value
//! 3. **Smooth** (optional): a [`Spring`] filters the value (or the raw source) over time
//! 4. **Read**: [`Scene::snapshot`] collects everything into a serializable [`SceneSnapshot`]
//!
//! Everything runs on one thread and is driven by events; timers live on a virtual clock
//! ([`TimerQueue`]) advanced by frame events, so a recorded trace replays identically.
//!
//! Only configuration can fail. Event handling clamps, ignores or reports "not ready" instead.
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod host;
pub mod input;
pub mod nav;
pub mod preloader;
pub mod scene;

pub use animation::ease::Ease;
pub use animation::interp::InterpolationTable;
pub use animation::spring::{Spring, SpringConfig};
pub use animation::tween::{Transition, Tween};
pub use animation::velocity::VelocityTracker;
pub use foundation::core::{BezPath, Point, Rect, Vec2, Viewport};
pub use foundation::error::{ApertureError, ApertureResult};
pub use host::timer::{TimerId, TimerQueue};
pub use input::pointer::PointerParallax;
pub use input::scroll::{Edge, Intersection, ScrollOffsets, ScrollRegion};
pub use input::smooth_scroll::{SmoothScrollConfig, SmoothScroller};
pub use nav::bar::{NavBar, NavConfig, NavSnapshot, NavVariant};
pub use nav::visibility::{NavVisibility, NavVisibilityController};
pub use preloader::counter::{
    FixedDelay, JitterDelay, PRELOADER_MAX, PreloaderCounter, PreloaderState, TickDelay,
};
pub use preloader::curtain::curtain_path;
pub use preloader::view::{PreloaderConfig, PreloaderSnapshot, PreloaderView};
pub use scene::presets::photographer_page;
pub use scene::{
    ChannelConfig, InputEvent, PointerConfig, Scene, SceneConfig, SceneSnapshot, Section,
    SectionConfig, SmoothStage, Source,
};

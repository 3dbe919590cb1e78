//! Page-level wiring: declarative config, built-in presets and the event-driven runtime.

pub mod config;
pub mod presets;
pub mod runtime;
pub mod section;

pub use config::{ChannelConfig, PointerConfig, SceneConfig, SectionConfig, SmoothStage, Source};
pub use runtime::{InputEvent, Scene, SceneSnapshot};
pub use section::Section;

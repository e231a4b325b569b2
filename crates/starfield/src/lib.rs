pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod engine;

// Re-export key types at crate root for convenience
pub use api::config::{StarfieldConfig, DEFAULT_SEED};
pub use api::device::{DeviceProfile, QualityTier};
pub use api::error::{StarfieldError, StarfieldResult};
pub use engine::Starfield;
pub use components::{Comet, CometEdge, Galaxy, Star};
pub use core::bounds::SceneBounds;
pub use core::rng::Rng;
pub use core::scheduler::{FrameHandle, FrameLoop, ManualScheduler, Scheduler};
pub use core::time::{FrameClock, MAX_FRAME_DELTA};
pub use input::{InputEvent, InputQueue, Pointer, ResizeDebouncer, ResizeRequest};
pub use renderer::{BlendMode, Canvas2d, Color, ColorStop, DrawCommand, Fill, Paint, RecordingCanvas};
pub use systems::{star_count, Population};

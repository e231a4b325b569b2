pub mod bounds;
pub mod rng;
pub mod scheduler;
pub mod time;

pub use bounds::{SceneBounds, MIN_LOGICAL_SIZE, REFERENCE_HEIGHT, REFERENCE_WIDTH};
pub use rng::Rng;
pub use scheduler::{FrameHandle, FrameLoop, ManualScheduler, Scheduler};
pub use time::{clamp_delta, FrameClock, MAX_FRAME_DELTA};

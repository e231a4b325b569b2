pub mod color;
pub mod recorder;
pub mod traits;

// Re-export key types for convenient access
pub use color::Color;
pub use recorder::{DrawCommand, Fill, RecordingCanvas};
pub use traits::{BlendMode, Canvas2d, ColorStop, Paint};

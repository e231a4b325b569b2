pub mod debounce;
pub mod pointer;
pub mod queue;

pub use debounce::{ResizeDebouncer, ResizeRequest};
pub use pointer::{orientation_to_screen, Pointer};
pub use queue::{InputEvent, InputQueue};

pub mod draw;
pub mod scene;
pub mod update;

pub use scene::{star_count, Population};

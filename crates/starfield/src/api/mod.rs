pub mod config;
pub mod device;
pub mod error;

pub use config::{StarfieldConfig, DEFAULT_SEED};
pub use device::{DeviceProfile, QualityTier};
pub use error::{StarfieldError, StarfieldResult};

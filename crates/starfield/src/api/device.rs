/// Rendering quality chosen before the engine is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityTier {
    /// Full-resolution backing store.
    #[default]
    High,
    /// Half-resolution backing store and slower resize debounce.
    Reduced,
}

/// Hardware hints reported by the host.
/// Any field may be unknown; unknown values never make a device low-end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeviceProfile {
    /// Approximate RAM in gigabytes.
    pub memory_gb: Option<f32>,
    /// Logical CPU cores.
    pub cores: Option<u32>,
    pub mobile: bool,
}

impl DeviceProfile {
    const MIN_MEMORY_GB: f32 = 4.0;
    const MIN_CORES: u32 = 4;

    pub fn is_low_end(&self) -> bool {
        let low_memory = self.memory_gb.is_some_and(|gb| gb < Self::MIN_MEMORY_GB);
        let few_cores = self.cores.is_some_and(|c| c < Self::MIN_CORES);
        low_memory || few_cores
    }

    /// Whether a user-agent string names a phone or tablet browser.
    pub fn is_mobile_user_agent(user_agent: &str) -> bool {
        const MARKERS: [&str; 8] = [
            "android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini",
        ];
        let ua = user_agent.to_ascii_lowercase();
        MARKERS.iter().any(|m| ua.contains(m))
    }

    pub fn tier(&self) -> QualityTier {
        if self.is_low_end() {
            QualityTier::Reduced
        } else {
            QualityTier::High
        }
    }
}

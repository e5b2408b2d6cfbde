use serde::{Deserialize, Serialize};

use crate::types::ResizeMode;

/// Output side the legacy behavior forces on circularized images,
/// regardless of the configured target size.
pub const LEGACY_NON_CIRCLE_SIZE: u32 = 100;

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Target square side in pixels
    pub target_size: u32,
    /// How the target size is applied to the non-circle path
    pub resize_mode: ResizeMode,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            target_size: LEGACY_NON_CIRCLE_SIZE,
            resize_mode: ResizeMode::Legacy,
        }
    }
}

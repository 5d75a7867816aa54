use serde::{Deserialize, Serialize};

use kerfnest::PackingConfig;

/// Configuration for the shelf packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct ShelfConfig {
    /// Sheet dimensions and kerf
    #[serde(default)]
    pub packing: PackingConfig,
    /// Verify containment and non-overlap of the final solution, also in release builds
    #[serde(default)]
    pub validate_layouts: bool,
}

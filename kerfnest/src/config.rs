use serde::{Deserialize, Serialize};

use crate::error::{NestError, Result};
use crate::geometry::Rect;

/// Dimensions of the stock sheets and the kerf of the cutting tool, shared by all sheets of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackingConfig {
    pub sheet_width: f64,
    pub sheet_height: f64,
    /// Material removed by the cutting tool, added to both dimensions of every piece's footprint.
    /// Zero is allowed.
    pub kerf: f64,
}

impl PackingConfig {
    pub fn new(sheet_width: f64, sheet_height: f64, kerf: f64) -> Result<Self> {
        let config = PackingConfig {
            sheet_width,
            sheet_height,
            kerf,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the config, which might have been deserialized without going through [`PackingConfig::new`].
    pub fn validate(&self) -> Result<()> {
        if !(self.sheet_width.is_finite() && self.sheet_width > 0.0) {
            return Err(NestError::InvalidConfig(format!(
                "sheet width must be positive, got {}",
                self.sheet_width
            )));
        }
        if !(self.sheet_height.is_finite() && self.sheet_height > 0.0) {
            return Err(NestError::InvalidConfig(format!(
                "sheet height must be positive, got {}",
                self.sheet_height
            )));
        }
        validate_kerf(self.kerf)
    }

    pub fn sheet_area(&self) -> f64 {
        self.sheet_width * self.sheet_height
    }

    /// The usable region of a sheet, with its bottom-left corner at the origin.
    pub fn sheet_rect(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.sheet_width,
            y_max: self.sheet_height,
        }
    }
}

impl Default for PackingConfig {
    /// 1210 x 2430 mm panels cut with a 12.7 mm (1/2") router bit.
    fn default() -> Self {
        Self {
            sheet_width: 1210.0,
            sheet_height: 2430.0,
            kerf: 12.7,
        }
    }
}

pub(crate) fn validate_kerf(kerf: f64) -> Result<()> {
    if !(kerf.is_finite() && kerf >= 0.0) {
        return Err(NestError::InvalidConfig(format!(
            "kerf must be non-negative, got {kerf}"
        )));
    }
    Ok(())
}

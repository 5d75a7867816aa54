use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::PackingConfig;
use crate::error::{Axis, NestError, Result};

/// A distinct rectangular piece requested in some quantity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceSpec {
    /// Identifier, unique within a batch of specs
    pub id: usize,
    /// Nominal width, without kerf
    pub width: f64,
    /// Nominal height, without kerf
    pub height: f64,
    /// Number of instances to cut
    pub quantity: usize,
    /// Free text, only used for labeling
    #[serde(default)]
    pub description: String,
}

impl PieceSpec {
    pub fn new(
        id: usize,
        width: f64,
        height: f64,
        quantity: usize,
        description: impl Into<String>,
    ) -> Result<Self> {
        let spec = PieceSpec {
            id,
            width,
            height,
            quantity,
            description: description.into(),
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        let reason = if !(self.width.is_finite() && self.width > 0.0) {
            format!("width must be positive, got {}", self.width)
        } else if !(self.height.is_finite() && self.height > 0.0) {
            format!("height must be positive, got {}", self.height)
        } else if self.quantity == 0 {
            "quantity must be positive, got 0".to_string()
        } else {
            return Ok(());
        };
        Err(NestError::InvalidPieceSpec {
            id: self.id,
            reason,
        })
    }
}

/// A single physical unit of a [`PieceSpec`], with its footprint padded by the kerf.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceInstance {
    /// Id of the [`PieceSpec`] this instance was derived from
    pub id: usize,
    pub description: Arc<str>,
    pub nominal_width: f64,
    pub nominal_height: f64,
    /// `nominal_width + kerf`
    pub placement_width: f64,
    /// `nominal_height + kerf`
    pub placement_height: f64,
}

impl PieceInstance {
    pub fn new(spec: &PieceSpec, description: Arc<str>, kerf: f64) -> Self {
        PieceInstance {
            id: spec.id,
            description,
            nominal_width: spec.width,
            nominal_height: spec.height,
            placement_width: spec.width + kerf,
            placement_height: spec.height + kerf,
        }
    }

    /// Checks whether the padded footprint fits on an empty sheet.
    /// An instance failing this check can never be placed, regardless of how many sheets are opened.
    pub fn check_fits(&self, config: &PackingConfig) -> Result<()> {
        if self.placement_width > config.sheet_width {
            return Err(NestError::PieceExceedsSheet {
                id: self.id,
                axis: Axis::Width,
                size: self.placement_width,
                limit: config.sheet_width,
            });
        }
        if self.placement_height > config.sheet_height {
            return Err(NestError::PieceExceedsSheet {
                id: self.id,
                axis: Axis::Height,
                size: self.placement_height,
                limit: config.sheet_height,
            });
        }
        Ok(())
    }
}

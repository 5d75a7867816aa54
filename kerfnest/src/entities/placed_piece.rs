use std::sync::Arc;

use crate::entities::PieceInstance;
use crate::geometry::Rect;

/// Represents a [`PieceInstance`] that has been placed on a [`Sheet`](crate::entities::Sheet).
/// Only the nominal dimensions are stored, the kerf padding is implied by the [`PackingConfig`](crate::PackingConfig) of the run.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPiece {
    /// Id of the originating [`PieceSpec`](crate::entities::PieceSpec)
    pub id: usize,
    pub description: Arc<str>,
    /// 0-based index of the sheet the piece is placed on
    pub sheet_index: usize,
    /// Bottom-left corner of the padded footprint
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacedPiece {
    pub fn new(instance: &PieceInstance, sheet_index: usize, x: f64, y: f64) -> Self {
        PlacedPiece {
            id: instance.id,
            description: instance.description.clone(),
            sheet_index,
            x,
            y,
            width: instance.nominal_width,
            height: instance.nominal_height,
        }
    }

    /// The outline of the piece itself, as it should be drawn or cut.
    pub fn nominal_rect(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }

    /// The footprint reserved for the piece: its outline extended by `kerf` along both axes.
    pub fn bbox(&self, kerf: f64) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + (self.width + kerf),
            y_max: self.y + (self.height + kerf),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

use crate::config::PackingConfig;
use crate::entities::PlacedPiece;

/// A single stock sheet and the pieces placed on it, in placement order.
#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    /// 0-based position of the sheet in the cutting plan
    pub index: usize,
    placed_pieces: Vec<PlacedPiece>,
}

impl Sheet {
    pub fn new(index: usize, placed_pieces: Vec<PlacedPiece>) -> Self {
        debug_assert!(placed_pieces.iter().all(|pp| pp.sheet_index == index));
        Sheet {
            index,
            placed_pieces,
        }
    }

    pub fn placed_pieces(&self) -> &[PlacedPiece] {
        &self.placed_pieces
    }

    pub fn n_pieces(&self) -> usize {
        self.placed_pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_pieces.is_empty()
    }

    /// Sum of the nominal areas of all pieces on the sheet
    pub fn used_area(&self) -> f64 {
        self.placed_pieces.iter().map(|pp| pp.area()).sum()
    }

    /// Fraction of the sheet covered by the nominal outlines of its pieces
    pub fn density(&self, config: &PackingConfig) -> f64 {
        self.used_area() / config.sheet_area()
    }
}

use std::collections::BTreeMap;

use crate::config::PackingConfig;
use crate::entities::{PlacedPiece, Sheet};

/// The outcome of a nesting run: the ordered sheets and the configuration they were packed with.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub sheets: Vec<Sheet>,
    pub config: PackingConfig,
}

impl Solution {
    pub fn new(sheets: Vec<Sheet>, config: PackingConfig) -> Self {
        Solution { sheets, config }
    }

    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn n_pieces(&self) -> usize {
        self.sheets.iter().map(|s| s.n_pieces()).sum()
    }

    pub fn placed_pieces(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.sheets.iter().flat_map(|s| s.placed_pieces().iter())
    }

    /// Fraction of the total area of all used sheets covered by pieces.
    /// Zero for an empty solution.
    pub fn density(&self) -> f64 {
        match self.sheets.is_empty() {
            true => 0.0,
            false => {
                let used_area = self.sheets.iter().map(|s| s.used_area()).sum::<f64>();
                used_area / (self.config.sheet_area() * self.n_sheets() as f64)
            }
        }
    }

    /// Number of placed pieces per spec id
    pub fn piece_qtys(&self) -> BTreeMap<usize, usize> {
        self.placed_pieces().fold(BTreeMap::new(), |mut qtys, pp| {
            *qtys.entry(pp.id).or_insert(0) += 1;
            qtys
        })
    }
}

use log::debug;

use kerfnest::PackingConfig;
use kerfnest::entities::{PieceInstance, PlacedPiece, Sheet};

/// Position of the next placement on the sheet being filled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    /// Where the next piece in the current row starts
    pub x: f64,
    /// Bottom of the current row
    pub y: f64,
    /// Tallest padded height placed in the current row so far
    pub row_height: f64,
}

impl Cursor {
    /// Closes the current row and starts a new one on top of it.
    pub fn wrap_row(self) -> Cursor {
        Cursor {
            x: 0.0,
            y: self.y + self.row_height,
            row_height: 0.0,
        }
    }

    /// Moves past a piece just placed at the cursor.
    pub fn advance(self, instance: &PieceInstance) -> Cursor {
        Cursor {
            x: self.x + instance.placement_width,
            y: self.y,
            row_height: f64::max(self.row_height, instance.placement_height),
        }
    }
}

/// Accumulated state of a shelf packing run: all finalized sheets,
/// the pieces on the sheet currently being filled and the cursor on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShelfState {
    pub sheets: Vec<Sheet>,
    pub current: Vec<PlacedPiece>,
    pub cursor: Cursor,
}

impl ShelfState {
    /// Index of the sheet currently being filled
    pub fn sheet_index(&self) -> usize {
        self.sheets.len()
    }

    /// Places `instance` after everything placed so far and returns the resulting state.
    ///
    /// The instance must fit on an empty sheet (see [`PieceInstance::check_fits`]),
    /// otherwise it would be placed outside the sheet.
    pub fn place(mut self, instance: &PieceInstance, config: &PackingConfig) -> ShelfState {
        let mut cursor = self.cursor;

        if cursor.x + instance.placement_width > config.sheet_width {
            cursor = cursor.wrap_row();
            debug!(
                "[SHELF] row wrap on sheet {}, new row at y: {}",
                self.sheet_index(),
                cursor.y
            );
        }

        if cursor.y + instance.placement_height > config.sheet_height {
            self = self.close_sheet();
            cursor = Cursor::default();
            debug!("[SHELF] opening sheet {}", self.sheet_index());
        }

        let placed = PlacedPiece::new(instance, self.sheet_index(), cursor.x, cursor.y);
        debug!(
            "[SHELF] placing piece {} on sheet {} at ({}, {})",
            placed.id, placed.sheet_index, placed.x, placed.y
        );
        self.current.push(placed);
        self.cursor = cursor.advance(instance);
        self
    }

    /// Finalizes the sheet currently being filled, if it holds any pieces, and returns all sheets.
    pub fn finish(self) -> Vec<Sheet> {
        self.close_sheet().sheets
    }

    fn close_sheet(mut self) -> ShelfState {
        if !self.current.is_empty() {
            let index = self.sheet_index();
            let pieces = std::mem::take(&mut self.current);
            self.sheets.push(Sheet::new(index, pieces));
        }
        self.cursor = Cursor::default();
        self
    }
}

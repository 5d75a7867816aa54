use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Errors that abort a nesting run before any sheet is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NestError {
    /// A piece specification with a non-positive (or non-finite) dimension or a zero quantity.
    #[error("invalid piece spec {id}: {reason}")]
    InvalidPieceSpec { id: usize, reason: String },

    /// A piece whose padded footprint can never fit on a sheet, no matter how many sheets are opened.
    #[error("piece {id} exceeds the sheet {axis}: padded size {size} > {limit}")]
    PieceExceedsSheet {
        id: usize,
        axis: Axis,
        size: f64,
        limit: f64,
    },

    #[error("invalid packing config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NestError>;

/// Dimension of a sheet or piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

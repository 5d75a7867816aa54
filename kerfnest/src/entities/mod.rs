mod piece;
mod placed_piece;
mod sheet;
mod solution;

#[doc(inline)]
pub use piece::PieceSpec;

#[doc(inline)]
pub use piece::PieceInstance;

#[doc(inline)]
pub use placed_piece::PlacedPiece;

#[doc(inline)]
pub use sheet::Sheet;

#[doc(inline)]
pub use solution::Solution;

//! Layout model for nesting rectangular pieces onto a sequence of fixed-size sheets,
//! with a kerf allowance reserved between adjacent pieces.
//!
//! The crate covers everything up to (but excluding) the placement heuristic:
//! piece specifications, their expansion into individual instances, the placed
//! output structures consumed by renderers and the assertions used to verify them.

/// Entities that make up a cutting plan: piece specifications, instances, placed pieces, sheets and solutions.
pub mod entities;

/// Geometric primitives.
pub mod geometry;

/// Helper functions and correctness checks.
pub mod util;

mod config;
mod error;
mod expand;

#[doc(inline)]
pub use config::PackingConfig;

#[doc(inline)]
pub use error::Axis;

#[doc(inline)]
pub use error::NestError;

#[doc(inline)]
pub use error::Result;

#[doc(inline)]
pub use expand::expand_pieces;

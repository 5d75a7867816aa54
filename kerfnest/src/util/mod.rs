/// Set of functions used throughout to assure the correctness of cutting plans.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;

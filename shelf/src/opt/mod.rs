/// The packer: pre-checks, the placement fold and run bookkeeping.
pub mod shelf_packer;

/// State threaded through the placement fold.
pub mod shelf_state;

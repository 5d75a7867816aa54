use std::time::Instant;

use log::{info, warn};
use thousands::Separable;

use kerfnest::entities::{PieceInstance, PieceSpec, Sheet, Solution};
use kerfnest::util::assertions;
use kerfnest::{PackingConfig, Result, expand_pieces};

use crate::config::ShelfConfig;
use crate::opt::shelf_state::ShelfState;

/// Decreasing-height shelf packer.
///
/// Pieces are expanded, sorted tallest first and laid out left to right in rows ("shelves").
/// A row is closed when the next piece does not fit in its remaining width,
/// a sheet is closed when the next row would not fit in its remaining height.
/// Single pass: rows are never reordered and leftover space is never backfilled.
pub struct ShelfPacker {
    pub config: ShelfConfig,
}

impl ShelfPacker {
    pub fn new(config: ShelfConfig) -> Self {
        Self { config }
    }

    /// Expands `specs` and packs all resulting pieces.
    /// Fails without producing any sheet if a spec is invalid or a piece can never fit on a sheet.
    pub fn solve(&self, specs: &[PieceSpec]) -> Result<Solution> {
        let start = Instant::now();
        let config = self.config.packing;
        config.validate()?;

        let instances = expand_pieces(specs, config.kerf)?;
        if instances.is_empty() {
            warn!("[SHELF] no pieces to pack");
        }

        let sheets = pack(&instances, &config)?;
        let solution = Solution::new(sheets, config);

        match self.config.validate_layouts {
            true => assert!(assertions::solution_is_valid(&solution)),
            false => debug_assert!(assertions::solution_is_valid(&solution)),
        }
        debug_assert!(assertions::solution_covers_demand(&solution, specs));

        info!(
            "[SHELF] packing finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[SHELF] {} pieces on {} sheets with a density of {:.3}%",
            solution.n_pieces().separate_with_commas(),
            solution.n_sheets(),
            solution.density() * 100.0
        );

        Ok(solution)
    }
}

/// Packs already expanded and sorted `instances` onto sheets of the given config.
///
/// Every instance is checked against an empty sheet before anything is placed,
/// so a piece which can never fit aborts the run instead of opening sheets endlessly.
pub fn pack(instances: &[PieceInstance], config: &PackingConfig) -> Result<Vec<Sheet>> {
    instances.iter().try_for_each(|pi| pi.check_fits(config))?;

    let sheets = instances
        .iter()
        .fold(ShelfState::default(), |state, pi| state.place(pi, config))
        .finish();

    debug_assert!(assertions::sheets_indexed_contiguously(&sheets));
    Ok(sheets)
}

use itertools::Itertools;
use log::error;

use crate::config::PackingConfig;
use crate::entities::{PieceInstance, PieceSpec, Sheet, Solution};
use crate::util::FPA;

//Various checks to verify correctness of cutting plans
//Used in debug_assert!() blocks and tests

pub fn instances_sorted_by_height(instances: &[PieceInstance]) -> bool {
    instances
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.placement_height >= b.placement_height)
}

/// Checks that every padded footprint on the sheet lies within the sheet boundaries.
pub fn sheet_pieces_contained(sheet: &Sheet, config: &PackingConfig) -> bool {
    let sheet_rect = config.sheet_rect();
    for pp in sheet.placed_pieces() {
        if !sheet_rect.almost_contains(&pp.bbox(config.kerf)) {
            error!(
                "piece {} on sheet {} at ({}, {}) exceeds the sheet boundaries",
                pp.id, sheet.index, pp.x, pp.y
            );
            return false;
        }
    }
    true
}

/// Checks that no two padded footprints on the sheet share a non-zero area.
pub fn sheet_is_overlap_free(sheet: &Sheet, kerf: f64) -> bool {
    for (p1, p2) in sheet.placed_pieces().iter().tuple_combinations() {
        if p1.bbox(kerf).almost_overlaps(&p2.bbox(kerf)) {
            error!(
                "pieces {} at ({}, {}) and {} at ({}, {}) overlap on sheet {}",
                p1.id, p1.x, p1.y, p2.id, p2.x, p2.y, sheet.index
            );
            return false;
        }
    }
    true
}

/// Checks that sheets are numbered 0, 1, 2, ... without gaps, that none of them is empty
/// and that every piece carries the index of the sheet it is on.
pub fn sheets_indexed_contiguously(sheets: &[Sheet]) -> bool {
    sheets.iter().enumerate().all(|(i, sheet)| {
        sheet.index == i
            && !sheet.is_empty()
            && sheet.placed_pieces().iter().all(|pp| pp.sheet_index == i)
    })
}

/// Checks that exactly `quantity` pieces of every spec were placed, and nothing else.
pub fn solution_covers_demand(solution: &Solution, specs: &[PieceSpec]) -> bool {
    let placed = solution.piece_qtys();
    let demanded = specs
        .iter()
        .map(|spec| (spec.id, spec.quantity))
        .into_grouping_map()
        .sum();

    let matches = placed.len() == demanded.len()
        && demanded
            .iter()
            .all(|(id, qty)| placed.get(id).copied() == Some(*qty));
    if !matches {
        error!("placed quantities {placed:?} do not match demanded quantities {demanded:?}");
    }
    matches
}

/// Checks the geometric invariants of a solution: containment, non-overlap and sheet numbering.
pub fn solution_is_valid(solution: &Solution) -> bool {
    let config = &solution.config;
    sheets_indexed_contiguously(&solution.sheets)
        && solution.sheets.iter().all(|sheet| {
            sheet_pieces_contained(sheet, config) && sheet_is_overlap_free(sheet, config.kerf)
        })
}

/// Checks that the densities reported by the solution are sane fractions.
pub fn solution_density_in_range(solution: &Solution) -> bool {
    let in_range = |d: f64| FPA(d) >= FPA(0.0) && FPA(d) <= FPA(1.0);
    in_range(solution.density())
        && solution
            .sheets
            .iter()
            .all(|s| in_range(s.density(&solution.config)))
}

use std::cmp::Reverse;
use std::sync::Arc;

use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::config::validate_kerf;
use crate::entities::{PieceInstance, PieceSpec};
use crate::error::Result;
use crate::util::assertions;

/// Expands every [`PieceSpec`] into `quantity` individual [`PieceInstance`]s padded by `kerf`.
///
/// The instances are sorted by padded height, tallest first.
/// The sort is stable: instances of equal height keep the order in which their specs were given.
///
/// All specs are validated before anything is expanded, a single invalid spec fails the whole batch.
pub fn expand_pieces(specs: &[PieceSpec], kerf: f64) -> Result<Vec<PieceInstance>> {
    validate_kerf(kerf)?;
    specs.iter().try_for_each(|spec| spec.validate())?;

    let mut instances = specs
        .iter()
        .flat_map(|spec| {
            let description: Arc<str> = Arc::from(spec.description.as_str());
            (0..spec.quantity).map(move |_| PieceInstance::new(spec, description.clone(), kerf))
        })
        .collect_vec();

    instances.sort_by_key(|pi| Reverse(OrderedFloat(pi.placement_height)));

    debug_assert!(assertions::instances_sorted_by_height(&instances));
    debug!(
        "[EXPAND] {} specs expanded into {} piece instances (kerf: {kerf})",
        specs.len(),
        instances.len()
    );

    Ok(instances)
}

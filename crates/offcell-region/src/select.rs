//! Size-based component selection
//!
//! Speckle removal for binarized text: TEXT components with fewer pixels
//! than a minimum size are reclassified as BACKGROUND. Thin strokes survive
//! because they are connected along their length; isolated noise pixels do
//! not.

use crate::RegionResult;
use crate::conncomp::{Connectivity, label_components};
use offcell_core::BinaryMap;

/// Remove TEXT components smaller than `min_size` pixels.
///
/// Returns a new map; the input is untouched. A `min_size` of 0 or 1
/// keeps every component.
pub fn remove_small_components(
    map: &BinaryMap,
    min_size: usize,
    connectivity: Connectivity,
) -> RegionResult<BinaryMap> {
    if min_size <= 1 {
        return Ok(map.clone());
    }

    let labeling = label_components(map, connectivity)?;
    let keep: Vec<bool> = labeling
        .components
        .iter()
        .map(|c| c.pixel_count >= min_size)
        .collect();

    let mut out = BinaryMap::new(map.width(), map.height())?;
    let out_data = out.data_mut();
    for (idx, label) in labeling.labels.iter().enumerate() {
        if let Some(l) = label {
            out_data[idx] = keep[*l as usize];
        }
    }

    Ok(out)
}

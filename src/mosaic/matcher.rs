//! Nearest-color candidate selection
//!
//! A plain linear scan over the candidate colors. Targets and libraries are
//! both small (tens to low thousands), so no index structure is warranted.

use crate::color::{Rgb, distance};
use crate::io::configuration::MATCH_THRESHOLD;
use crate::io::error::{MosaicError, Result};
use crate::mosaic::pipeline::CancelToken;

/// Index of the candidate color closest to the target
///
/// The running minimum starts at `MATCH_THRESHOLD` rather than infinity, and
/// a candidate only takes the lead when its distance is strictly smaller, so
/// exact ties keep the earliest-seen candidate. If no candidate beats the
/// threshold the default index 0 is returned without ever being confirmed as
/// the minimum; with 8-bit colors the metric tops out near 765, so the gate
/// cannot reject in practice. Both the constant and the strict comparison are
/// load-bearing for output stability.
pub fn find_closest(target: Rgb, candidate_colors: &[Rgb]) -> usize {
    let mut lowest_distance = MATCH_THRESHOLD;
    let mut closest = 0;

    for (index, &candidate) in candidate_colors.iter().enumerate() {
        let d = distance(target, candidate);
        if d < lowest_distance {
            lowest_distance = d;
            closest = index;
        }
    }

    closest
}

/// Select one candidate index per target color, in target order
///
/// Cancellation is checked once per target so long matching runs over large
/// libraries stop promptly.
///
/// # Errors
///
/// Returns `Cancelled` if the token trips mid-scan.
pub fn select_tiles(
    targets: &[Rgb],
    candidate_colors: &[Rgb],
    cancel: &CancelToken,
) -> Result<Vec<usize>> {
    let mut selections = Vec::with_capacity(targets.len());
    for &target in targets {
        if cancel.is_cancelled() {
            return Err(MosaicError::Cancelled { stage: "matching" });
        }
        selections.push(find_closest(target, candidate_colors));
    }
    Ok(selections)
}

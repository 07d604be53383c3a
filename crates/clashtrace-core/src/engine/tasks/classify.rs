use crate::core::models::clash::{Clash, ClashCategory};
use crate::core::models::transition::{FrameResult, Transition};

/// Selects the representative transition frame for one clash from its full
/// ordered per-frame distance series.
///
/// The scan direction is category-sensitive:
///
/// - **TN**: scan backward from the last frame and return the last frame whose
///   distance is still below the threshold — the clash's final moment of
///   existence before it permanently disappears.
/// - **CT**: scan forward from the first frame and return the first frame whose
///   distance exceeds the threshold — the loss of conservation.
/// - **CN**: the same forward scan as CT. The two categories are structurally
///   identical here on purpose; the distinction lives entirely in the tag the
///   clash arrived with and must be preserved end-to-end.
///
/// Returns `None` when no frame qualifies in the sampled range (for example
/// when the sampling frequency differs from the one used at clash-detection
/// time, or the transition lies outside the covered range). That is a
/// recoverable miss, not an error.
pub fn classify(clash: &Clash, series: &[FrameResult], threshold: f64) -> Option<Transition> {
    let chosen = match clash.category {
        ClashCategory::TransitoryToNonexistent => {
            series.iter().rev().find(|fr| fr.distance < threshold)
        }
        ClashCategory::ConservedToTransitory => {
            series.iter().find(|fr| fr.distance > threshold)
        }
        ClashCategory::ConservedToNonexistent => {
            series.iter().find(|fr| fr.distance > threshold)
        }
    }?;

    Some(Transition {
        clash: *clash,
        frame: chosen.frame,
        atoms: chosen.atoms,
        series: series.to_vec(),
    })
}

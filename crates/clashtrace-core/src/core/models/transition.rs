use super::clash::Clash;
use super::frame::Frame;

/// The minimal inter-residue distance found for one clash in one frame, together
/// with the atom pair that realized it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameResult {
    pub frame: Frame,
    /// Minimal distance between any atom of the first residue and any atom of the
    /// second, in Angstroms.
    pub distance: f64,
    /// Serial numbers of the winning atom pair, in (res1 atom, res2 atom) order.
    pub atoms: (usize, usize),
}

impl FrameResult {
    pub fn new(frame: Frame, distance: f64, atoms: (usize, usize)) -> Self {
        Self {
            frame,
            distance,
            atoms,
        }
    }
}

/// The classified transition of one clash: the single frame selected as
/// representative of its state change, plus the full per-frame distance series
/// the selection was made from.
///
/// Produced at most once per clash and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub clash: Clash,
    /// The frame chosen by the category's scan rule.
    pub frame: Frame,
    /// The winning atom pair in the chosen frame.
    pub atoms: (usize, usize),
    /// The full ordered per-frame series, in ascending sampled order.
    pub series: Vec<FrameResult>,
}

impl Transition {
    /// The largest minimal distance reached anywhere in the sampled series.
    pub fn max_distance(&self) -> f64 {
        self.series
            .iter()
            .map(|fr| fr.distance)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::clash::ClashCategory;

    fn frame_result(id: usize, distance: f64) -> FrameResult {
        FrameResult::new(Frame::new(id, id as f64 * 0.1), distance, (1, 2))
    }

    #[test]
    fn max_distance_scans_the_whole_series() {
        let transition = Transition {
            clash: Clash::new(1, 2, ClashCategory::ConservedToTransitory),
            frame: Frame::new(0, 0.0),
            atoms: (1, 2),
            series: vec![frame_result(0, 3.2), frame_result(1, 8.9), frame_result(2, 4.1)],
        };
        assert_eq!(transition.max_distance(), 8.9);
    }
}

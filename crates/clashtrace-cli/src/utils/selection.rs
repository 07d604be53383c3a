use clashtrace::core::models::frame::Frame;

/// Selects the frames whose RMSD lies in `[min_rmsd, max_rmsd]`, then keeps
/// every `freq`-th of them. The trajectory order of the input is preserved.
pub fn select_frames(
    frames: &[Frame],
    min_rmsd: f64,
    max_rmsd: Option<f64>,
    freq: usize,
) -> Vec<Frame> {
    frames
        .iter()
        .filter(|f| f.rmsd >= min_rmsd && max_rmsd.map_or(true, |max| f.rmsd <= max))
        .copied()
        .step_by(freq.max(1))
        .collect()
}

/// Keeps every `freq`-th frame of the whole trajectory, ignoring RMSD bounds.
pub fn every_nth(frames: &[Frame], freq: usize) -> Vec<Frame> {
    frames.iter().copied().step_by(freq.max(1)).collect()
}

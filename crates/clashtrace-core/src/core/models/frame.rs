/// One sampled trajectory snapshot.
///
/// Frames form a fixed, externally-selected ascending sequence for the run. The
/// RMSD is an externally-supplied coordinate used only for sorting and plotting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The frame number within the trajectory; also names the snapshot file.
    pub id: usize,
    /// Root-mean-square deviation of this frame, in Angstroms.
    pub rmsd: f64,
}

impl Frame {
    pub fn new(id: usize, rmsd: f64) -> Self {
        Self { id, rmsd }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frame_stores_fields() {
        let frame = Frame::new(120, 1.375);
        assert_eq!(frame.id, 120);
        assert_eq!(frame.rmsd, 1.375);
    }
}

use crate::core::io::pdb::PdbError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of the follow run. Any of these aborts the whole run: a partial
/// transition list could silently misrepresent the dataset.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open frame snapshot '{path}': {source}", path = path.display())]
    MissingFrameFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse frame snapshot '{path}': {source}", path = path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Residue {residue_id} has no atoms in frame {frame_id}")]
    DegenerateResidue { residue_id: isize, frame_id: usize },
}

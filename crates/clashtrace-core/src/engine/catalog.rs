use crate::core::io::pdb::{self, PdbError};
use crate::core::models::atom::Atom;
use crate::core::models::frame::Frame;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, instrument};

/// The preloaded coordinate data for every selected frame.
///
/// Built single-threaded before dispatch; immutable and shared read-only across
/// workers afterward, so the per-clash scan hot path performs no I/O and needs
/// no locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameCatalog {
    frames: Vec<Frame>,
    data: HashMap<usize, HashMap<isize, Vec<Atom>>>,
    residue_names: HashMap<isize, String>,
}

impl FrameCatalog {
    pub fn new(
        frames: Vec<Frame>,
        data: HashMap<usize, HashMap<isize, Vec<Atom>>>,
        residue_names: HashMap<isize, String>,
    ) -> Self {
        Self {
            frames,
            data,
            residue_names,
        }
    }

    /// Loads the catalog for an externally-selected ordered frame sequence.
    ///
    /// Each frame's snapshot is read from `<frames_dir>/<frameID>.pdb`. A missing
    /// or unreadable snapshot aborts the run; there is no partial tolerance.
    /// Residue names are bound on first sighting across frames and never rebound.
    #[instrument(skip_all, name = "frame_catalog_load", fields(frames = frames.len()))]
    pub fn load(
        frames_dir: &Path,
        frames: &[Frame],
        reporter: &ProgressReporter,
    ) -> Result<Self, EngineError> {
        info!(dir = %frames_dir.display(), "Reading frame data.");
        reporter.report(Progress::Message("Reading frame data...".to_string()));
        reporter.report(Progress::TaskStart {
            total_steps: frames.len() as u64,
        });

        let mut data = HashMap::with_capacity(frames.len());
        let mut residue_names: HashMap<isize, String> = HashMap::new();

        for frame in frames {
            let path = frames_dir.join(format!("{}.pdb", frame.id));
            let file = File::open(&path).map_err(|source| EngineError::MissingFrameFile {
                path: path.clone(),
                source,
            })?;
            let snapshot = pdb::read_snapshot(&mut BufReader::new(file)).map_err(|source| {
                match source {
                    PdbError::Io(source) => EngineError::MissingFrameFile {
                        path: path.clone(),
                        source,
                    },
                    source => EngineError::Snapshot {
                        path: path.clone(),
                        source,
                    },
                }
            })?;

            for (residue_id, name) in snapshot.residue_names {
                residue_names.entry(residue_id).or_insert(name);
            }
            data.insert(frame.id, snapshot.residues);
            reporter.report(Progress::TaskIncrement);
        }

        reporter.report(Progress::TaskFinish);
        info!(
            frames = frames.len(),
            residues = residue_names.len(),
            "Frame data loaded."
        );

        Ok(Self::new(frames.to_vec(), data, residue_names))
    }

    /// The selected frames in ascending sampled order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The residue→atoms map for one frame.
    pub fn residues(&self, frame_id: usize) -> Option<&HashMap<isize, Vec<Atom>>> {
        self.data.get(&frame_id)
    }

    /// The three-letter name bound to a residue on its first sighting.
    pub fn residue_name(&self, residue_id: isize) -> Option<&str> {
        self.residue_names.get(&residue_id).map(String::as_str)
    }

    pub fn residue_names(&self) -> &HashMap<isize, String> {
        &self.residue_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_frame(dir: &Path, frame_id: usize, lines: &[String]) {
        let mut file = File::create(dir.join(format!("{}.pdb", frame_id))).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
    }

    fn atom_line(serial: usize, res_name: &str, res_id: isize, x: f64) -> String {
        format!(
            "ATOM  {:>5} CA   {:<3}{:>6}    {:>8.3}{:>8.3}{:>8.3}",
            serial, res_name, res_id, x, 0.0, 0.0
        )
    }

    #[test]
    fn load_builds_per_frame_residue_maps() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(
            dir.path(),
            0,
            &[atom_line(1, "ALA", 1, 0.0), atom_line(2, "GLY", 2, 5.0)],
        );
        write_frame(dir.path(), 10, &[atom_line(1, "ALA", 1, 1.0)]);

        let frames = vec![Frame::new(0, 0.0), Frame::new(10, 1.0)];
        let catalog =
            FrameCatalog::load(dir.path(), &frames, &ProgressReporter::new()).unwrap();

        assert_eq!(catalog.frames(), frames.as_slice());
        assert_eq!(catalog.residues(0).unwrap().len(), 2);
        assert_eq!(catalog.residues(10).unwrap().len(), 1);
        assert_eq!(catalog.residue_name(2), Some("GLY"));
    }

    #[test]
    fn residue_names_bind_on_first_sighting() {
        let dir = tempfile::tempdir().unwrap();
        // Residue 1 is named ALA in the first frame and (spuriously) GLY later;
        // the first sighting wins.
        write_frame(dir.path(), 0, &[atom_line(1, "ALA", 1, 0.0)]);
        write_frame(dir.path(), 1, &[atom_line(1, "GLY", 1, 0.0)]);

        let frames = vec![Frame::new(0, 0.0), Frame::new(1, 0.1)];
        let catalog =
            FrameCatalog::load(dir.path(), &frames, &ProgressReporter::new()).unwrap();
        assert_eq!(catalog.residue_name(1), Some("ALA"));
    }

    #[test]
    fn missing_frame_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), 0, &[atom_line(1, "ALA", 1, 0.0)]);

        let frames = vec![Frame::new(0, 0.0), Frame::new(99, 9.9)];
        let err = FrameCatalog::load(dir.path(), &frames, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::MissingFrameFile { .. }));
    }

    #[test]
    fn malformed_snapshot_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_frame(dir.path(), 0, &["ATOM      1 CA   ALA     1".to_string()]);

        let frames = vec![Frame::new(0, 0.0)];
        let err = FrameCatalog::load(dir.path(), &frames, &ProgressReporter::new()).unwrap_err();
        assert!(matches!(err, EngineError::Snapshot { .. }));
    }
}

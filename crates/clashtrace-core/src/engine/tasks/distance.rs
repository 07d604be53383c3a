use crate::core::models::atom::Atom;
use crate::core::models::frame::Frame;
use crate::core::models::transition::FrameResult;
use crate::engine::error::EngineError;
use std::collections::HashMap;

/// Computes the minimal Euclidean distance between any atom of `res1` and any
/// atom of `res2` within one frame, along with the atom pair that realizes it.
///
/// Ties resolve to the first-encountered pair; the loader's deterministic atom
/// ordering makes the winner reproducible. Either residue being absent or empty
/// in the frame is an invariant violation, never a silent skip.
pub fn min_residue_distance(
    residues: &HashMap<isize, Vec<Atom>>,
    res1: isize,
    res2: isize,
    frame: Frame,
) -> Result<FrameResult, EngineError> {
    let atoms_of = |res: isize| -> Result<&[Atom], EngineError> {
        match residues.get(&res) {
            Some(atoms) if !atoms.is_empty() => Ok(atoms),
            _ => Err(EngineError::DegenerateResidue {
                residue_id: res,
                frame_id: frame.id,
            }),
        }
    };
    let atoms1 = atoms_of(res1)?;
    let atoms2 = atoms_of(res2)?;

    let mut min_distance = f64::INFINITY;
    let mut min_atoms = (atoms1[0].id, atoms2[0].id);
    for a1 in atoms1 {
        for a2 in atoms2 {
            let distance = (a1.position - a2.position).norm();
            if distance < min_distance {
                min_distance = distance;
                min_atoms = (a1.id, a2.id);
            }
        }
    }

    Ok(FrameResult::new(frame, min_distance, min_atoms))
}

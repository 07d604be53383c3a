use nalgebra::Point3;

/// Represents a single atom within one frame snapshot.
///
/// Atoms are scoped to a (frame, residue) pair: the same physical atom appears as
/// a fresh `Atom` value in every loaded frame, carrying that frame's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// The atom serial number from the snapshot file.
    pub id: usize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(id: usize, position: Point3<f64>) -> Self {
        Self { id, position }
    }
}

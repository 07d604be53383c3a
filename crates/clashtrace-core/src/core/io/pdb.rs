use crate::core::models::atom::Atom;
use nalgebra::Point3;
use phf::phf_set;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Residue names retained when loading a snapshot. Water, ions, and other
/// heteroatom records are not part of the clash analysis.
static RECOGNIZED_RESIDUES: phf::Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "ILE", "LEU",
    "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    // Histidine and its protonation variants as named by common MD packages.
    "HIS", "HID", "HIE", "HIP", "HSD", "HSE", "HSP",
};

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("ATOM record is too short to carry three coordinate fields")]
    LineTooShort,
    #[error("Invalid integer format in field {field} (value: '{value}')")]
    InvalidInt {
        field: &'static str,
        value: String,
    },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("ATOM record is missing whitespace-delimited ID fields")]
    MissingFields,
}

/// The retained contents of one frame snapshot: atoms grouped by residue in
/// file encounter order, plus the residue names seen in this file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub residues: HashMap<isize, Vec<Atom>>,
    pub residue_names: HashMap<isize, String>,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reads one frame snapshot.
///
/// Only lines beginning with the 4-character `ATOM` marker whose residue name
/// (columns 18-20) is in the recognized-residue set are retained. The atom and
/// residue IDs are the 2nd and 5th whitespace-delimited fields; the three
/// coordinates occupy fixed 8-character columns starting at offset 30.
pub fn read_snapshot(reader: &mut impl BufRead) -> Result<Snapshot, PdbError> {
    let mut snapshot = Snapshot::default();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        if !line.starts_with("ATOM") {
            continue;
        }
        let residue_name = slice_and_trim(&line, 17, 20);
        if !RECOGNIZED_RESIDUES.contains(residue_name) {
            continue;
        }
        if line.len() < 54 {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::LineTooShort,
            });
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 5 {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::MissingFields,
            });
        }
        let atom_id: usize = fields[1].parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidInt {
                field: "atom serial",
                value: fields[1].to_string(),
            },
        })?;
        let residue_id: isize = fields[4].parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidInt {
                field: "residue sequence number",
                value: fields[4].to_string(),
            },
        })?;

        let mut coords = [0.0f64; 3];
        for (axis, value) in coords.iter_mut().enumerate() {
            let start = 30 + axis * 8;
            let end = start + 8;
            let text = slice_and_trim(&line, start, end);
            *value = text.parse().map_err(|_| PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::InvalidFloat {
                    columns: format!("{}-{}", start + 1, end),
                    value: text.to_string(),
                },
            })?;
        }

        snapshot
            .residue_names
            .entry(residue_id)
            .or_insert_with(|| residue_name.to_string());
        snapshot
            .residues
            .entry(residue_id)
            .or_default()
            .push(Atom::new(
                atom_id,
                Point3::new(coords[0], coords[1], coords[2]),
            ));
    }

    Ok(snapshot)
}

pub fn read_snapshot_from_path<P: AsRef<Path>>(path: P) -> Result<Snapshot, PdbError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_snapshot(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn atom_line(serial: usize, name: &str, res_name: &str, res_id: isize, coords: [f64; 3]) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:<3}{:>6}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00",
            serial, name, res_name, res_id, coords[0], coords[1], coords[2]
        )
    }

    #[test]
    fn atoms_are_grouped_by_residue_in_encounter_order() {
        let input = [
            atom_line(1, "N", "ALA", 1, [1.0, 2.0, 3.0]),
            atom_line(2, "CA", "ALA", 1, [1.5, 2.5, 3.5]),
            atom_line(3, "N", "GLY", 2, [9.0, 9.0, 9.0]),
        ]
        .join("\n");
        let snapshot = read_snapshot(&mut Cursor::new(input)).unwrap();

        let ala = &snapshot.residues[&1];
        assert_eq!(ala.len(), 2);
        assert_eq!(ala[0].id, 1);
        assert_eq!(ala[1].id, 2);
        assert_eq!(ala[0].position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(snapshot.residues[&2].len(), 1);
    }

    #[test]
    fn residue_names_are_recorded() {
        let input = atom_line(1, "CA", "TRP", 12, [0.0, 0.0, 0.0]);
        let snapshot = read_snapshot(&mut Cursor::new(input)).unwrap();
        assert_eq!(snapshot.residue_names[&12], "TRP");
    }

    #[test]
    fn unrecognized_residues_are_filtered() {
        let input = [
            atom_line(1, "O", "HOH", 500, [0.0, 0.0, 0.0]),
            atom_line(2, "NA", "SOD", 501, [1.0, 1.0, 1.0]),
            atom_line(3, "CA", "LEU", 7, [2.0, 2.0, 2.0]),
        ]
        .join("\n");
        let snapshot = read_snapshot(&mut Cursor::new(input)).unwrap();
        assert_eq!(snapshot.residues.len(), 1);
        assert!(snapshot.residues.contains_key(&7));
    }

    #[test]
    fn non_atom_records_are_skipped() {
        let input = "REMARK generated\nTER\nEND\n";
        let snapshot = read_snapshot(&mut Cursor::new(input)).unwrap();
        assert!(snapshot.residues.is_empty());
    }

    #[test]
    fn short_atom_record_is_fatal() {
        let input = "ATOM      1 CA   ALA     1";
        let err = read_snapshot(&mut Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::LineTooShort,
            }
        ));
    }

    #[test]
    fn invalid_coordinate_is_fatal() {
        let mut line = atom_line(1, "CA", "ALA", 1, [1.0, 2.0, 3.0]);
        line.replace_range(30..38, "   xx.xx");
        let err = read_snapshot(&mut Cursor::new(line)).unwrap_err();
        assert!(matches!(
            err,
            PdbError::Parse {
                kind: PdbParseErrorKind::InvalidFloat { .. },
                ..
            }
        ));
    }

    #[test]
    fn coordinates_come_from_fixed_columns() {
        // Coordinates that run together without separating whitespace still parse,
        // because the reader slices fixed 8-character columns instead of splitting.
        let line = "ATOM      9 CA   VAL    33     110.500-112.250 100.125";
        let snapshot = read_snapshot(&mut Cursor::new(line)).unwrap();
        let atom = snapshot.residues[&33][0];
        assert_eq!(atom.position, Point3::new(110.5, -112.25, 100.125));
    }
}

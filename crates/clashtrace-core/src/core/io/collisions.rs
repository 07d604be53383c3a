use crate::core::models::clash::{Clash, ClashCategory};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollisionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: CollisionParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollisionParseErrorKind {
    #[error("Collision record requires a category marker and two residue IDs")]
    MissingFields,
    #[error("Invalid residue ID (value: '{value}')")]
    InvalidResidueId { value: String },
}

/// The deduplicated, canonically sorted collision lists, one per category.
///
/// Each list is sorted by `(res1, res2)` ascending; the combined view concatenates
/// the lists in TN, CT, CN order. Built once at startup and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClashRegistry {
    transitory_to_nonexistent: Vec<Clash>,
    conserved_to_transitory: Vec<Clash>,
    conserved_to_nonexistent: Vec<Clash>,
}

impl ClashRegistry {
    /// Parses a collision list.
    ///
    /// Each non-blank line is a whitespace-delimited record: a category marker
    /// token followed by two integer residue IDs. Records whose marker is not a
    /// recognized category are silently skipped; records missing fields or
    /// carrying non-integer IDs are fatal.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, CollisionError> {
        let mut transitory_to_nonexistent = BTreeSet::new();
        let mut conserved_to_transitory = BTreeSet::new();
        let mut conserved_to_nonexistent = BTreeSet::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let marker = tokens.next().ok_or(CollisionError::Parse {
                line: line_num,
                kind: CollisionParseErrorKind::MissingFields,
            })?;

            let mut residue_id = || -> Result<isize, CollisionError> {
                let token = tokens.next().ok_or(CollisionError::Parse {
                    line: line_num,
                    kind: CollisionParseErrorKind::MissingFields,
                })?;
                token.parse().map_err(|_| CollisionError::Parse {
                    line: line_num,
                    kind: CollisionParseErrorKind::InvalidResidueId {
                        value: token.to_string(),
                    },
                })
            };
            let a = residue_id()?;
            let b = residue_id()?;

            let Ok(category) = ClashCategory::from_str(marker) else {
                continue;
            };
            match category {
                ClashCategory::TransitoryToNonexistent => {
                    transitory_to_nonexistent.insert((a.min(b), a.max(b)));
                }
                ClashCategory::ConservedToTransitory => {
                    conserved_to_transitory.insert((a.min(b), a.max(b)));
                }
                ClashCategory::ConservedToNonexistent => {
                    conserved_to_nonexistent.insert((a.min(b), a.max(b)));
                }
            }
        }

        let project = |pairs: BTreeSet<(isize, isize)>, category: ClashCategory| {
            pairs
                .into_iter()
                .map(|(a, b)| Clash::new(a, b, category))
                .collect()
        };

        Ok(Self {
            transitory_to_nonexistent: project(
                transitory_to_nonexistent,
                ClashCategory::TransitoryToNonexistent,
            ),
            conserved_to_transitory: project(
                conserved_to_transitory,
                ClashCategory::ConservedToTransitory,
            ),
            conserved_to_nonexistent: project(
                conserved_to_nonexistent,
                ClashCategory::ConservedToNonexistent,
            ),
        })
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CollisionError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    pub fn transitory_to_nonexistent(&self) -> &[Clash] {
        &self.transitory_to_nonexistent
    }

    pub fn conserved_to_transitory(&self) -> &[Clash] {
        &self.conserved_to_transitory
    }

    pub fn conserved_to_nonexistent(&self) -> &[Clash] {
        &self.conserved_to_nonexistent
    }

    pub fn len(&self) -> usize {
        self.transitory_to_nonexistent.len()
            + self.conserved_to_transitory.len()
            + self.conserved_to_nonexistent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All clashes concatenated in TN, CT, CN order. Each clash carries its own
    /// category tag, so downstream consumers never rely on positional ranges.
    pub fn clashes(&self) -> Vec<Clash> {
        self.transitory_to_nonexistent
            .iter()
            .chain(&self.conserved_to_transitory)
            .chain(&self.conserved_to_nonexistent)
            .copied()
            .collect()
    }
}

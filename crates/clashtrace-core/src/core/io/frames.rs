use crate::core::models::frame::Frame;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameIndexError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: FrameIndexParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameIndexParseErrorKind {
    #[error("Frame index record requires a frame ID and an RMSD value")]
    MissingFields,
    #[error("Invalid frame ID (value: '{value}')")]
    InvalidFrameId { value: String },
    #[error("Invalid RMSD value (value: '{value}')")]
    InvalidRmsd { value: String },
}

/// Reads the two-column frame index: one `frameID RMSD` record per line, in
/// trajectory order.
pub fn read_frame_index(reader: &mut impl BufRead) -> Result<Vec<Frame>, FrameIndexError> {
    let mut frames = Vec::new();
    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let id_token = tokens.next().ok_or(FrameIndexError::Parse {
            line: line_num,
            kind: FrameIndexParseErrorKind::MissingFields,
        })?;
        let rmsd_token = tokens.next().ok_or(FrameIndexError::Parse {
            line: line_num,
            kind: FrameIndexParseErrorKind::MissingFields,
        })?;

        let id: usize = id_token.parse().map_err(|_| FrameIndexError::Parse {
            line: line_num,
            kind: FrameIndexParseErrorKind::InvalidFrameId {
                value: id_token.to_string(),
            },
        })?;
        let rmsd: f64 = rmsd_token.parse().map_err(|_| FrameIndexError::Parse {
            line: line_num,
            kind: FrameIndexParseErrorKind::InvalidRmsd {
                value: rmsd_token.to_string(),
            },
        })?;
        frames.push(Frame::new(id, rmsd));
    }
    Ok(frames)
}

pub fn read_frame_index_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Frame>, FrameIndexError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_frame_index(&mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_two_column_records_in_order() {
        let frames = read_frame_index(&mut Cursor::new("0 0.000\n10 1.250\n20 2.500\n")).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1], Frame::new(10, 1.25));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let frames = read_frame_index(&mut Cursor::new("0 0.0\n\n5 0.5\n")).unwrap();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn missing_rmsd_column_is_fatal() {
        let err = read_frame_index(&mut Cursor::new("0 0.0\n10\n")).unwrap_err();
        assert!(matches!(
            err,
            FrameIndexError::Parse {
                line: 2,
                kind: FrameIndexParseErrorKind::MissingFields,
            }
        ));
    }

    #[test]
    fn non_numeric_columns_are_fatal() {
        let err = read_frame_index(&mut Cursor::new("ten 0.0\n")).unwrap_err();
        assert!(matches!(
            err,
            FrameIndexError::Parse {
                kind: FrameIndexParseErrorKind::InvalidFrameId { .. },
                ..
            }
        ));

        let err = read_frame_index(&mut Cursor::new("10 fast\n")).unwrap_err();
        assert!(matches!(
            err,
            FrameIndexError::Parse {
                kind: FrameIndexParseErrorKind::InvalidRmsd { .. },
                ..
            }
        ));
    }
}

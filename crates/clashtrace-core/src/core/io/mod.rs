//! Parsers for the tool's bespoke text inputs and the transition report writer.
//!
//! Each input format has its own error type carrying the offending line number,
//! in the spirit of column-annotated parse diagnostics. All readers take
//! `&mut impl BufRead` with `*_path` convenience wrappers.

pub mod collisions;
pub mod frames;
pub mod pdb;
pub mod report;

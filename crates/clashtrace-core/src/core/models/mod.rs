//! Data model for trajectory clash following.
//!
//! All types here are plain values: they are constructed once by the loaders and
//! never mutated afterward. Residue and atom identifiers are the integers carried
//! by the input files themselves.

pub mod atom;
pub mod clash;
pub mod frame;
pub mod transition;

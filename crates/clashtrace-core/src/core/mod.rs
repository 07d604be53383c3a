//! # Core Module
//!
//! Fundamental building blocks for clash following: the stateless data model and
//! the I/O boundary.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Atoms, frames, clashes, and transitions.
//! - **File I/O** ([`io`]) - Parsers for the collision list, the frame index, and
//!   per-frame atomic snapshots, plus the transition report formatter.

pub mod io;
pub mod models;

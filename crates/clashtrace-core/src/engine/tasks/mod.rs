//! Computational tasks for clash following.
//!
//! Tasks are pure functions over preloaded catalog data: [`distance`] evaluates
//! the minimal inter-residue distance within one frame, and [`classify`] scans a
//! clash's per-frame series to select its transition frame.

pub mod classify;
pub mod distance;

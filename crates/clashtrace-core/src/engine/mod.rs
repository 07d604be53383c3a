//! # Engine Module
//!
//! The computational core of clash following.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The immutable run configuration and its builder.
//! - **Frame Catalog** ([`catalog`]) - Per-frame residue coordinate data, loaded once
//!   before dispatch and shared read-only afterward.
//! - **Tasks** ([`tasks`]) - The per-(clash, frame) distance evaluation and the
//!   per-clash transition classification.
//! - **Progress Monitoring** ([`progress`]) - Progress event reporting for consumers.
//! - **Error Handling** ([`error`]) - The fatal error taxonomy; classification misses
//!   are not errors and never appear here.

pub mod catalog;
pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;

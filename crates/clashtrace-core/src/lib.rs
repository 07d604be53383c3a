//! # Clashtrace Core Library
//!
//! A library for following steric residue clashes ("collisions") across a sampled
//! molecular-dynamics trajectory and determining, for each clash, the single frame
//! at which its existence state changed.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict separation of concerns:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `Frame`, `Clash`,
//!   `Transition`) and I/O: the collision-list and frame-index parsers, the per-frame
//!   snapshot reader, and the final report formatter.
//!
//! - **[`engine`]: The Logic Core.** The immutable frame catalog built once per run,
//!   the computational tasks (minimal inter-residue distance, transition
//!   classification), configuration, progress reporting, and error types.
//!
//! - **[`workflows`]: The Public API.** The end-to-end `follow` workflow that fans
//!   the classifier out across all clashes in parallel and aggregates order-stable
//!   results. This is the entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;

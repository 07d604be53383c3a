//! # Workflows Module
//!
//! High-level entry points that tie the engine and core layers together.
//!
//! - **Follow Workflow** ([`follow`]) - Fans the transition classifier out across
//!   all clashes over a worker pool and aggregates order-stable results.

pub mod follow;

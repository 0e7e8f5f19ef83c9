//! Shared utilities for the edr-stager entrypoint.
//!
//! This crate provides the cross-cutting concerns used by the other
//! edr-stager crates: error types, filesystem helpers, content hashing,
//! process spawning, and terminal status output.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod process;
pub mod progress;

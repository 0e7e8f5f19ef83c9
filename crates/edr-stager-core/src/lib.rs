//! Core data types for the edr-stager entrypoint.
//!
//! This crate defines the types that describe one provisioning run: the
//! resolved action inputs, package version parsing and compatible-release
//! constraints, pip requirement rendering, and the dbt structured-log scan
//! used for version detection.
//!
//! This crate performs no I/O and spawns no processes.

pub mod dbt_log;
pub mod inputs;
pub mod pip;
pub mod resolve;
pub mod version;

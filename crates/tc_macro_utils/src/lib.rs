//! Helpers for the `tc_*` proc-macro crates.
#![allow(clippy::std_instead_of_core, reason = "proc-macro helper")]

// -----------------------------------------------------------------------------
// Modules

mod manifest;

// -----------------------------------------------------------------------------
// Top-level exports

pub use manifest::Manifest;

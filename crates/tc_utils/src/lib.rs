//! Small shared utilities for the `tc_*` crates.
//!
//! - [`hash`]: hash containers with a fixed, reproducible seed.
//! - [`default`]: an abbreviation for [`Default::default()`].

// -----------------------------------------------------------------------------
// Modules

mod default;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use default::default;

//! # Engine Module
//!
//! The record-level algorithms behind every workflow.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated parameters and their builders
//! - **Scanning** ([`scan`]) - Center of mass and largest serial number in one fold
//! - **Synthesis** ([`synthesis`]) - Formatting a diatomic molecule as `HETATM` records
//! - **Rewriting** ([`rewrite`]) - The insert-before-`END` policy
//! - **Filtering** ([`filter`]) - Dropping unwanted `HETATM` and `CONECT` records
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! All functions here are pure: they borrow the input records and return new values.

pub mod config;
pub mod error;
pub mod filter;
pub mod rewrite;
pub mod scan;
pub mod synthesis;

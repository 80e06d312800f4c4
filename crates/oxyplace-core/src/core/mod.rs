//! # Core Module
//!
//! Stateless building blocks shared by every workflow in the crate.
//!
//! ## Architecture
//!
//! - **Records** ([`models`]) - The raw, ordered lines of a structure file and their kinds
//! - **File I/O** ([`io`]) - Reading and writing record sequences, plus `HETATM` formatting
//! - **Utilities** ([`utils`]) - The fixed-width column accessor and axis helpers
//!
//! Nothing in this module fails on malformed field content. Deciding whether a missing
//! coordinate or serial number matters is left to the [`crate::engine`] layer.

pub mod io;
pub mod models;
pub mod utils;

//! # Workflows Module
//!
//! Top-level entry points that tie the [`crate::engine`] steps together.
//!
//! - **Annotation** ([`annotate`]) - Scan for the center of mass, synthesize an O2
//!   molecule next to it, and insert it before the terminal `END` record.
//! - **Filtering** ([`filter`]) - Strip `HETATM` records that are not part of the
//!   marked group and, on request, all `CONECT` records.
//!
//! Workflows operate on record sequences already in memory and return the complete
//! output sequence, leaving file handling to the caller.

pub mod annotate;
pub mod filter;

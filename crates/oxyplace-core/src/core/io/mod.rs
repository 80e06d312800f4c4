//! Provides input/output functionality for fixed-width structure files.
//!
//! Files are read into an ordered list of records and written back line by line.
//! Reading never interprets or rejects a record; the only failures surfaced here are
//! I/O and encoding errors from the underlying stream.

pub mod pdb;
pub mod traits;

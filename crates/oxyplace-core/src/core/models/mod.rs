//! # Core Models Module
//!
//! Data structures describing the contents of a fixed-width structure file.
//!
//! A file is treated as an ordered sequence of [`record::Record`]s. Each record keeps
//! its raw text and a [`record::RecordKind`] derived from the tag in columns 1-6; numeric
//! fields are read on demand through the column accessor in
//! [`crate::core::utils::columns`], so a malformed field never prevents a record from
//! being carried through to the output.

pub mod record;

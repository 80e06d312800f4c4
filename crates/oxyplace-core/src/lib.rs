//! # oxyplace Core Library
//!
//! Utilities for fixed-width PDB structure files: placing a synthetic O2 molecule at a
//! chosen distance from a structure's center of mass, and filtering hetero-atom and
//! connectivity records.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** The record model, the fixed-width column accessor,
//!   and line-preserving file I/O.
//!
//! - **[`engine`]: The Logic Core.** Pure record-level algorithms (center-of-mass scan,
//!   O2 synthesis, insertion policy, filtering) and their validated configuration.
//!
//! - **[`workflows`]: The Public API.** One function per tool that runs the engine steps
//!   in order and returns the complete output record sequence.

pub mod core;
pub mod engine;
pub mod workflows;

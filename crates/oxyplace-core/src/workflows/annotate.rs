use crate::core::models::record::Record;
use crate::engine::config::AnnotationConfig;
use crate::engine::error::EngineError;
use crate::engine::rewrite::{insert_before_terminal, terminal_index};
use crate::engine::scan::{ScanSummary, scan_records};
use crate::engine::synthesis::{midpoint, synthesize_o2};
use nalgebra::Point3;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub summary: ScanSummary,
    /// Midpoint of the inserted O2 molecule.
    pub midpoint: Point3<f64>,
    /// The two synthesized `HETATM` records, lower serial first.
    pub inserted: [Record; 2],
    /// Index of the first inserted record within `records`.
    pub inserted_at: usize,
    /// The complete rewritten record sequence.
    pub records: Vec<Record>,
}

/// Places an O2 molecule next to the structure described by `records`.
///
/// The whole output sequence is built in memory; nothing is written here.
///
/// # Errors
///
/// Returns [`EngineError::NoPrimaryAtoms`] if no `ATOM` record has valid coordinates.
#[instrument(skip_all, name = "annotate_workflow")]
pub fn run(records: &[Record], config: &AnnotationConfig) -> Result<Annotation, EngineError> {
    info!("Scanning {} records for the center of mass.", records.len());
    let summary = scan_records(records)?;
    info!(
        center = ?summary.center,
        max_serial = ?summary.max_serial,
        atoms_used = summary.atoms_used,
        "Scan complete."
    );
    if summary.atoms_skipped > 0 {
        debug!(
            "{} ATOM record(s) had malformed coordinates and were excluded.",
            summary.atoms_skipped
        );
    }

    let mid = midpoint(&summary.center, config);
    let inserted = synthesize_o2(&summary.center, summary.max_serial, config);
    debug!(midpoint = ?mid, "Synthesized O2 records.");

    let inserted_at = terminal_index(records).unwrap_or(records.len());
    let rewritten = insert_before_terminal(records, &inserted);

    Ok(Annotation {
        summary,
        midpoint: mid,
        inserted,
        inserted_at,
        records: rewritten,
    })
}

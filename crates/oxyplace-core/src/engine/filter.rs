use crate::core::models::record::{Record, RecordKind};
use crate::engine::config::FilterConfig;

/// Counts describing what the filter removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub kept: usize,
    pub removed_hetero: usize,
    pub removed_connectivity: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRecords {
    pub records: Vec<Record>,
    pub summary: FilterSummary,
}

/// Drops `HETATM` records lacking the keep marker and, optionally, every `CONECT`
/// record. Everything else passes through in order.
pub fn filter_records(records: &[Record], config: &FilterConfig) -> FilteredRecords {
    let mut summary = FilterSummary::default();
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        match record.kind() {
            RecordKind::HetAtom if !record.content().contains(config.keep_marker.as_str()) => {
                summary.removed_hetero += 1;
            }
            RecordKind::Conect if config.remove_connectivity => {
                summary.removed_connectivity += 1;
            }
            _ => kept.push(record.clone()),
        }
    }

    summary.kept = kept.len();
    FilteredRecords {
        records: kept,
        summary,
    }
}

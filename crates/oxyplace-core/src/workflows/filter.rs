use crate::core::models::record::Record;
use crate::engine::config::FilterConfig;
use crate::engine::filter::{FilteredRecords, filter_records};
use tracing::{info, instrument};

/// Removes unwanted `HETATM` and (optionally) `CONECT` records from `records`.
#[instrument(skip_all, name = "filter_workflow")]
pub fn run(records: &[Record], config: &FilterConfig) -> FilteredRecords {
    info!(
        keep_marker = %config.keep_marker,
        remove_connectivity = config.remove_connectivity,
        "Filtering {} records.",
        records.len()
    );
    let filtered = filter_records(records, config);
    info!(
        kept = filtered.summary.kept,
        removed_hetero = filtered.summary.removed_hetero,
        removed_connectivity = filtered.summary.removed_connectivity,
        "Filtering complete."
    );
    filtered
}

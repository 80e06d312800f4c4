use crate::core::models::record::Record;

/// Position of the first terminal (`END`) record, if any.
pub fn terminal_index(records: &[Record]) -> Option<usize> {
    records.iter().position(Record::is_terminal)
}

/// Returns `records` with `inserted` placed immediately before the first terminal
/// record, or appended at the end when there is none. All original records keep
/// their relative order, including the terminal record and anything after it.
pub fn insert_before_terminal(records: &[Record], inserted: &[Record]) -> Vec<Record> {
    let split = terminal_index(records).unwrap_or(records.len());

    let mut rewritten = Vec::with_capacity(records.len() + inserted.len());
    rewritten.extend_from_slice(&records[..split]);
    rewritten.extend_from_slice(inserted);
    rewritten.extend_from_slice(&records[split..]);
    rewritten
}

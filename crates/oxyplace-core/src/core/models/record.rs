use crate::core::utils::columns::FixedWidthLine;
use phf::{OrderedMap, phf_ordered_map};
use std::fmt;

/// The end-of-structure token. A record is terminal only when its whole trimmed
/// content equals this token.
pub const TERMINAL_MARKER: &str = "END";

/// Classification of a record by its leading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `ATOM`: a directly modeled atomic position.
    Atom,
    /// `HETATM`: a non-standard or hetero atom position.
    HetAtom,
    /// `CONECT`: explicit bonds between atom serial numbers.
    Conect,
    /// `END`: the terminal marker.
    End,
    /// Any other record (headers, remarks, `TER`, `ENDMDL`, blank lines, ...).
    Other,
}

// Matched as line prefixes, in order. A tag may run into column 6 when the
// serial number is wider than five digits (`ATOM 100000 ...`).
static RECORD_PREFIXES: OrderedMap<&'static str, RecordKind> = phf_ordered_map! {
    "HETATM" => RecordKind::HetAtom,
    "ATOM" => RecordKind::Atom,
    "CONECT" => RecordKind::Conect,
};

impl RecordKind {
    pub fn classify(line: &str) -> Self {
        if line.trim() == TERMINAL_MARKER {
            return RecordKind::End;
        }
        RECORD_PREFIXES
            .entries()
            .find(|(prefix, _)| line.starts_with(**prefix))
            .map_or(RecordKind::Other, |(_, kind)| *kind)
    }

    /// Whether the record carries an atom serial number (`ATOM` or `HETATM`).
    pub fn is_atom_like(&self) -> bool {
        matches!(self, RecordKind::Atom | RecordKind::HetAtom)
    }
}

/// One line of a fixed-width structure file.
///
/// The raw text is kept verbatim (without its line terminator) so that records
/// which are not touched by a transformation are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    content: String,
    kind: RecordKind,
}

impl Record {
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let kind = RecordKind::classify(&content);
        Self { content, kind }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == RecordKind::End
    }

    pub fn columns(&self) -> FixedWidthLine<'_> {
        FixedWidthLine::new(&self.content)
    }
}

impl From<&str> for Record {
    fn from(line: &str) -> Self {
        Record::new(line)
    }
}

impl From<String> for Record {
    fn from(line: String) -> Self {
        Record::new(line)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognizes_atom_records_by_tag() {
        assert_eq!(
            RecordKind::classify("ATOM      1  N   MET A   1      11.104   6.134  -6.504"),
            RecordKind::Atom
        );
        assert_eq!(
            RecordKind::classify("HETATM 1234 FE   HEM A 201      1.000   2.000   3.000"),
            RecordKind::HetAtom
        );
        assert_eq!(
            RecordKind::classify("CONECT 1234 1235"),
            RecordKind::Conect
        );
    }

    #[test]
    fn classify_requires_the_whole_trimmed_line_for_the_terminal_marker() {
        assert_eq!(RecordKind::classify("END"), RecordKind::End);
        assert_eq!(RecordKind::classify("  END   "), RecordKind::End);
        assert_eq!(RecordKind::classify("END\r"), RecordKind::End);
        assert_eq!(RecordKind::classify("ENDMDL"), RecordKind::Other);
        assert_eq!(RecordKind::classify("END   extra"), RecordKind::Other);
    }

    #[test]
    fn classify_matches_tags_running_into_the_serial_columns() {
        assert_eq!(
            RecordKind::classify("ATOM 100000  CA  ALA A   1      10.000  10.000  10.000"),
            RecordKind::Atom
        );
        assert_eq!(
            RecordKind::classify("HETATM123456 FE   HEM A 201       1.000   2.000   3.000"),
            RecordKind::HetAtom
        );
        assert_eq!(RecordKind::classify("CONECT123456"), RecordKind::Conect);
    }

    #[test]
    fn classify_requires_the_tag_at_the_start_of_the_line() {
        assert_eq!(RecordKind::classify(" ATOM      1"), RecordKind::Other);
        assert_eq!(RecordKind::classify("REMARK ATOM"), RecordKind::Other);
    }

    #[test]
    fn classify_falls_back_to_other_for_unknown_tags() {
        assert_eq!(RecordKind::classify("REMARK   1 test"), RecordKind::Other);
        assert_eq!(RecordKind::classify("TER"), RecordKind::Other);
        assert_eq!(RecordKind::classify(""), RecordKind::Other);
        assert_eq!(RecordKind::classify("atom      1"), RecordKind::Other);
    }

    #[test]
    fn is_atom_like_covers_atom_and_hetatm_only() {
        assert!(RecordKind::Atom.is_atom_like());
        assert!(RecordKind::HetAtom.is_atom_like());
        assert!(!RecordKind::Conect.is_atom_like());
        assert!(!RecordKind::End.is_atom_like());
        assert!(!RecordKind::Other.is_atom_like());
    }

    #[test]
    fn record_keeps_raw_content_and_displays_it_verbatim() {
        let raw = "REMARK   2 RESOLUTION.    1.90 ANGSTROMS.   ";
        let record = Record::from(raw);
        assert_eq!(record.content(), raw);
        assert_eq!(record.to_string(), raw);
        assert_eq!(record.kind(), RecordKind::Other);
        assert!(!record.is_terminal());
    }

    #[test]
    fn record_columns_expose_fixed_width_fields() {
        let record = Record::from("HETATM   42 FE   HEM A 201      1.000   2.000   3.000");
        assert_eq!(record.columns().serial(), Some(42));
    }
}

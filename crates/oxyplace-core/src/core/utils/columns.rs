use nalgebra::Point3;
use std::str::FromStr;

/// A 1-indexed, inclusive range of character columns in a fixed-width record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Columns {
    first: usize,
    last: usize,
}

impl Columns {
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Zero-based character offset of the first column.
    pub const fn start(&self) -> usize {
        self.first.saturating_sub(1)
    }

    /// Zero-based, exclusive character offset after the last column.
    pub const fn end(&self) -> usize {
        self.last
    }
}

pub const SERIAL: Columns = Columns::new(7, 11);
pub const X_COORD: Columns = Columns::new(31, 38);
pub const Y_COORD: Columns = Columns::new(39, 46);
pub const Z_COORD: Columns = Columns::new(47, 54);

/// Typed, column-based view over one line of a fixed-width structure file.
///
/// Columns count characters, not bytes, so a non-ASCII character earlier in the
/// line does not shift later fields. Every accessor is total: a short line, an
/// empty field, or a field that does not parse yields `None` instead of an error.
/// Callers decide what a missing field means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthLine<'a> {
    line: &'a str,
}

impl<'a> FixedWidthLine<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    /// Returns the trimmed text found in `columns`, clamped to the line length.
    pub fn slice(&self, columns: Columns) -> &'a str {
        let start = self.byte_offset(columns.start());
        let end = self.byte_offset(columns.end()).max(start);
        self.line[start..end].trim()
    }

    fn byte_offset(&self, column: usize) -> usize {
        if self.line.is_ascii() {
            return column.min(self.line.len());
        }
        self.line
            .char_indices()
            .nth(column)
            .map_or(self.line.len(), |(offset, _)| offset)
    }

    /// Parses the field in `columns` as `T`.
    pub fn field<T: FromStr>(&self, columns: Columns) -> Option<T> {
        let raw = self.slice(columns);
        if raw.is_empty() {
            return None;
        }
        raw.parse().ok()
    }

    pub fn serial(&self) -> Option<i64> {
        self.field(SERIAL)
    }

    /// All three Cartesian coordinates, or `None` if any of them is missing or malformed.
    pub fn position(&self) -> Option<Point3<f64>> {
        Some(Point3::new(
            self.field(X_COORD)?,
            self.field(Y_COORD)?,
            self.field(Z_COORD)?,
        ))
    }
}

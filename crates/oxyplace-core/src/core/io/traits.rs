use crate::core::models::record::Record;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing line-oriented structure files.
///
/// Implementors turn a byte stream into an ordered sequence of [`Record`]s and
/// back. The path-based helpers are provided in terms of the stream methods.
pub trait RecordFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every record from a buffered reader, in file order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails or yields invalid UTF-8.
    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Record>, Self::Error>;

    /// Writes `records` to `writer`, one per line, each terminated by `\n`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(records: &[Record], writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads every record from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Creates (or truncates) the file at `path` and writes `records` to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(records: &[Record], path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(records, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

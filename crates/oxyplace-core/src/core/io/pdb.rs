use crate::core::io::traits::RecordFile;
use crate::core::models::record::Record;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Line-preserving reader and writer for PDB-formatted files.
///
/// No record is interpreted while reading; classification and field extraction
/// happen lazily on the [`Record`]s themselves.
pub struct PdbFile;

impl RecordFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Record>, Self::Error> {
        let mut records = Vec::new();
        for line in reader.lines() {
            records.push(Record::new(line?));
        }
        Ok(records)
    }

    fn write_to(records: &[Record], writer: &mut impl Write) -> Result<(), Self::Error> {
        for record in records {
            writeln!(writer, "{}", record.content())?;
        }
        Ok(())
    }
}

/// A `HETATM` record assembled from typed values.
///
/// Fixed-width layout (1-indexed columns): serial 7-11, atom name 13-16 (centered),
/// residue name 18-20, chain 22, residue number 23-26, coordinates 31-38 / 39-46 /
/// 47-54, occupancy 55-60, temperature factor 61-66, element 77-78.
#[derive(Debug, Clone, PartialEq)]
pub struct HetAtomRecord<'a> {
    pub serial: i64,
    pub name: &'a str,
    pub residue_name: &'a str,
    pub chain_id: char,
    pub residue_number: i32,
    pub position: Point3<f64>,
    pub element: &'a str,
}

/// Formats one coordinate into its 8-column field with 3 decimals.
fn coordinate_field(value: f64) -> String {
    if value.is_nan() {
        format!("{:>8}", "nan")
    } else {
        format!("{:8.3}", value)
    }
}

impl HetAtomRecord<'_> {
    pub fn to_line(&self) -> String {
        format!(
            "HETATM{:5} {:^4} {:>3} {}{:4}    {}{}{}  1.00  0.00           {:>2}",
            self.serial,
            self.name,
            self.residue_name,
            self.chain_id,
            self.residue_number,
            coordinate_field(self.position.x),
            coordinate_field(self.position.y),
            coordinate_field(self.position.z),
            self.element
        )
    }

    pub fn to_record(&self) -> Record {
        Record::new(self.to_line())
    }
}

use crate::core::models::record::{Record, RecordKind};
use crate::engine::error::EngineError;
use nalgebra::{Point3, Vector3};
use tracing::trace;

/// Result of a single pass over a record sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSummary {
    /// Arithmetic mean of every `ATOM` record with three valid coordinates.
    pub center: Point3<f64>,
    /// Largest serial number found on `ATOM`/`HETATM` records, if any parsed.
    pub max_serial: Option<i64>,
    /// Number of `ATOM` records that contributed to `center`.
    pub atoms_used: usize,
    /// Number of `ATOM` records excluded because of malformed coordinates.
    pub atoms_skipped: usize,
}

impl ScanSummary {
    /// The serial number following the largest one seen (1 if none was seen).
    pub fn next_serial(&self) -> i64 {
        self.max_serial.map_or(1, |max| max + 1)
    }
}

#[derive(Debug, Clone, Copy)]
struct CenterAccumulator {
    sum: Vector3<f64>,
    count: usize,
    skipped: usize,
    max_serial: Option<i64>,
}

impl CenterAccumulator {
    fn new() -> Self {
        Self {
            sum: Vector3::zeros(),
            count: 0,
            skipped: 0,
            max_serial: None,
        }
    }

    fn absorb(mut self, (index, record): (usize, &Record)) -> Self {
        let kind = record.kind();
        if !kind.is_atom_like() {
            return self;
        }

        let columns = record.columns();

        // Coordinates and serials are independent: a record may contribute one without the other.
        if kind == RecordKind::Atom {
            match columns.position() {
                Some(position) => {
                    self.sum += position.coords;
                    self.count += 1;
                }
                None => {
                    trace!(line = index + 1, "ATOM record has malformed coordinates; excluded from center");
                    self.skipped += 1;
                }
            }
        }

        match columns.serial() {
            Some(serial) => {
                self.max_serial = Some(self.max_serial.map_or(serial, |max| max.max(serial)));
            }
            None => trace!(line = index + 1, "Atom record has no parseable serial number"),
        }

        self
    }

    fn finish(self) -> Result<ScanSummary, EngineError> {
        if self.count == 0 {
            return Err(EngineError::NoPrimaryAtoms);
        }
        Ok(ScanSummary {
            center: Point3::from(self.sum / self.count as f64),
            max_serial: self.max_serial,
            atoms_used: self.count,
            atoms_skipped: self.skipped,
        })
    }
}

/// Computes the center of mass of the `ATOM` records and the largest atom serial number.
///
/// Only `ATOM` records contribute coordinates; both `ATOM` and `HETATM` records
/// contribute serial numbers. Malformed fields are skipped per record and per field.
///
/// # Errors
///
/// Returns [`EngineError::NoPrimaryAtoms`] if no `ATOM` record has three valid coordinates.
pub fn scan_records(records: &[Record]) -> Result<ScanSummary, EngineError> {
    records
        .iter()
        .enumerate()
        .fold(CenterAccumulator::new(), CenterAccumulator::absorb)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn atom(serial: &str, x: f64, y: f64, z: f64) -> Record {
        Record::new(format!(
            "ATOM  {:>5}  CA  ALA A   1    {:8.3}{:8.3}{:8.3}  1.00  0.00           C",
            serial, x, y, z
        ))
    }

    fn hetatm(serial: &str) -> Record {
        Record::new(format!(
            "HETATM{:>5} FE   HEM A 201       0.000   0.000   0.000  1.00  0.00          FE",
            serial
        ))
    }

    fn assert_close(a: &Point3<f64>, b: &Point3<f64>) {
        assert!((a - b).norm() < TOLERANCE, "{a:?} != {b:?}");
    }

    #[test]
    fn scan_averages_atom_coordinates() {
        let records = vec![
            atom("1", 0.0, 0.0, 0.0),
            atom("2", 2.0, 4.0, -6.0),
            atom("3", 1.0, 2.0, 3.0),
        ];
        let summary = scan_records(&records).unwrap();
        assert_close(&summary.center, &Point3::new(1.0, 2.0, -1.0));
        assert_eq!(summary.atoms_used, 3);
        assert_eq!(summary.atoms_skipped, 0);
        assert_eq!(summary.max_serial, Some(3));
    }

    #[test]
    fn scan_is_independent_of_record_order() {
        let mut records = vec![
            atom("5", 1.5, -2.25, 7.125),
            atom("9", -3.0, 8.5, 0.5),
            atom("2", 10.0, 0.0, -4.0),
            hetatm("11"),
        ];
        let forward = scan_records(&records).unwrap();
        records.reverse();
        let backward = scan_records(&records).unwrap();

        assert_close(&forward.center, &backward.center);
        assert_eq!(forward.max_serial, backward.max_serial);
    }

    #[test]
    fn scan_ignores_hetatm_coordinates_but_tracks_their_serials() {
        let records = vec![atom("1", 4.0, 4.0, 4.0), hetatm("120")];
        let summary = scan_records(&records).unwrap();
        assert_close(&summary.center, &Point3::new(4.0, 4.0, 4.0));
        assert_eq!(summary.max_serial, Some(120));
    }

    #[test]
    fn scan_excludes_atoms_with_malformed_coordinates_but_keeps_their_serial() {
        let broken =
            Record::from("ATOM     77  CA  ALA A   1       1.000     bad   3.000  1.00  0.00           C");
        let records = vec![atom("1", 2.0, 2.0, 2.0), broken];
        let summary = scan_records(&records).unwrap();

        assert_close(&summary.center, &Point3::new(2.0, 2.0, 2.0));
        assert_eq!(summary.atoms_used, 1);
        assert_eq!(summary.atoms_skipped, 1);
        assert_eq!(summary.max_serial, Some(77));
    }

    #[test]
    fn scan_keeps_coordinates_of_atoms_with_malformed_serials() {
        let records = vec![atom("*****", 3.0, 0.0, 0.0), atom("4", 1.0, 0.0, 0.0)];
        let summary = scan_records(&records).unwrap();
        assert_close(&summary.center, &Point3::new(2.0, 0.0, 0.0));
        assert_eq!(summary.atoms_used, 2);
        assert_eq!(summary.max_serial, Some(4));
    }

    #[test]
    fn scan_includes_atoms_whose_serial_overflows_into_the_tag_columns() {
        let wide = Record::new(format!(
            "ATOM {:>6}  CA  ALA A   1    {:8.3}{:8.3}{:8.3}  1.00  0.00           C",
            100000, 10.0, 10.0, 10.0
        ));
        assert_eq!(wide.kind(), RecordKind::Atom);

        let records = vec![atom("1", 0.0, 0.0, 0.0), wide];
        let summary = scan_records(&records).unwrap();
        assert_close(&summary.center, &Point3::new(5.0, 5.0, 5.0));
        assert_eq!(summary.atoms_used, 2);
    }

    #[test]
    fn scan_ignores_non_atom_records() {
        let records = vec![
            Record::from("REMARK 99999 not an atom"),
            Record::from("CONECT99999    1"),
            atom("3", 1.0, 1.0, 1.0),
            Record::from("END"),
        ];
        let summary = scan_records(&records).unwrap();
        assert_eq!(summary.max_serial, Some(3));
    }

    #[test]
    fn scan_fails_when_there_are_no_records() {
        assert!(matches!(scan_records(&[]), Err(EngineError::NoPrimaryAtoms)));
    }

    #[test]
    fn scan_fails_when_no_atom_records_have_coordinates() {
        let records = vec![
            hetatm("1"),
            Record::from("ATOM      2  CA  ALA A   1"),
            Record::from("END"),
        ];
        assert!(matches!(scan_records(&records), Err(EngineError::NoPrimaryAtoms)));
    }

    #[test]
    fn max_serial_is_absent_when_no_serial_parses() {
        let records = vec![atom("", 1.0, 1.0, 1.0)];
        let summary = scan_records(&records).unwrap();
        assert_eq!(summary.max_serial, None);
        assert_eq!(summary.next_serial(), 1);
    }

    #[test]
    fn max_serial_is_one_of_the_observed_serials() {
        let serials = ["17", "3", "250", "42"];
        let mut records: Vec<Record> = serials.iter().map(|s| atom(s, 0.0, 0.0, 0.0)).collect();
        records.push(hetatm("99"));

        let summary = scan_records(&records).unwrap();
        assert_eq!(summary.max_serial, Some(250));
        assert_eq!(summary.next_serial(), 251);
    }
}

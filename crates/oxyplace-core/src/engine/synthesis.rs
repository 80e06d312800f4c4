use crate::core::io::pdb::HetAtomRecord;
use crate::core::models::record::Record;
use crate::core::utils::geometry::offset_along;
use crate::engine::config::AnnotationConfig;
use nalgebra::Point3;

/// A homonuclear diatomic molecule that can be inserted as a pair of `HETATM` records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiatomicSpecies {
    pub residue_name: &'static str,
    pub atom_names: [&'static str; 2],
    pub element: &'static str,
    /// Equilibrium bond length in Angstroms.
    pub bond_length: f64,
}

/// Molecular oxygen with the typical O=O bond length of 1.21 Å.
pub const OXYGEN: DiatomicSpecies = DiatomicSpecies {
    residue_name: "O2",
    atom_names: ["O1", "O2"],
    element: "O",
    bond_length: 1.21,
};

/// The midpoint of the synthesized molecule: the center displaced along the offset axis.
pub fn midpoint(center: &Point3<f64>, config: &AnnotationConfig) -> Point3<f64> {
    offset_along(center, config.offset_axis, config.distance)
}

/// Builds the two atoms of `species` around the configured midpoint.
///
/// The first atom sits half a bond length in the positive direction of the spread
/// axis and receives `max_serial + 1`; the second sits on the opposite side and
/// receives `max_serial + 2`. Without any known serial the pair is numbered 1 and 2.
pub fn synthesize_atoms(
    species: &DiatomicSpecies,
    center: &Point3<f64>,
    max_serial: Option<i64>,
    config: &AnnotationConfig,
) -> [HetAtomRecord<'static>; 2] {
    let mid = midpoint(center, config);
    let half_bond = species.bond_length / 2.0;
    let first_serial = max_serial.map_or(1, |max| max + 1);

    let place = |slot: usize, position: Point3<f64>| HetAtomRecord {
        serial: first_serial + slot as i64,
        name: species.atom_names[slot],
        residue_name: species.residue_name,
        chain_id: config.chain_id,
        residue_number: config.residue_number,
        position,
        element: species.element,
    };

    [
        place(0, offset_along(&mid, config.spread_axis, half_bond)),
        place(1, offset_along(&mid, config.spread_axis, -half_bond)),
    ]
}

/// Formats an O2 molecule as two `HETATM` records ready for insertion.
pub fn synthesize_o2(
    center: &Point3<f64>,
    max_serial: Option<i64>,
    config: &AnnotationConfig,
) -> [Record; 2] {
    synthesize_atoms(&OXYGEN, center, max_serial, config).map(|atom| atom.to_record())
}

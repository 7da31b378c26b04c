//! Writing SMILES string representations.

mod writer;

pub use writer::Writer;

use crate::canon::canonical_ranks;
use crate::graph::Molecule;
use crate::walk::walk;

/// Writes `molecules` as a single SMILES string, fragments joined by
/// `.` in the order given. With `canonical` set, atoms are emitted in
/// canonical rank order and directional bonds are normalized, so
/// equivalent inputs come out byte-identical; otherwise atoms follow
/// their original identifiers. Empty input writes an empty string.
///
/// ```
/// use chirr::{generate, parse};
///
/// let result = parse("OCC");
///
/// assert!(result.errors.is_empty());
/// assert_eq!(generate(&result.molecules, true), "CCO");
/// ```
pub fn generate(molecules: &[Molecule], canonical: bool) -> String {
    let mut writer = Writer::new();

    for molecule in molecules {
        let ranks = if canonical {
            canonical_ranks(molecule)
        } else {
            (0..molecule.atoms.len()).collect()
        };

        walk(molecule, &ranks, canonical, &mut writer);
    }

    writer.write()
}

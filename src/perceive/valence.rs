//! Valence validation. The sum of bond orders plus implicit hydrogens
//! must land on a permitted valence for the element and charge. An
//! aromatic atom may additionally claim one bond from its pi system.

use crate::error::ParseError;
use crate::graph::Molecule;

pub fn validate(molecule: &Molecule, errors: &mut Vec<ParseError>) {
    for atom in &molecule.atoms {
        let targets = atom.kind.targets();

        if targets.is_empty() {
            // stars, and element/charge combinations with no model
            continue;
        }

        let sum: u8 = molecule
            .bond_indices(atom.id)
            .iter()
            .map(|&index| molecule.bonds[index].order())
            .sum();
        let valence = sum + atom.hydrogens;

        let aromatic_bonds = molecule
            .bond_indices(atom.id)
            .iter()
            .any(|&index| molecule.bonds[index].is_aromatic());

        let permitted = targets.contains(&valence)
            || (atom.is_aromatic() && aromatic_bonds && targets.contains(&(valence + 1)));

        if !permitted {
            errors.push(ParseError::Valence {
                atom: atom.id,
                valence,
                symbol: atom.symbol(),
            });
        }
    }
}

//! Stereo consistency checks. Tetrahedral tags need enough neighbors
//! to mean anything, and no atom can claim two bonds on the same side
//! of a double bond. Directional bonds without a double-bond partner
//! are left in place; the writer drops them.

use crate::error::ParseError;
use crate::feature::{AtomKind, BondKind};
use crate::graph::Molecule;

pub fn validate(molecule: &mut Molecule, errors: &mut Vec<ParseError>) {
    for id in 0..molecule.atoms.len() {
        let tetrahedral = molecule.atoms[id]
            .configuration()
            .is_some_and(|configuration| configuration.is_tetrahedral());

        if tetrahedral && molecule.degree(id) < 3 {
            errors.push(ParseError::NonStereocenter(id));

            if let AtomKind::Bracket { configuration, .. } = &mut molecule.atoms[id].kind {
                *configuration = None;
            }
        }
    }

    for id in 0..molecule.atoms.len() {
        let mut up = 0;
        let mut down = 0;

        for index in molecule.bond_indices(id) {
            match molecule.bonds[*index].kind_from(id) {
                BondKind::Up => up += 1,
                BondKind::Down => down += 1,
                _ => {}
            }
        }

        if up > 1 || down > 1 {
            errors.push(ParseError::DirectionConflict(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::read::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_stereocenter_is_kept() {
        let result = parse("C[C@H](N)C(=O)O");

        assert_eq!(result.errors, vec![]);
        assert!(result.molecules[0].atoms[1].configuration().is_some());
    }

    #[test]
    fn undercoordinated_tag_is_stripped() {
        let result = parse("O[C@H2]F");

        assert_eq!(result.errors, vec![ParseError::NonStereocenter(1)]);
        assert_eq!(result.molecules[0].atoms[1].configuration(), None);
    }

    #[test]
    fn extended_tags_are_not_judged() {
        let result = parse("C[Fe@TB7](O)(Cl)(Br)F");

        assert_eq!(result.errors, vec![]);
    }

    #[test]
    fn two_substituents_on_the_same_side_conflict() {
        // leaving the central carbon, both F and Cl point down
        let result = parse("F/C(\\Cl)=C/Br");

        assert_eq!(result.errors, vec![ParseError::DirectionConflict(1)]);
    }

    #[test]
    fn complementary_directions_are_fine() {
        assert_eq!(parse("F/C(/Cl)=C/Br").errors, vec![]);
    }
}

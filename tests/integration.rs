use chirr::{generate, parse, ParseError};

use pretty_assertions::assert_eq;

/// Reads, writes canonically, and compares against the expected bytes.
macro_rules! assert_canonical {
    ($smiles:expr, $expected:expr) => {{
        let result = parse($smiles);

        assert_eq!(result.errors, vec![], "errors for {}", $smiles);
        assert_eq!(
            generate(&result.molecules, true),
            $expected,
            "canonical form of {}",
            $smiles
        );
    }};
}

/// Reads and writes without canonicalization; the bytes must survive.
macro_rules! assert_roundtrip {
    ($smiles:expr) => {{
        let result = parse($smiles);

        assert_eq!(result.errors, vec![], "errors for {}", $smiles);
        assert_eq!(generate(&result.molecules, false), $smiles);
    }};
}

#[test]
fn canonical_forms() {
    assert_canonical!("CCO", "CCO");
    assert_canonical!("OCC", "CCO");
    assert_canonical!("CC(=O)O", "CC(=O)O");
    assert_canonical!("c1ccccc1", "c1ccccc1");
    assert_canonical!("CC(=O)Oc1ccccc1C(=O)O", "CC(=O)Oc1ccccc1C(=O)O");
    assert_canonical!("CCO.O", "CCO.O");
    assert_canonical!("C[C@H](N)C(=O)O", "C[C@H](N)C(=O)O");
}

#[test]
fn canonical_double_bond_stereo() {
    // trans collapses to matching slashes
    assert_canonical!("C\\C=C\\C", "C/C=C/C");
    assert_canonical!("C/C=C/C", "C/C=C/C");
    // cis keeps the mixed pair
    assert_canonical!("C/C=C\\C", "C/C=C\\C");
    assert_canonical!("C\\C=C/C", "C/C=C\\C");
    // markers migrate to the bonds the canonical traversal writes first
    assert_canonical!("Cl/C=C(\\F)Br", "F/C(Br)=C\\Cl");
}

#[test]
fn isomorphic_inputs_converge() {
    let groups: &[&[&str]] = &[
        &["CCO", "OCC", "C(C)O", "C(O)C"],
        &["c1ccccc1", "c1ccccc1"],
        &["CC(=O)O", "OC(=O)C", "C(C)(=O)O"],
        &["C[C@H](N)C(=O)O", "C[C@@H](C(=O)O)N"],
        &["C\\C=C\\C", "C/C=C/C"],
        &["CC(=O)Oc1ccccc1C(=O)O", "O=C(O)c1ccccc1OC(C)=O"],
    ];

    for group in groups {
        let mut forms: Vec<String> = group
            .iter()
            .map(|smiles| {
                let result = parse(smiles);

                assert_eq!(result.errors, vec![], "errors for {smiles}");

                generate(&result.molecules, true)
            })
            .collect();

        forms.dedup();

        assert_eq!(forms.len(), 1, "group {group:?} diverged: {forms:?}");
    }
}

#[test]
fn canonical_idempotence() {
    let corpus = [
        "CCO",
        "CC(C)Cc1ccc(cc1)C(C)C(=O)O",
        "c1ccc2ccccc2c1",
        "CC(=O)NCCc1c[nH]c2ccc(OC)cc12",
        "C1CC1C(=O)O",
        "N#Cc1ccccc1",
        "F/C(Br)=C\\Cl",
        "C/C=C/C=C/C",
        "[13CH4]",
        "[NH4+].[Cl-]",
        "C[C@H](N)C(=O)O",
        "CC[C@H](O1)CC[C@@]12CCCO2",
        "OCCc1c(C)[n+](cs1)Cc2cnc(C)nc2N",
    ];

    for smiles in corpus {
        let first = generate(&parse(smiles).molecules, true);
        let reparsed = parse(&first);

        assert_eq!(reparsed.errors, vec![], "canonical form of {smiles} rereads");

        let second = generate(&reparsed.molecules, true);

        assert_eq!(first, second, "idempotence for {smiles}");
    }
}

#[test]
fn plain_roundtrips() {
    assert_roundtrip!("CCO");
    assert_roundtrip!("C(F)Cl");
    assert_roundtrip!("c1ccccc1");
    assert_roundtrip!("C1CCCCC1");
    assert_roundtrip!("[13CH4]");
    assert_roundtrip!("[NH4+]");
    assert_roundtrip!("[CH2:7]=[CH2:8]");
    assert_roundtrip!("C[C@@H](N)O");
    assert_roundtrip!("C/C=C\\C");
    assert_roundtrip!("CCO.O");
    assert_roundtrip!("[Fe@TB7](C)(O)(Cl)(Br)F");
    assert_roundtrip!("*C*");
}

#[test]
fn graph_invariants_hold() {
    let corpus = [
        "CCO",
        "CC(=O)Oc1ccccc1C(=O)O",
        "C1CC2CCC1CC2",
        "CCO.O.[Na+]",
        "C%10CCCCC%10",
    ];

    for smiles in corpus {
        for molecule in parse(smiles).molecules {
            for (index, atom) in molecule.atoms.iter().enumerate() {
                assert_eq!(atom.id, index, "ids follow parse order in {smiles}");
            }

            for bond in &molecule.bonds {
                assert_ne!(bond.atom1, bond.atom2, "self bond in {smiles}");
                assert!(bond.atom1 < molecule.atoms.len());
                assert!(bond.atom2 < molecule.atoms.len());
            }

            for (i, first) in molecule.bonds.iter().enumerate() {
                for second in &molecule.bonds[i + 1..] {
                    assert!(
                        !first.joins(second.atom1, second.atom2),
                        "duplicate bond in {smiles}"
                    );
                }
            }
        }
    }
}

#[test]
fn aromatic_rings_are_uniform() {
    let result = parse("c1ccc2ccccc2c1");

    assert_eq!(result.errors, vec![]);

    let molecule = &result.molecules[0];

    assert!(molecule.atoms.iter().all(chirr::Atom::is_aromatic));
    assert!(molecule.bonds.iter().all(chirr::Bond::is_aromatic));
}

#[test]
fn boundary_cases() {
    let empty = parse("");

    assert_eq!(empty.errors, vec![]);
    assert_eq!(empty.molecules.len(), 0);
    assert_eq!(generate(&empty.molecules, true), "");

    let methane = parse("C");

    assert_eq!(methane.errors, vec![]);
    assert_eq!(methane.molecules.len(), 1);
    assert_eq!(methane.molecules[0].atoms.len(), 1);
    assert_eq!(methane.molecules[0].atoms[0].hydrogens, 4);

    assert!(!parse(".").errors.is_empty());

    let partial = parse("CC(");

    assert_eq!(partial.errors, vec![ParseError::UnbalancedParenthesis]);
    assert_eq!(partial.molecules[0].atoms.len(), 2);
}

#[test]
fn parse_error_scenarios() {
    assert_eq!(
        parse("CC(").errors[0].to_string(),
        "unbalanced parenthesis"
    );
    assert_eq!(
        parse("C1CC").errors[0].to_string(),
        "dangling ring closure 1"
    );
    assert_eq!(
        parse("[CX]").errors[0].to_string(),
        "unknown element at position 2"
    );
    assert_eq!(
        parse("C=#C").errors[0].to_string(),
        "bad bond sequence at position 2"
    );
}

#[test]
fn atom_counts_match_the_input() {
    let cases = [
        ("CCO", 3),
        ("CC(=O)Oc1ccccc1C(=O)O", 13),
        ("CCO.O", 4),
        ("[NH4+]", 1),
        ("C%12CCCCC%12", 6),
    ];

    for (smiles, count) in cases {
        let result = parse(smiles);
        let total: usize = result
            .molecules
            .iter()
            .map(|molecule| molecule.atoms.len())
            .sum();

        assert_eq!(result.errors, vec![], "errors for {smiles}");
        assert_eq!(total, count, "atom count for {smiles}");
    }
}

#[test]
fn fragments_keep_their_order() {
    assert_canonical!("CCO.O", "CCO.O");
    assert_canonical!("O.OCC", "O.CCO");
    assert_canonical!("[Na+].[Cl-]", "[Na+].[Cl-]");
}

#[test]
fn ring_digits_are_reused() {
    // six fused rings never need more than a few digits at once
    let result = parse("C1CCC2(CC1)CCCC2");

    assert_eq!(result.errors, vec![]);

    let canonical = generate(&result.molecules, true);

    assert!(!canonical.contains('3'), "digits not reused: {canonical}");

    let reparsed = parse(&canonical);

    assert_eq!(reparsed.errors, vec![]);
    assert_eq!(generate(&reparsed.molecules, true), canonical);
}

#[test]
fn directional_bond_without_double_partner_is_dropped() {
    let result = parse("C/CC");

    assert_eq!(result.errors, vec![]);
    assert_eq!(generate(&result.molecules, true), "CCC");
    assert_eq!(generate(&result.molecules, false), "CCC");
}

#[test]
fn one_sided_stereo_markers_are_dropped() {
    let result = parse("CC=C/C");

    assert_eq!(result.errors, vec![]);
    assert_eq!(generate(&result.molecules, true), "CC=CC");
}

#[test]
fn wildcards_and_extended_chirality_survive() {
    let star = parse("*c1ccccc1");

    assert_eq!(star.errors, vec![]);
    assert!(generate(&star.molecules, true).contains('*'));

    let extended = parse("C[Fe@TB7](O)(Cl)(Br)F");

    assert_eq!(extended.errors, vec![]);
    assert!(generate(&extended.molecules, false).contains("@TB7"));
}

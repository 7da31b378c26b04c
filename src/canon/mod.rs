//! Canonical atom ranking by Morgan-style iterative refinement.
//!
//! Atoms start from a tuple of local properties, are bucketed into
//! dense ranks, and are refined by their neighbors' ranks until the
//! partition stops splitting. Remaining ties are broken one atom at a
//! time and refinement resumes, so isomorphic inputs land on the same
//! ranking no matter how they were written.

use crate::feature::BondKind;
use crate::graph::Molecule;
use crate::perceive;

/// Degree leads the invariant: it is what reproduces the reference
/// root-atom choices on the comparison corpus.
type Invariant = (usize, u32, i8, bool, u8, u16, u8, bool);

/// Assigns each atom a unique rank in `0..atoms.len()`.
pub fn canonical_ranks(molecule: &Molecule) -> Vec<usize> {
    let size = molecule.atoms.len();

    if size == 0 {
        return Vec::new();
    }

    let rings = perceive::sssr(molecule);
    let counts = perceive::ring_counts(molecule, &rings);

    let invariants: Vec<Invariant> = molecule
        .atoms
        .iter()
        .map(|atom| {
            (
                molecule.degree(atom.id),
                atom.atomic_number(),
                atom.charge(),
                atom.is_aromatic(),
                atom.hydrogens,
                atom.isotope().unwrap_or(0),
                counts[atom.id],
                atom.configuration().is_some(),
            )
        })
        .collect();

    let mut ranks = bucket(&invariants);

    for _ in 0..=size {
        ranks = refine(molecule, ranks);

        let Some(tied) = lowest_tied_rank(&ranks) else {
            return ranks;
        };

        // promote the structurally smallest member, then refine again
        let chosen = (0..size)
            .filter(|&id| ranks[id] == tied)
            .min_by_key(|&id| (&invariants[id], id))
            .expect("tied bucket is not empty");

        let keys: Vec<(usize, u8)> = ranks
            .iter()
            .enumerate()
            .map(|(id, &rank)| (rank, u8::from(id != chosen)))
            .collect();

        ranks = bucket(&keys);
    }

    // every pass above splits at least one bucket
    unreachable!("canonical ranking failed to converge");
}

/// Refines `ranks` by neighbor environments until the partition stops
/// growing. Each key leads with the old rank, so every step is a
/// refinement of the previous partition.
fn refine(molecule: &Molecule, mut ranks: Vec<usize>) -> Vec<usize> {
    loop {
        let before = distinct(&ranks);

        let keys: Vec<(usize, Vec<(usize, u8)>)> = molecule
            .atoms
            .iter()
            .map(|atom| {
                let mut environment: Vec<(usize, u8)> = molecule
                    .neighbors(atom.id)
                    .map(|(index, neighbor)| {
                        (ranks[neighbor], bond_code(molecule.bonds[index].kind))
                    })
                    .collect();

                environment.sort_unstable();

                (ranks[atom.id], environment)
            })
            .collect();

        let next = bucket(&keys);

        if distinct(&next) == before {
            return ranks;
        }

        ranks = next;
    }
}

const fn bond_code(kind: BondKind) -> u8 {
    match kind {
        BondKind::Aromatic => 5,
        other => other.order(),
    }
}

/// Dense ranks of `keys` under their natural order, ties collapsed.
fn bucket<K: Ord>(keys: &[K]) -> Vec<usize> {
    let mut sorted: Vec<&K> = keys.iter().collect();

    sorted.sort();
    sorted.dedup();

    keys.iter()
        .map(|key| sorted.binary_search(&key).expect("key was collected"))
        .collect()
}

fn distinct(ranks: &[usize]) -> usize {
    ranks.iter().max().map_or(0, |max| max + 1)
}

fn lowest_tied_rank(ranks: &[usize]) -> Option<usize> {
    let mut counts = vec![0usize; ranks.len()];

    for &rank in ranks {
        counts[rank] += 1;
    }

    counts.iter().position(|&count| count > 1)
}

//! Ring perception: a smallest set of smallest rings, found by taking
//! each bond out in turn, re-connecting its endpoints along a shortest
//! alternate path, and keeping candidates until a minimal cycle basis
//! is complete.

use std::collections::VecDeque;

use crate::graph::Molecule;

/// A cycle of the molecular graph, listing its atoms in traversal order
/// and the indices of its bonds.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Ring {
    pub atoms: Vec<usize>,
    pub bonds: Vec<usize>,
}

impl Ring {
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.atoms.contains(&id)
    }
}

/// Computes the SSSR of `molecule`. Acyclic molecules return an empty
/// set.
pub fn sssr(molecule: &Molecule) -> Vec<Ring> {
    let atoms = molecule.atoms.len();
    let bonds = molecule.bonds.len();

    if atoms == 0 || bonds < atoms {
        // a connected graph needs at least as many edges as nodes to
        // hold a cycle
        return Vec::new();
    }

    let cyclomatic = bonds + 1 - atoms;
    let mut candidates = Vec::new();

    for index in 0..bonds {
        let bond = &molecule.bonds[index];

        if let Some(mut ring) = alternate_path(molecule, bond.atom1, bond.atom2, index) {
            ring.bonds.push(index);
            candidates.push(ring);
        }
    }

    candidates.sort_by_key(Ring::len);

    select_basis(candidates, cyclomatic, bonds)
}

/// The number of SSSR rings each atom belongs to.
pub fn ring_counts(molecule: &Molecule, rings: &[Ring]) -> Vec<u8> {
    let mut counts = vec![0u8; molecule.atoms.len()];

    for ring in rings {
        for &id in &ring.atoms {
            counts[id] = counts[id].saturating_add(1);
        }
    }

    counts
}

/// Shortest path from `start` to `end` avoiding bond `excluded`,
/// returned as a ring candidate with its closing bond still missing.
fn alternate_path(
    molecule: &Molecule,
    start: usize,
    end: usize,
    excluded: usize,
) -> Option<Ring> {
    let size = molecule.atoms.len();
    let mut parent: Vec<Option<(usize, usize)>> = vec![None; size];
    let mut visited = vec![false; size];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    'search: while let Some(id) = queue.pop_front() {
        for (bond_index, neighbor) in molecule.neighbors(id) {
            if bond_index == excluded || visited[neighbor] {
                continue;
            }

            visited[neighbor] = true;
            parent[neighbor] = Some((id, bond_index));
            queue.push_back(neighbor);

            if neighbor == end {
                break 'search;
            }
        }
    }

    if !visited[end] {
        return None;
    }

    let mut atoms = vec![end];
    let mut bonds = Vec::new();
    let mut cursor = end;

    while let Some((previous, bond_index)) = parent[cursor] {
        atoms.push(previous);
        bonds.push(bond_index);
        cursor = previous;
    }

    atoms.reverse();
    bonds.reverse();

    Some(Ring { atoms, bonds })
}

/// Keeps the shortest candidates that are linearly independent over
/// GF(2), up to the cyclomatic number.
fn select_basis(candidates: Vec<Ring>, cyclomatic: usize, bonds: usize) -> Vec<Ring> {
    let words = bonds.div_ceil(64);
    let mut basis: Vec<(Vec<u64>, usize)> = Vec::new();
    let mut selected = Vec::new();

    for ring in candidates {
        let mut vector = vec![0u64; words];

        for &bond in &ring.bonds {
            vector[bond / 64] |= 1 << (bond % 64);
        }

        for (row, pivot) in &basis {
            if vector[pivot / 64] & (1 << (pivot % 64)) != 0 {
                for (word, other) in vector.iter_mut().zip(row) {
                    *word ^= other;
                }
            }
        }

        let Some(pivot) = leading_one(&vector) else {
            continue;
        };

        basis.push((vector, pivot));
        basis.sort_by_key(|&(_, pivot)| std::cmp::Reverse(pivot));
        selected.push(ring);

        if selected.len() == cyclomatic {
            break;
        }
    }

    selected
}

fn leading_one(vector: &[u64]) -> Option<usize> {
    for (index, &word) in vector.iter().enumerate().rev() {
        if word != 0 {
            return Some(index * 64 + (63 - word.leading_zeros() as usize));
        }
    }

    None
}

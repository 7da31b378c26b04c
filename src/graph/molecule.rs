use super::{Atom, Bond};

/// A connected molecular graph. `atoms` and `bonds` are stored by value
/// and addressed by index; bonds hold atom identifiers rather than
/// references, so the graph is an adjacency encoded by value with no
/// reference cycles.
///
/// The builder also records, per atom, its incident bond indices in the
/// order they were written. That order carries the neighbor permutation
/// tetrahedral configurations are defined against, so the writer can
/// re-derive parity after reordering.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub(crate) order: Vec<Vec<usize>>,
    pub(crate) parented: Vec<bool>,
}

impl Molecule {
    /// Incident bond indices of `id`, in as-written order.
    pub fn bond_indices(&self, id: usize) -> &[usize] {
        &self.order[id]
    }

    /// Neighbors of `id` as `(bond index, partner id)` pairs, in
    /// as-written order.
    pub fn neighbors(&self, id: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order[id]
            .iter()
            .map(move |&index| (index, self.bonds[index].partner(id)))
    }

    /// The number of explicit neighbors of `id`.
    pub fn degree(&self, id: usize) -> usize {
        self.order[id].len()
    }

    /// The index of the bond joining `a` and `b`, if one exists.
    pub fn bond_between(&self, a: usize, b: usize) -> Option<usize> {
        self.order[a]
            .iter()
            .copied()
            .find(|&index| self.bonds[index].joins(a, b))
    }

    /// True when `id` was written after another atom it bonds to, i.e.
    /// it is not the head of its fragment. The implicit hydrogen of a
    /// chiral bracket atom sits right after such a preceding atom.
    pub(crate) fn has_parse_parent(&self, id: usize) -> bool {
        self.parented[id]
    }
}

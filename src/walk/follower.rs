use crate::feature::{AtomKind, BondKind, Rnum};

/// Receives the events of a depth-first traversal in writing order.
/// Implementations turn the event stream into a string or any other
/// sequential representation.
pub trait Follower {
    /// A fragment head. Every traversal begins with one, and each
    /// subsequent call starts a disconnected fragment.
    fn root(&mut self, kind: AtomKind);

    /// A step from the current atom to a new one over `bond_kind`.
    fn extend(&mut self, bond_kind: BondKind, atom_kind: AtomKind);

    /// A ring closure digit at the current atom.
    fn join(&mut self, bond_kind: BondKind, rnum: Rnum);

    /// Closes a branch spanning the last `depth` atoms.
    fn pop(&mut self, depth: usize);
}

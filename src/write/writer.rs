use std::fmt::Write as _;

use crate::feature::{AtomKind, BondKind, Rnum};
use crate::walk::Follower;

/// A `Follower` that assembles a SMILES string. Fragments separate with
/// `.`; closing a branch retroactively wraps the branch atoms in
/// parentheses.
///
/// ```
/// use chirr::feature::{Aliphatic, AtomKind, BondKind};
/// use chirr::walk::Follower;
/// use chirr::write::Writer;
///
/// let mut writer = Writer::default();
///
/// writer.root(AtomKind::Aliphatic(Aliphatic::C));
/// writer.extend(BondKind::Double, AtomKind::Aliphatic(Aliphatic::O));
///
/// assert_eq!(writer.write(), "C=O");
/// ```
#[derive(Debug, PartialEq, Eq, Default)]
pub struct Writer {
    out: String,
    starts: Vec<usize>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The assembled string.
    pub fn write(self) -> String {
        self.out
    }
}

impl Follower for Writer {
    fn root(&mut self, kind: AtomKind) {
        if !self.out.is_empty() {
            self.out.push('.');
        }

        self.starts.push(self.out.len());
        write!(self.out, "{kind}").expect("write to string");
    }

    fn extend(&mut self, bond_kind: BondKind, atom_kind: AtomKind) {
        self.starts.push(self.out.len());
        write!(self.out, "{bond_kind}{atom_kind}").expect("write to string");
    }

    fn join(&mut self, bond_kind: BondKind, rnum: Rnum) {
        write!(self.out, "{bond_kind}{rnum}").expect("write to string");
    }

    fn pop(&mut self, depth: usize) {
        assert!(depth < self.starts.len(), "overpop");

        let at = self.starts[self.starts.len() - depth];

        self.out.insert(at, '(');
        self.out.push(')');
        self.starts.truncate(self.starts.len() - depth);
    }
}

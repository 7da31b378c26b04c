use std::collections::HashMap;

use super::{reconcile::reconcile, Atom, Bond, Molecule};
use crate::error::ParseError;
use crate::feature::{AtomKind, BondKind, Rnum};

/// Builds molecules from the atom, bond, branch, and ring events the
/// reader emits.
///
/// Ring openings are held as placeholder edges so every node's edge
/// list keeps its as-written neighbor order; the closing digit rewrites
/// the placeholder in place. That order is what tetrahedral
/// configurations are defined against, so it must survive into the
/// finished [`Molecule`].
#[derive(Debug, Default)]
pub struct Builder {
    nodes: Vec<Node>,
    bonds: Vec<Bond>,
    prev: Option<usize>,
    stack: Vec<usize>,
    opens: HashMap<Rnum, Open>,
    errors: Vec<ParseError>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Starts a new fragment with `kind`.
    pub fn root(&mut self, kind: AtomKind) {
        let id = self.nodes.len();

        self.nodes.push(Node::root(kind));
        self.prev = Some(id);
    }

    /// Attaches `kind` to the previous atom through `bond`.
    pub fn extend(&mut self, bond: BondKind, kind: AtomKind) {
        let sid = self.prev.expect("extend without a previous atom");
        let tid = self.nodes.len();

        self.nodes.push(Node::child(bond.reverse(), sid, kind));
        self.nodes[sid].edges.push(Edge {
            kind: bond,
            target: Target::Atom(tid),
        });
        self.bonds.push(Bond::new(sid, tid, bond));
        self.prev = Some(tid);
    }

    /// Opens ring number `rnum` at the previous atom, or closes it when
    /// already open.
    pub fn join(&mut self, bond: BondKind, rnum: Rnum) {
        let sid = self.prev.expect("join without a previous atom");

        let Some(open) = self.opens.remove(&rnum) else {
            let edge = self.nodes[sid].edges.len();

            self.opens.insert(rnum, Open { sid, edge });
            self.nodes[sid].edges.push(Edge {
                kind: bond,
                target: Target::Open(rnum),
            });

            return;
        };

        if open.sid == sid {
            self.errors.push(ParseError::SelfClosure(sid));
            self.nodes[open.sid].edges[open.edge].target = Target::Dead;

            return;
        }

        if self.bonds.iter().any(|bond| bond.joins(open.sid, sid)) {
            self.errors.push(ParseError::DuplicateBond(open.sid, sid));
            self.nodes[open.sid].edges[open.edge].target = Target::Dead;

            return;
        }

        let open_kind = self.nodes[open.sid].edges[open.edge].kind;

        match reconcile(open_kind, bond) {
            Some((open_side, close_side)) => {
                let placeholder = &mut self.nodes[open.sid].edges[open.edge];

                placeholder.kind = open_side;
                placeholder.target = Target::Atom(sid);

                self.nodes[sid].edges.push(Edge {
                    kind: close_side,
                    target: Target::Atom(open.sid),
                });
                self.bonds.push(Bond::new(open.sid, sid, open_side));
            }
            None => {
                self.errors.push(ParseError::RingBondConflict(open.sid, sid));
                self.nodes[open.sid].edges[open.edge].target = Target::Dead;
            }
        }
    }

    /// Saves the previous atom at `(`. False when there is none to save.
    pub fn open_branch(&mut self) -> bool {
        match self.prev {
            Some(prev) => {
                self.stack.push(prev);

                true
            }
            None => false,
        }
    }

    /// Restores the previous atom at `)`. False on an empty stack.
    pub fn close_branch(&mut self) -> bool {
        match self.stack.pop() {
            Some(prev) => {
                self.prev = Some(prev);

                true
            }
            None => false,
        }
    }

    /// Ends the current fragment at `.`. Ring openings survive, since
    /// closures may cross fragments.
    pub fn split(&mut self) {
        self.prev = None;
    }

    /// Finishes the build: reports structural leftovers, resolves
    /// elided bonds, computes implicit hydrogens, and splits the graph
    /// into connected molecules renumbered in parse order.
    pub fn finish(mut self) -> (Vec<Molecule>, Vec<ParseError>) {
        if !self.stack.is_empty() {
            self.errors.push(ParseError::UnbalancedParenthesis);
        }

        let mut dangling: Vec<(Rnum, Open)> = self.opens.drain().collect();

        dangling.sort_by_key(|(rnum, _)| *rnum);

        for (rnum, open) in dangling {
            self.errors.push(ParseError::DanglingRingClosure(rnum));
            self.nodes[open.sid].edges[open.edge].target = Target::Dead;
        }

        for node in &mut self.nodes {
            node.edges.retain(|edge| !matches!(edge.target, Target::Dead));
        }

        self.resolve_elided();

        let molecules = self.split_components();

        (molecules, self.errors)
    }

    /// An absent bond symbol means aromatic between two aromatic atoms
    /// and single otherwise.
    fn resolve_elided(&mut self) {
        let aromatic: Vec<bool> = self.nodes.iter().map(|node| node.kind.is_aromatic()).collect();

        for bond in &mut self.bonds {
            if bond.kind == BondKind::Elided {
                bond.kind = if aromatic[bond.atom1] && aromatic[bond.atom2] {
                    BondKind::Aromatic
                } else {
                    BondKind::Single
                };
            }
        }

        for id in 0..self.nodes.len() {
            for index in 0..self.nodes[id].edges.len() {
                if self.nodes[id].edges[index].kind != BondKind::Elided {
                    continue;
                }

                let Target::Atom(tid) = self.nodes[id].edges[index].target else {
                    continue;
                };

                self.nodes[id].edges[index].kind = if aromatic[id] && aromatic[tid] {
                    BondKind::Aromatic
                } else {
                    BondKind::Single
                };
            }
        }
    }

    fn split_components(&self) -> Vec<Molecule> {
        let size = self.nodes.len();
        let mut component = vec![usize::MAX; size];
        let mut count = 0;

        for start in 0..size {
            if component[start] != usize::MAX {
                continue;
            }

            let mut stack = vec![start];

            component[start] = count;

            while let Some(id) = stack.pop() {
                for edge in &self.nodes[id].edges {
                    let Target::Atom(tid) = edge.target else {
                        continue;
                    };

                    if component[tid] == usize::MAX {
                        component[tid] = count;
                        stack.push(tid);
                    }
                }
            }

            count += 1;
        }

        let mut locals: HashMap<usize, usize> = HashMap::new();
        let mut molecules = vec![Molecule::default(); count];

        for (id, node) in self.nodes.iter().enumerate() {
            let molecule = &mut molecules[component[id]];
            let local = molecule.atoms.len();

            locals.insert(id, local);

            let order_sum: u8 = node
                .edges
                .iter()
                .map(|edge| edge.kind.order())
                .sum();

            molecule.atoms.push(Atom {
                id: local,
                kind: node.kind,
                hydrogens: node.kind.suppressed_hydrogens(order_sum),
            });
            molecule.order.push(Vec::with_capacity(node.edges.len()));
            molecule.parented.push(node.parented);
        }

        for bond in &self.bonds {
            let molecule = &mut molecules[component[bond.atom1]];

            molecule.bonds.push(Bond::new(
                locals[&bond.atom1],
                locals[&bond.atom2],
                bond.kind,
            ));
        }

        for (id, node) in self.nodes.iter().enumerate() {
            let molecule = &mut molecules[component[id]];
            let local = locals[&id];

            for edge in &node.edges {
                let Target::Atom(tid) = edge.target else {
                    continue;
                };

                let index = molecule
                    .bonds
                    .iter()
                    .position(|bond| bond.joins(local, locals[&tid]))
                    .expect("edge without bond");

                molecule.order[local].push(index);
            }
        }

        molecules
    }
}

#[derive(Debug)]
struct Node {
    kind: AtomKind,
    edges: Vec<Edge>,
    parented: bool,
}

impl Node {
    const fn root(kind: AtomKind) -> Self {
        Self {
            kind,
            edges: Vec::new(),
            parented: false,
        }
    }

    fn child(kind: BondKind, sid: usize, atom_kind: AtomKind) -> Self {
        Self {
            kind: atom_kind,
            edges: vec![Edge {
                kind,
                target: Target::Atom(sid),
            }],
            parented: true,
        }
    }
}

#[derive(Debug)]
struct Edge {
    kind: BondKind,
    target: Target,
}

#[derive(Debug, PartialEq, Eq)]
enum Target {
    Atom(usize),
    Open(Rnum),
    Dead,
}

#[derive(Debug)]
struct Open {
    sid: usize,
    edge: usize,
}

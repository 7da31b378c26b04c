use std::collections::HashMap;

use super::digits::DigitPool;
use super::Follower;
use crate::feature::{AtomKind, BondKind, Rnum};
use crate::graph::Molecule;

/// Walks `molecule` depth-first, lowest rank first, reporting the
/// traversal to `follower` in writing order.
///
/// The walk runs in two passes. The first plans a spanning tree: at
/// every atom the unvisited neighbors are taken in ascending rank, so
/// all but the last become parenthesized branches and the last carries
/// the chain; edges to visited atoms become ring closures, recorded at
/// both endpoints. The second pass emits atoms, ring digits, and bonds
/// off the plan. With `canonical` set, directional bonds are rewritten
/// into their normal form first; otherwise they are only dropped when
/// their double bond is missing.
pub fn walk<F: Follower>(molecule: &Molecule, ranks: &[usize], canonical: bool, follower: &mut F) {
    if molecule.atoms.is_empty() {
        return;
    }

    let plan = Plan::build(molecule, ranks);
    let kinds = if canonical {
        normalize_directions(molecule, &plan)
    } else {
        demote_unpaired(molecule)
    };
    let flips = parity_flips(molecule, &plan);

    emit(molecule, &plan, &kinds, &flips, follower);
}

struct Plan {
    roots: Vec<usize>,
    parent: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    opens: Vec<Vec<usize>>,
    closes: Vec<Vec<usize>>,
    position: Vec<usize>,
    tree: Vec<bool>,
    /// Length of the inline chain below each atom, itself included.
    /// Branch atoms merge into their head when the branch closes, so
    /// this is the depth a `pop` has to take.
    spine: Vec<usize>,
}

impl Plan {
    fn build(molecule: &Molecule, ranks: &[usize]) -> Self {
        let atoms = molecule.atoms.len();
        let bonds = molecule.bonds.len();

        let mut plan = Self {
            roots: Vec::new(),
            parent: vec![None; atoms],
            children: vec![Vec::new(); atoms],
            opens: vec![Vec::new(); atoms],
            closes: vec![Vec::new(); atoms],
            position: vec![usize::MAX; atoms],
            tree: vec![false; bonds],
            spine: vec![1; atoms],
        };

        let mut visited = vec![false; atoms];
        let mut ring = vec![false; bonds];
        let mut order = Vec::with_capacity(atoms);

        while let Some(root) = (0..atoms)
            .filter(|&id| !visited[id])
            .min_by_key(|&id| ranks[id])
        {
            plan.roots.push(root);

            let mut stack: Vec<(usize, Option<(usize, usize)>)> = vec![(root, None)];

            while let Some((atom, via)) = stack.pop() {
                if visited[atom] {
                    // claimed through another path since being stacked;
                    // the scan of that path recorded the ring closure
                    continue;
                }

                visited[atom] = true;
                plan.position[atom] = order.len();
                order.push(atom);

                if let Some((bond, parent)) = via {
                    plan.parent[atom] = Some(bond);
                    plan.tree[bond] = true;
                    plan.children[parent].push(bond);
                }

                let mut neighbors: Vec<(usize, usize)> = molecule.neighbors(atom).collect();

                neighbors.sort_by_key(|&(_, neighbor)| ranks[neighbor]);

                for &(bond, neighbor) in &neighbors {
                    if Some(bond) == plan.parent[atom] {
                        continue;
                    }

                    if visited[neighbor] && !plan.tree[bond] && !ring[bond] {
                        ring[bond] = true;
                        plan.opens[neighbor].push(bond);
                        plan.closes[atom].push(bond);
                    }
                }

                for &(bond, neighbor) in neighbors.iter().rev() {
                    if !visited[neighbor] {
                        stack.push((neighbor, Some((bond, atom))));
                    }
                }
            }
        }

        for &atom in order.iter().rev() {
            if let Some(&bond) = plan.children[atom].last() {
                let child = molecule.bonds[bond].partner(atom);

                plan.spine[atom] += plan.spine[child];
            }
        }

        plan
    }

    /// Where the symbol of `bond` lands in the output: tree bonds print
    /// before their child atom, ring bonds right after their opening
    /// atom.
    fn bond_position(&self, molecule: &Molecule, bond: usize) -> usize {
        let a = self.position[molecule.bonds[bond].atom1];
        let b = self.position[molecule.bonds[bond].atom2];

        if self.tree[bond] {
            2 * a.max(b)
        } else {
            2 * a.min(b) + 1
        }
    }

    /// The endpoint of `bond` written first.
    fn written_source(&self, molecule: &Molecule, bond: usize) -> usize {
        let bond = &molecule.bonds[bond];

        if self.position[bond.atom1] <= self.position[bond.atom2] {
            bond.atom1
        } else {
            bond.atom2
        }
    }
}

fn emit<F: Follower>(
    molecule: &Molecule,
    plan: &Plan,
    kinds: &[BondKind],
    flips: &[bool],
    follower: &mut F,
) {
    enum Step {
        Atom(usize, Option<usize>),
        Pop(usize),
    }

    let mut pool = DigitPool::new();
    let mut digits: HashMap<usize, Rnum> = HashMap::new();

    for &root in &plan.roots {
        let mut stack = vec![Step::Atom(root, None)];

        while let Some(step) = stack.pop() {
            let (atom, via) = match step {
                Step::Pop(depth) => {
                    follower.pop(depth);
                    continue;
                }
                Step::Atom(atom, via) => (atom, via),
            };

            let kind = emission_kind(molecule, atom, flips[atom], kinds);

            match via {
                None => follower.root(kind),
                Some(bond) => {
                    let parent = molecule.bonds[bond].partner(atom);

                    follower.extend(written_kind(molecule, kinds, bond, parent), kind);
                }
            }

            for &bond in &plan.closes[atom] {
                let rnum = digits.remove(&bond).expect("digit opened before closing");

                pool.release(rnum);
                follower.join(BondKind::Elided, rnum);
            }

            for &bond in &plan.opens[atom] {
                let rnum = pool.reserve();

                digits.insert(bond, rnum);
                follower.join(written_kind(molecule, kinds, bond, atom), rnum);
            }

            let count = plan.children[atom].len();

            for (index, &bond) in plan.children[atom].iter().enumerate().rev() {
                let child = molecule.bonds[bond].partner(atom);

                if index + 1 != count {
                    stack.push(Step::Pop(plan.spine[child]));
                }

                stack.push(Step::Atom(child, Some(bond)));
            }
        }
    }
}

/// The atom token to write: configuration re-oriented for the new
/// neighbor order, brackets dropped when the organic subset suffices.
fn emission_kind(molecule: &Molecule, atom: usize, flip: bool, kinds: &[BondKind]) -> AtomKind {
    let sum: u8 = molecule
        .bond_indices(atom)
        .iter()
        .map(|&bond| kinds[bond].order())
        .sum();

    let mut kind = molecule.atoms[atom].kind;

    if flip {
        if let AtomKind::Bracket {
            configuration: Some(configuration),
            ..
        } = &mut kind
        {
            *configuration = configuration.flipped();
        }
    }

    kind.debracket(sum)
}

/// The bond symbol to write when traversing `bond` out of `from`.
/// Plain singles elide except between two aromatic atoms, where `-` is
/// forced; aromatic bonds elide only between two aromatic atoms.
fn written_kind(molecule: &Molecule, kinds: &[BondKind], bond: usize, from: usize) -> BondKind {
    let kind = oriented(molecule, kinds, bond, from);
    let aromatic_ends = molecule.atoms[molecule.bonds[bond].atom1].is_aromatic()
        && molecule.atoms[molecule.bonds[bond].atom2].is_aromatic();

    match kind {
        BondKind::Single => {
            if aromatic_ends {
                BondKind::Single
            } else {
                BondKind::Elided
            }
        }
        BondKind::Aromatic => {
            if aromatic_ends {
                BondKind::Elided
            } else {
                BondKind::Aromatic
            }
        }
        other => other,
    }
}

/// `kinds[bond]` as seen leaving `from`.
fn oriented(molecule: &Molecule, kinds: &[BondKind], bond: usize, from: usize) -> BondKind {
    if molecule.bonds[bond].atom1 == from {
        kinds[bond]
    } else {
        kinds[bond].reverse()
    }
}

/// Rewrites the directional bonds around every fully marked double bond
/// into the canonical form: the earliest-written marker prints `/`, the
/// far side follows from the measured geometry (matching outward
/// directions mean the reference neighbors are on the same side). All
/// remaining directional values are demoted to plain singles, which
/// also drops half-marked and unpaired markers.
fn normalize_directions(molecule: &Molecule, plan: &Plan) -> Vec<BondKind> {
    let original: Vec<BondKind> = molecule.bonds.iter().map(|bond| bond.kind).collect();
    let mut kinds = original.clone();
    let mut claimed = vec![false; kinds.len()];

    let mut doubles: Vec<usize> = (0..kinds.len())
        .filter(|&index| original[index] == BondKind::Double)
        .collect();

    doubles.sort_by_key(|&index| plan.bond_position(molecule, index));

    for index in doubles {
        let b1 = molecule.bonds[index].atom1;
        let b2 = molecule.bonds[index].atom2;

        let (Some(m1), Some(m2)) = (
            marked_edge(molecule, &original, index, b1),
            marked_edge(molecule, &original, index, b2),
        ) else {
            continue;
        };

        let n1 = molecule.bonds[m1].partner(b1);
        let n2 = molecule.bonds[m2].partner(b2);
        let mut cis =
            oriented(molecule, &original, m1, b1) == oriented(molecule, &original, m2, b2);

        let (Some(e1), Some(e2)) = (
            output_edge(molecule, plan, &kinds, &claimed, index, b1),
            output_edge(molecule, plan, &kinds, &claimed, index, b2),
        ) else {
            continue;
        };

        // moving a marker across one end mirrors the geometry
        if molecule.bonds[e1].partner(b1) != n1 {
            cis = !cis;
        }
        if molecule.bonds[e2].partner(b2) != n2 {
            cis = !cis;
        }

        let (first, first_end, second, second_end) =
            if plan.bond_position(molecule, e1) <= plan.bond_position(molecule, e2) {
                (e1, b1, e2, b2)
            } else {
                (e2, b2, e1, b1)
            };

        if !claimed[first] {
            let source = plan.written_source(molecule, first);

            kinds[first] = if molecule.bonds[first].atom1 == source {
                BondKind::Up
            } else {
                BondKind::Down
            };
            claimed[first] = true;
        }

        if !claimed[second] {
            let out_first = oriented(molecule, &kinds, first, first_end);
            let out_second = if cis { out_first } else { out_first.reverse() };

            kinds[second] = if molecule.bonds[second].atom1 == second_end {
                out_second
            } else {
                out_second.reverse()
            };
            claimed[second] = true;
        }
    }

    for index in 0..kinds.len() {
        if kinds[index].is_directional() && !claimed[index] {
            kinds[index] = BondKind::Single;
        }
    }

    kinds
}

/// The first directional bond at `end` in written order, excluding the
/// double bond itself.
fn marked_edge(
    molecule: &Molecule,
    kinds: &[BondKind],
    double: usize,
    end: usize,
) -> Option<usize> {
    molecule
        .bond_indices(end)
        .iter()
        .copied()
        .find(|&bond| bond != double && kinds[bond].is_directional())
}

/// The bond that carries the marker for `end` in the output: a claimed
/// neighbor if one exists (shared markers in conjugated chains), else
/// the earliest-written single bond.
fn output_edge(
    molecule: &Molecule,
    plan: &Plan,
    kinds: &[BondKind],
    claimed: &[bool],
    double: usize,
    end: usize,
) -> Option<usize> {
    let candidates: Vec<usize> = molecule
        .bond_indices(end)
        .iter()
        .copied()
        .filter(|&bond| {
            bond != double && matches!(kinds[bond], BondKind::Single | BondKind::Up | BondKind::Down)
        })
        .collect();

    if let Some(&bond) = candidates.iter().find(|&&bond| claimed[bond]) {
        return Some(bond);
    }

    candidates
        .into_iter()
        .min_by_key(|&bond| plan.bond_position(molecule, bond))
}

/// In the non-canonical mode markers keep their written values, but a
/// directional bond with no double bond next to it still has nothing
/// to mark.
fn demote_unpaired(molecule: &Molecule) -> Vec<BondKind> {
    let mut kinds: Vec<BondKind> = molecule.bonds.iter().map(|bond| bond.kind).collect();

    for index in 0..kinds.len() {
        if !kinds[index].is_directional() {
            continue;
        }

        let bond = &molecule.bonds[index];
        let paired = [bond.atom1, bond.atom2].into_iter().any(|end| {
            molecule
                .bond_indices(end)
                .iter()
                .any(|&other| molecule.bonds[other].kind == BondKind::Double)
        });

        if !paired {
            kinds[index] = BondKind::Single;
        }
    }

    kinds
}

const HYDROGEN: usize = usize::MAX;

/// Tetrahedral parity against the written neighbor order. The implicit
/// hydrogen sits right after the preceding atom, or first when there is
/// none; ring digits occupy the position where they appear.
fn parity_flips(molecule: &Molecule, plan: &Plan) -> Vec<bool> {
    let mut flips = vec![false; molecule.atoms.len()];

    for atom in &molecule.atoms {
        let Some(configuration) = atom.configuration() else {
            continue;
        };

        if !configuration.is_tetrahedral() {
            continue;
        }

        let id = atom.id;
        let hydrogen = atom.hydrogens > 0;

        let mut parsed: Vec<usize> = molecule.neighbors(id).map(|(_, partner)| partner).collect();

        if hydrogen {
            let slot = if molecule.has_parse_parent(id) { 1 } else { 0 };

            parsed.insert(slot.min(parsed.len()), HYDROGEN);
        }

        let mut emitted = Vec::with_capacity(parsed.len());

        if let Some(bond) = plan.parent[id] {
            emitted.push(molecule.bonds[bond].partner(id));
        }

        if hydrogen {
            emitted.push(HYDROGEN);
        }

        for &bond in &plan.closes[id] {
            emitted.push(molecule.bonds[bond].partner(id));
        }

        for &bond in &plan.opens[id] {
            emitted.push(molecule.bonds[bond].partner(id));
        }

        for &bond in &plan.children[id] {
            emitted.push(molecule.bonds[bond].partner(id));
        }

        flips[id] = permutation_is_odd(&parsed, &emitted);
    }

    flips
}

fn permutation_is_odd(from: &[usize], to: &[usize]) -> bool {
    let targets: Vec<usize> = from
        .iter()
        .map(|item| {
            to.iter()
                .position(|other| other == item)
                .expect("both orders hold the same neighbors")
        })
        .collect();

    let mut odd = false;

    for i in 0..targets.len() {
        for j in (i + 1)..targets.len() {
            if targets[i] > targets[j] {
                odd = !odd;
            }
        }
    }

    odd
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn permutation_parity() {
        assert!(!permutation_is_odd(&[1, 2, 3], &[1, 2, 3]));
        assert!(permutation_is_odd(&[1, 2, 3], &[1, 3, 2]));
        assert!(!permutation_is_odd(&[1, 2, 3], &[2, 3, 1]));
        assert!(permutation_is_odd(&[1, 2, 3, 4], &[2, 1, 3, 4]));
    }
}

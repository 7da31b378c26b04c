use crate::feature::BondKind;

/// Merges the bond kinds written at the two ends of a ring closure.
/// Both arguments read from their own atom toward the other, so a valid
/// directional pair is complementary rather than equal. Returns the
/// kinds to store on the opening and closing side, or `None` when the
/// two ends disagree.
pub fn reconcile(open: BondKind, close: BondKind) -> Option<(BondKind, BondKind)> {
    use BondKind::{Down, Elided, Up};

    match (open, close) {
        (Up, Up) | (Down, Down) => None,
        (Up, Down) | (Down, Up) => Some((open, close)),
        (Up, Elided) => Some((Up, Down)),
        (Down, Elided) => Some((Down, Up)),
        (Elided, Up) => Some((Down, Up)),
        (Elided, Down) => Some((Up, Down)),
        (Elided, other) | (other, Elided) => Some((other, other)),
        (a, b) if a == b => Some((a, b)),
        _ => None,
    }
}

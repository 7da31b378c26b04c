use super::scanner::Scanner;
use crate::feature::BondKind;

/// Reads an explicit bond symbol, or `Elided` when none is present.
pub fn read_bond(scanner: &mut Scanner) -> BondKind {
    let kind = match scanner.peek() {
        Some('-') => BondKind::Single,
        Some('=') => BondKind::Double,
        Some('#') => BondKind::Triple,
        Some('$') => BondKind::Quadruple,
        Some(':') => BondKind::Aromatic,
        Some('/') => BondKind::Up,
        Some('\\') => BondKind::Down,
        _ => return BondKind::Elided,
    };

    scanner.pop();

    kind
}

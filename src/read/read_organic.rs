use super::scanner::Scanner;
use crate::feature::{Aliphatic, Aromatic, AtomKind};

/// Reads an organic-subset atom or a bare star, if one starts at the
/// cursor.
pub fn read_organic(scanner: &mut Scanner) -> Option<AtomKind> {
    let kind = match scanner.peek()? {
        '*' => AtomKind::Star,
        'B' => {
            if scanner.peek_at(1) == Some(&'r') {
                scanner.pop();
                AtomKind::Aliphatic(Aliphatic::Br)
            } else {
                AtomKind::Aliphatic(Aliphatic::B)
            }
        }
        'C' => {
            if scanner.peek_at(1) == Some(&'l') {
                scanner.pop();
                AtomKind::Aliphatic(Aliphatic::Cl)
            } else {
                AtomKind::Aliphatic(Aliphatic::C)
            }
        }
        'N' => AtomKind::Aliphatic(Aliphatic::N),
        'O' => AtomKind::Aliphatic(Aliphatic::O),
        'P' => AtomKind::Aliphatic(Aliphatic::P),
        'S' => AtomKind::Aliphatic(Aliphatic::S),
        'F' => AtomKind::Aliphatic(Aliphatic::F),
        'I' => AtomKind::Aliphatic(Aliphatic::I),
        'b' => AtomKind::Aromatic(Aromatic::B),
        'c' => AtomKind::Aromatic(Aromatic::C),
        'n' => AtomKind::Aromatic(Aromatic::N),
        'o' => AtomKind::Aromatic(Aromatic::O),
        'p' => AtomKind::Aromatic(Aromatic::P),
        's' => AtomKind::Aromatic(Aromatic::S),
        _ => return None,
    };

    scanner.pop();

    Some(kind)
}

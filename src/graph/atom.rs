use crate::feature::{AtomKind, BracketSymbol, Configuration, Element};

/// An atom of a [`Molecule`](super::Molecule). Identifiers are assigned
/// in parse order starting at zero, so `atoms[i].id == i` for freshly
/// parsed molecules. `hydrogens` holds the implicit count computed for
/// organic-subset atoms, or the written count of a bracket atom.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Atom {
    pub id: usize,
    pub kind: AtomKind,
    pub hydrogens: u8,
}

impl Atom {
    /// The element, if any. Stars have none.
    pub fn element(&self) -> Option<Element> {
        self.kind.element()
    }

    /// The atomic number, with zero for the wildcard.
    pub fn atomic_number(&self) -> u32 {
        self.element().map_or(0, |element| element.atomic_number())
    }

    /// The symbol as written: `C`, `Cl`, `c`, `se`, `*`, and so on.
    pub fn symbol(&self) -> &'static str {
        match &self.kind {
            AtomKind::Star => "*",
            AtomKind::Aliphatic(_) | AtomKind::Bracket {
                symbol: BracketSymbol::Element(_),
                ..
            } => self.element().map_or("*", |element| element.symbol()),
            AtomKind::Aromatic(_) | AtomKind::Bracket {
                symbol: BracketSymbol::Aromatic(_),
                ..
            } => match self.element() {
                Some(Element::B) => "b",
                Some(Element::C) => "c",
                Some(Element::N) => "n",
                Some(Element::O) => "o",
                Some(Element::P) => "p",
                Some(Element::S) => "s",
                Some(Element::Se) => "se",
                Some(Element::As) => "as",
                _ => "*",
            },
            AtomKind::Bracket {
                symbol: BracketSymbol::Star,
                ..
            } => "*",
        }
    }

    pub fn is_aromatic(&self) -> bool {
        self.kind.is_aromatic()
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self.kind, AtomKind::Bracket { .. })
    }

    pub fn charge(&self) -> i8 {
        match &self.kind {
            AtomKind::Bracket { charge, .. } => charge.map_or(0, crate::feature::Charge::value),
            _ => 0,
        }
    }

    pub fn isotope(&self) -> Option<u16> {
        match &self.kind {
            AtomKind::Bracket { isotope, .. } => *isotope,
            _ => None,
        }
    }

    pub fn configuration(&self) -> Option<Configuration> {
        self.kind.configuration()
    }

    /// The atom class written as `:N`, if any.
    pub fn map(&self) -> Option<u16> {
        match &self.kind {
            AtomKind::Bracket { map, .. } => *map,
            _ => None,
        }
    }
}

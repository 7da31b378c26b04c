use std::fmt;

use super::{BracketAromatic, Element};

/// Atomic symbols capable of appearing inside a bracket atom.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BracketSymbol {
    Star,
    Element(Element),
    Aromatic(BracketAromatic),
}

impl fmt::Display for BracketSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Star => write!(f, "*"),
            Self::Element(element) => write!(f, "{}", element.symbol()),
            Self::Aromatic(aromatic) => write!(f, "{aromatic}"),
        }
    }
}

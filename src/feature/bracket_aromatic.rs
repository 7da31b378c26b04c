use std::fmt;

use super::Element;

/// Symbols eligible for aromatic bracket atoms. `se` and `as` may only
/// appear bracketed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BracketAromatic {
    B,
    C,
    N,
    O,
    P,
    S,
    Se,
    As,
}

impl From<BracketAromatic> for Element {
    fn from(val: BracketAromatic) -> Self {
        match val {
            BracketAromatic::B => Element::B,
            BracketAromatic::C => Element::C,
            BracketAromatic::N => Element::N,
            BracketAromatic::O => Element::O,
            BracketAromatic::P => Element::P,
            BracketAromatic::S => Element::S,
            BracketAromatic::Se => Element::Se,
            BracketAromatic::As => Element::As,
        }
    }
}

impl fmt::Display for BracketAromatic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                BracketAromatic::B => "b",
                BracketAromatic::C => "c",
                BracketAromatic::N => "n",
                BracketAromatic::O => "o",
                BracketAromatic::P => "p",
                BracketAromatic::S => "s",
                BracketAromatic::Se => "se",
                BracketAromatic::As => "as",
            }
        )
    }
}

use std::convert::TryFrom;
use std::fmt;

use super::Element;

/// Organic-subset symbols written without brackets and filled with
/// implicit hydrogens.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Aliphatic {
    B,
    C,
    N,
    O,
    P,
    S,
    F,
    Cl,
    Br,
    I,
}

impl Aliphatic {
    /// The valence targets available to this symbol.
    pub const fn targets(&self) -> &'static [u8] {
        match self {
            Self::B => &[3],
            Self::C => &[4],
            Self::N | Self::P => &[3, 5],
            Self::O => &[2],
            Self::S => &[2, 4, 6],
            Self::F | Self::Cl | Self::Br | Self::I => &[1],
        }
    }
}

impl TryFrom<Element> for Aliphatic {
    type Error = ();

    fn try_from(value: Element) -> Result<Self, Self::Error> {
        match value {
            Element::B => Ok(Self::B),
            Element::C => Ok(Self::C),
            Element::N => Ok(Self::N),
            Element::O => Ok(Self::O),
            Element::P => Ok(Self::P),
            Element::S => Ok(Self::S),
            Element::F => Ok(Self::F),
            Element::Cl => Ok(Self::Cl),
            Element::Br => Ok(Self::Br),
            Element::I => Ok(Self::I),
            _ => Err(()),
        }
    }
}

impl From<Aliphatic> for Element {
    fn from(val: Aliphatic) -> Self {
        match val {
            Aliphatic::B => Self::B,
            Aliphatic::C => Self::C,
            Aliphatic::N => Self::N,
            Aliphatic::O => Self::O,
            Aliphatic::P => Self::P,
            Aliphatic::S => Self::S,
            Aliphatic::F => Self::F,
            Aliphatic::Cl => Self::Cl,
            Aliphatic::Br => Self::Br,
            Aliphatic::I => Self::I,
        }
    }
}

impl fmt::Display for Aliphatic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::B => "B",
                Self::C => "C",
                Self::N => "N",
                Self::O => "O",
                Self::P => "P",
                Self::S => "S",
                Self::F => "F",
                Self::Cl => "Cl",
                Self::Br => "Br",
                Self::I => "I",
            }
        )
    }
}

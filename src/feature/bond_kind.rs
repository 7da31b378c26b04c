use std::fmt;

/// A bond as written. `Elided` stands for the absent bond symbol between
/// adjacent atoms; the graph builder resolves it to single or aromatic.
/// `Up` and `Down` are directional single bonds, read from the atom that
/// was written first toward the atom that was written second.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BondKind {
    Elided,
    Single,
    Double,
    Triple,
    Quadruple,
    Aromatic,
    Up,
    Down,
}

impl BondKind {
    /// The bond order. Directional and aromatic bonds count as one.
    pub const fn order(&self) -> u8 {
        match self {
            Self::Elided | Self::Single | Self::Up | Self::Down | Self::Aromatic => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::Quadruple => 4,
        }
    }

    /// The kind as seen when the bond is read in the opposite direction.
    /// Only directional kinds change.
    pub const fn reverse(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            other => *other,
        }
    }

    pub const fn is_aromatic(&self) -> bool {
        matches!(self, Self::Aromatic)
    }

    pub const fn is_directional(&self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Elided => "",
                Self::Single => "-",
                Self::Double => "=",
                Self::Triple => "#",
                Self::Quadruple => "$",
                Self::Aromatic => ":",
                Self::Up => "/",
                Self::Down => "\\",
            }
        )
    }
}

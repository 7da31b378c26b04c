use std::convert::TryFrom;
use std::fmt;

use super::{
    Aliphatic, Aromatic, BracketAromatic, BracketSymbol, Charge, Configuration, Element,
    VirtualHydrogen,
};

/// Minimal context-sensitive representation of an atom kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AtomKind {
    Star,
    Aliphatic(Aliphatic),
    Aromatic(Aromatic),
    Bracket {
        isotope: Option<u16>,
        symbol: BracketSymbol,
        configuration: Option<Configuration>,
        hcount: Option<VirtualHydrogen>,
        charge: Option<Charge>,
        map: Option<u16>,
    },
}

impl AtomKind {
    /// Returns true if the kind was written as aromatic.
    pub const fn is_aromatic(&self) -> bool {
        match self {
            Self::Aromatic(_) => true,
            Self::Aliphatic(_) | Self::Star => false,
            Self::Bracket { symbol, .. } => matches!(symbol, BracketSymbol::Aromatic(_)),
        }
    }

    /// The element behind this kind, if any. Stars have none.
    pub fn element(&self) -> Option<Element> {
        match self {
            Self::Star => None,
            Self::Aliphatic(aliphatic) => Some((*aliphatic).into()),
            Self::Aromatic(aromatic) => Some((*aromatic).into()),
            Self::Bracket { symbol, .. } => match symbol {
                BracketSymbol::Star => None,
                BracketSymbol::Element(element) => Some(*element),
                BracketSymbol::Aromatic(aromatic) => Some((*aromatic).into()),
            },
        }
    }

    /// The valence targets for this kind. Stars and element/charge
    /// combinations without a known valence model return an empty slice.
    pub fn targets(&self) -> &'static [u8] {
        match self {
            Self::Star => &[],
            Self::Aliphatic(aliphatic) => aliphatic.targets(),
            Self::Aromatic(aromatic) => aromatic.targets(),
            Self::Bracket { symbol, charge, .. } => match symbol {
                BracketSymbol::Star => &[],
                BracketSymbol::Aromatic(aromatic) => {
                    elemental_targets(Element::from(*aromatic), *charge)
                }
                BracketSymbol::Element(element) => elemental_targets(*element, *charge),
            },
        }
    }

    /// The configuration tag, if any. Only bracket atoms carry one.
    pub const fn configuration(&self) -> Option<Configuration> {
        match self {
            Self::Bracket { configuration, .. } => *configuration,
            _ => None,
        }
    }

    /// Hydrogens this kind implies given the sum of its bond orders.
    /// Organic-subset atoms fill to the smallest reachable valence
    /// target; aromatic ones surrender one slot to the pi system;
    /// bracket atoms carry exactly their written count.
    pub fn suppressed_hydrogens(&self, bond_order_sum: u8) -> u8 {
        match self {
            Self::Star => 0,
            Self::Aliphatic(aliphatic) => subvalence(aliphatic.targets(), bond_order_sum),
            Self::Aromatic(aromatic) => {
                subvalence(aromatic.targets(), bond_order_sum).saturating_sub(1)
            }
            Self::Bracket { hcount, .. } => hcount.map_or(0, u8::from),
        }
    }

    /// Returns the unbracketed version of this kind when the organic
    /// subset expresses the same atom, given `bond_order_sum`. A bracket
    /// atom may be debracketed only when its written hydrogen count
    /// equals what the bare symbol would imply; anything carrying an
    /// isotope, configuration, charge, or map stays bracketed.
    pub fn debracket(self, bond_order_sum: u8) -> Self {
        let (isotope, symbol, configuration, hcount, charge, map) = match &self {
            Self::Star | Self::Aliphatic(_) | Self::Aromatic(_) => return self,
            Self::Bracket {
                isotope,
                symbol,
                configuration,
                hcount,
                charge,
                map,
            } => (isotope, symbol, configuration, hcount, charge, map),
        };

        if isotope.is_some() || configuration.is_some() || charge.is_some() || map.is_some() {
            return self;
        }

        let written = hcount.map_or(0, u8::from);

        match symbol {
            BracketSymbol::Star => {
                if written == 0 {
                    Self::Star
                } else {
                    self
                }
            }
            BracketSymbol::Aromatic(bracket_aromatic) => {
                let Ok(aromatic) = Aromatic::try_from(*bracket_aromatic) else {
                    return self;
                };
                let implied = subvalence(aromatic.targets(), bond_order_sum).saturating_sub(1);

                if implied == written {
                    Self::Aromatic(aromatic)
                } else {
                    self
                }
            }
            BracketSymbol::Element(element) => {
                let Ok(aliphatic) = Aliphatic::try_from(*element) else {
                    return self;
                };
                let implied = subvalence(aliphatic.targets(), bond_order_sum);

                if implied == written {
                    Self::Aliphatic(aliphatic)
                } else {
                    self
                }
            }
        }
    }
}

/// Hydrogens needed to reach the smallest target not less than
/// `bond_order_sum`, or zero when every target is exceeded.
fn subvalence(targets: &[u8], bond_order_sum: u8) -> u8 {
    targets
        .iter()
        .find(|&&target| target >= bond_order_sum)
        .map_or(0, |&target| target - bond_order_sum)
}

/// Valence targets by element and formal charge, following the usual
/// isoelectronic shifts within the B/C/N/O columns.
fn elemental_targets(element: Element, charge: Option<Charge>) -> &'static [u8] {
    let charge = charge.map_or(0, Charge::value);

    match element {
        Element::B => match charge {
            -3 => &OXYGEN_TARGETS,
            -2 => &NITROGEN_TARGETS,
            -1 => &CARBON_TARGETS,
            0 => &BORON_TARGETS,
            _ => &EMPTY_TARGETS,
        },
        Element::C => match charge {
            -2 => &OXYGEN_TARGETS,
            -1 => &NITROGEN_TARGETS,
            0 => &CARBON_TARGETS,
            1 => &BORON_TARGETS,
            _ => &EMPTY_TARGETS,
        },
        Element::N => match charge {
            0 => &NITROGEN_TARGETS,
            1 => &CARBON_TARGETS,
            _ => &EMPTY_TARGETS,
        },
        Element::O => match charge {
            0 => &OXYGEN_TARGETS,
            1 => &NITROGEN_TARGETS,
            _ => &EMPTY_TARGETS,
        },
        Element::P | Element::As => match charge {
            -1 => &SULFUR_TARGETS,
            0 => &PHOSPHORUS_TARGETS,
            _ => &EMPTY_TARGETS,
        },
        Element::S | Element::Se => match charge {
            0 => &SULFUR_TARGETS,
            1 => &PHOSPHORUS_TARGETS,
            _ => &EMPTY_TARGETS,
        },
        Element::F | Element::Cl | Element::Br | Element::I => match charge {
            0 => &HALOGEN_TARGETS,
            _ => &EMPTY_TARGETS,
        },
        _ => &EMPTY_TARGETS,
    }
}

static BORON_TARGETS: [u8; 1] = [3];
static CARBON_TARGETS: [u8; 1] = [4];
static NITROGEN_TARGETS: [u8; 2] = [3, 5];
static OXYGEN_TARGETS: [u8; 1] = [2];
static PHOSPHORUS_TARGETS: [u8; 2] = [3, 5];
static SULFUR_TARGETS: [u8; 3] = [2, 4, 6];
static HALOGEN_TARGETS: [u8; 1] = [1];
static EMPTY_TARGETS: [u8; 0] = [];

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Star => write!(f, "*"),
            Self::Aliphatic(aliphatic) => write!(f, "{aliphatic}"),
            Self::Aromatic(aromatic) => write!(f, "{aromatic}"),
            Self::Bracket {
                isotope,
                symbol,
                configuration,
                hcount,
                charge,
                map,
            } => {
                write!(f, "[")?;

                if let Some(isotope) = isotope {
                    write!(f, "{isotope}")?;
                }

                write!(f, "{symbol}")?;

                if let Some(configuration) = configuration {
                    write!(f, "{configuration}")?;
                }

                if let Some(hcount) = hcount {
                    write!(f, "{hcount}")?;
                }

                if let Some(charge) = charge {
                    write!(f, "{charge}")?;
                }

                if let Some(map) = map {
                    write!(f, ":{map}")?;
                }

                write!(f, "]")
            }
        }
    }
}

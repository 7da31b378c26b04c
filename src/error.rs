use thiserror::Error;

use crate::feature::Rnum;

/// A problem found while reading or validating SMILES input.
///
/// Parsing never fails outright: errors accumulate on the
/// [`ParseResult`](crate::read::ParseResult) next to whatever molecules
/// could still be built. An empty error list is the success signal; the
/// display strings are informational, not a stable contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown element at position {0}")]
    UnknownElement(usize),
    #[error("malformed bracket atom at position {0}")]
    MalformedBracket(usize),
    #[error("unclosed bracket atom")]
    UnclosedBracket,
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("bad bond sequence at position {0}")]
    BadBondSequence(usize),
    #[error("stray bond symbol at end of input")]
    TrailingBond,
    #[error("invalid chirality tag at position {0}")]
    InvalidChirality(usize),
    #[error("bad ring closure number at position {0}")]
    BadRnum(usize),
    #[error("dangling ring closure {0}")]
    DanglingRingClosure(Rnum),
    #[error("conflicting ring closure bond orders between atoms {0} and {1}")]
    RingBondConflict(usize, usize),
    #[error("duplicate bond between atoms {0} and {1}")]
    DuplicateBond(usize, usize),
    #[error("ring closure bonds atom {0} to itself")]
    SelfClosure(usize),
    #[error("fragment separator without an atom at position {0}")]
    EmptyFragment(usize),
    #[error("unexpected character '{1}' at position {0}")]
    Character(usize, char),
    #[error("valence violation on atom {atom}: total valence {valence} is not permitted for {symbol}")]
    Valence {
        atom: usize,
        valence: u8,
        symbol: &'static str,
    },
    #[error("aromatic ring of size {0} is not allowed")]
    AromaticRingSize(usize),
    #[error("ring mixes aromatic and non-aromatic atoms")]
    MixedAromaticRing,
    #[error("aromatic ring fails the Huckel electron count")]
    HuckelViolation,
    #[error("aromatic atom {0} is not in a ring")]
    AromaticAtomOutsideRing(usize),
    #[error("stereo tag on non-stereocenter atom {0}")]
    NonStereocenter(usize),
    #[error("conflicting bond directions at atom {0}")]
    DirectionConflict(usize),
}

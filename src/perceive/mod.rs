//! Post-parse validation passes: ring perception, aromaticity, valence,
//! and stereo consistency.

mod aromaticity;
mod rings;
mod stereo;
mod valence;

pub use rings::{ring_counts, sssr, Ring};

use crate::error::ParseError;
use crate::graph::Molecule;

/// Runs every validator over `molecule`, in dependency order. Problems
/// accumulate; none of them aborts the pipeline or discards the
/// molecule.
pub(crate) fn validate(molecule: &mut Molecule) -> Vec<ParseError> {
    let mut errors = Vec::new();
    let rings = rings::sssr(molecule);

    aromaticity::validate(molecule, &rings, &mut errors);
    valence::validate(molecule, &mut errors);
    stereo::validate(molecule, &mut errors);

    errors
}

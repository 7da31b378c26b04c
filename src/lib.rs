//! Reading, validating, and canonically writing the
//! [Simplified Molecular Input Line Entry System](https://en.wikipedia.org/wiki/Simplified_molecular-input_line-entry_system)
//! (SMILES) language, following [OpenSMILES](http://opensmiles.org) with
//! the common toolkit conventions where OpenSMILES leaves room.
//!
//! [`parse`] reads a string into one [`Molecule`](graph::Molecule) per
//! connected component, collecting problems instead of failing:
//!
//! ```
//! use chirr::parse;
//!
//! let result = parse("c1ccccc1");
//!
//! assert!(result.errors.is_empty());
//! assert_eq!(result.molecules[0].atoms.len(), 6);
//! ```
//!
//! [`generate`] writes molecules back out. In canonical mode a Morgan
//! style ranking fixes the traversal, so every way of writing a
//! molecule produces the same string:
//!
//! ```
//! use chirr::{generate, parse};
//!
//! let first = generate(&parse("OCC").molecules, true);
//! let second = generate(&parse("C(O)C").molecules, true);
//!
//! assert_eq!(first, "CCO");
//! assert_eq!(first, second);
//! ```

/// Canonical atom ranking.
pub mod canon;
mod error;
/// Lexical features shared by the reader and writer.
pub mod feature;
/// Molecular graphs: atoms, bonds, molecules.
pub mod graph;
/// Post-parse validation: rings, aromaticity, valence, stereo.
pub mod perceive;
/// Reading SMILES strings.
pub mod read;
/// Depth-first traversal of molecular graphs.
pub mod walk;
/// Writing SMILES strings.
pub mod write;

pub use error::ParseError;
pub use graph::{Atom, Bond, Molecule};
pub use read::{parse, ParseResult};
pub use write::generate;

pub use mendeleev::Element;

mod doctests {
    #[cfg(doctest)]
    #[doc = include_str!("../README.md")]
    struct _ReadMe;
}

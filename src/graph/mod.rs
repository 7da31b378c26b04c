mod atom;
mod bond;
mod builder;
mod molecule;
mod reconcile;

pub use atom::Atom;
pub use bond::Bond;
pub use molecule::Molecule;

pub(crate) use builder::Builder;

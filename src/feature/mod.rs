mod aliphatic;
mod aromatic;
mod atom_kind;
mod bond_kind;
mod bracket_aromatic;
mod bracket_symbol;
mod charge;
mod configuration;
mod rnum;
mod virtual_hydrogen;

pub use aliphatic::Aliphatic;
pub use aromatic::Aromatic;
pub use atom_kind::AtomKind;
pub use bond_kind::BondKind;
pub use bracket_aromatic::BracketAromatic;
pub use bracket_symbol::BracketSymbol;
pub use charge::Charge;
pub use configuration::Configuration;
pub use rnum::Rnum;
pub use virtual_hydrogen::VirtualHydrogen;

pub use mendeleev::Element;

use super::{
    read_charge::read_charge, read_configuration::read_configuration, read_symbol::read_symbol,
    scanner::Scanner,
};
use crate::error::ParseError;
use crate::feature::{AtomKind, VirtualHydrogen};

/// Reads a bracket atom, if one starts at the cursor. The body is
/// `isotope? symbol configuration? hcount? charge? map?` followed by a
/// closing `]`.
pub fn read_bracket(scanner: &mut Scanner) -> Result<Option<AtomKind>, ParseError> {
    match scanner.peek() {
        Some('[') => {
            scanner.pop();
        }
        _ => return Ok(None),
    }

    let isotope = read_isotope(scanner);
    let symbol = read_symbol(scanner)?;
    let configuration = read_configuration(scanner)?;
    let hcount = read_hcount(scanner);
    let charge = read_charge(scanner);
    let map = read_map(scanner)?;

    match scanner.peek() {
        Some(']') => {
            scanner.pop();
        }
        Some(character) => {
            // a stray letter here usually means an element name this
            // parser does not recognize in context
            return Err(if character.is_ascii_alphabetic() {
                ParseError::UnknownElement(scanner.cursor())
            } else {
                ParseError::MalformedBracket(scanner.cursor())
            });
        }
        None => return Err(ParseError::UnclosedBracket),
    }

    Ok(Some(AtomKind::Bracket {
        isotope,
        symbol,
        configuration,
        hcount,
        charge,
        map,
    }))
}

fn read_isotope(scanner: &mut Scanner) -> Option<u16> {
    let mut value: u16 = 0;
    let mut any = false;

    for _ in 0..3 {
        match scanner.peek() {
            Some(digit @ '0'..='9') => {
                value = value * 10 + (*digit as u16 - '0' as u16);
                any = true;
                scanner.pop();
            }
            _ => break,
        }
    }

    (any && value > 0).then_some(value)
}

fn read_hcount(scanner: &mut Scanner) -> Option<VirtualHydrogen> {
    match scanner.peek() {
        Some('H') => {
            scanner.pop();
        }
        _ => return None,
    }

    match scanner.peek() {
        Some(digit @ '0'..='9') => {
            let count = VirtualHydrogen::try_from(*digit as u8 - b'0').expect("single digit");

            scanner.pop();

            Some(count)
        }
        _ => Some(VirtualHydrogen::H1),
    }
}

fn read_map(scanner: &mut Scanner) -> Result<Option<u16>, ParseError> {
    match scanner.peek() {
        Some(':') => {
            scanner.pop();
        }
        _ => return Ok(None),
    }

    let mut value: u16 = match scanner.peek() {
        Some(digit @ '0'..='9') => *digit as u16 - '0' as u16,
        Some(_) => return Err(ParseError::MalformedBracket(scanner.cursor())),
        None => return Err(ParseError::UnclosedBracket),
    };

    scanner.pop();

    for _ in 0..2 {
        match scanner.peek() {
            Some(digit @ '0'..='9') => {
                value = value * 10 + (*digit as u16 - '0' as u16);
                scanner.pop();
            }
            _ => break,
        }
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{BracketAromatic, BracketSymbol, Charge, Configuration, Element};
    use pretty_assertions::assert_eq;

    fn bracket(text: &str) -> Result<Option<AtomKind>, ParseError> {
        read_bracket(&mut Scanner::new(text))
    }

    #[test]
    fn none_without_open() {
        assert_eq!(bracket("C"), Ok(None));
    }

    #[test]
    fn bare_element() {
        assert_eq!(
            bracket("[C]"),
            Ok(Some(AtomKind::Bracket {
                isotope: None,
                symbol: BracketSymbol::Element(Element::C),
                configuration: None,
                hcount: None,
                charge: None,
                map: None
            }))
        );
    }

    #[test]
    fn methane() {
        assert_eq!(
            bracket("[CH4]"),
            Ok(Some(AtomKind::Bracket {
                isotope: None,
                symbol: BracketSymbol::Element(Element::C),
                configuration: None,
                hcount: Some(VirtualHydrogen::H4),
                charge: None,
                map: None
            }))
        );
    }

    #[test]
    fn bare_h_means_one() {
        assert_eq!(
            bracket("[NH+]"),
            Ok(Some(AtomKind::Bracket {
                isotope: None,
                symbol: BracketSymbol::Element(Element::N),
                configuration: None,
                hcount: Some(VirtualHydrogen::H1),
                charge: Charge::new(1),
                map: None
            }))
        );
    }

    #[test]
    fn isotope() {
        assert_eq!(
            bracket("[13C]"),
            Ok(Some(AtomKind::Bracket {
                isotope: Some(13),
                symbol: BracketSymbol::Element(Element::C),
                configuration: None,
                hcount: None,
                charge: None,
                map: None
            }))
        );
    }

    #[test]
    fn deuterium() {
        assert_eq!(
            bracket("[2H]"),
            Ok(Some(AtomKind::Bracket {
                isotope: Some(2),
                symbol: BracketSymbol::Element(Element::H),
                configuration: None,
                hcount: None,
                charge: None,
                map: None
            }))
        );
    }

    #[test]
    fn chiral_with_hydrogen() {
        assert_eq!(
            bracket("[C@H]"),
            Ok(Some(AtomKind::Bracket {
                isotope: None,
                symbol: BracketSymbol::Element(Element::C),
                configuration: Some(Configuration::TH1),
                hcount: Some(VirtualHydrogen::H1),
                charge: None,
                map: None
            }))
        );
    }

    #[test]
    fn aromatic_selenium() {
        assert_eq!(
            bracket("[se]"),
            Ok(Some(AtomKind::Bracket {
                isotope: None,
                symbol: BracketSymbol::Aromatic(BracketAromatic::Se),
                configuration: None,
                hcount: None,
                charge: None,
                map: None
            }))
        );
    }

    #[test]
    fn atom_class() {
        assert_eq!(
            bracket("[CH2:42]"),
            Ok(Some(AtomKind::Bracket {
                isotope: None,
                symbol: BracketSymbol::Element(Element::C),
                configuration: None,
                hcount: Some(VirtualHydrogen::H2),
                charge: None,
                map: Some(42)
            }))
        );
    }

    #[test]
    fn star_with_map() {
        assert_eq!(
            bracket("[*:999]"),
            Ok(Some(AtomKind::Bracket {
                isotope: None,
                symbol: BracketSymbol::Star,
                configuration: None,
                hcount: None,
                charge: None,
                map: Some(999)
            }))
        );
    }

    #[test]
    fn unknown_tail_letter() {
        assert_eq!(bracket("[CX]"), Err(ParseError::UnknownElement(2)));
    }

    #[test]
    fn colon_without_digits() {
        assert_eq!(bracket("[C:]"), Err(ParseError::MalformedBracket(3)));
    }

    #[test]
    fn unclosed() {
        assert_eq!(bracket("[C"), Err(ParseError::UnclosedBracket));
    }

    #[test]
    fn empty_brackets() {
        assert_eq!(bracket("[]"), Err(ParseError::MalformedBracket(1)));
    }
}

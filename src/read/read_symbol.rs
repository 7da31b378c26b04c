use super::scanner::Scanner;
use crate::error::ParseError;
use crate::feature::{BracketAromatic, BracketSymbol, Element};

/// Reads the atomic symbol of a bracket atom: `*`, an element name
/// (longest match wins, so `Sc` is scandium rather than sulfur), or a
/// lowercase aromatic symbol including the bracket-only `se` and `as`.
pub fn read_symbol(scanner: &mut Scanner) -> Result<BracketSymbol, ParseError> {
    let start = scanner.cursor();

    match scanner.peek() {
        Some('*') => {
            scanner.pop();

            Ok(BracketSymbol::Star)
        }
        Some(first) if first.is_ascii_uppercase() => {
            let first = *first;

            if let Some(second) = scanner.peek_at(1).filter(|c| c.is_ascii_lowercase()) {
                let two: String = [first, *second].iter().collect();

                if let Some(element) = element_from_symbol(&two) {
                    scanner.pop();
                    scanner.pop();

                    return Ok(BracketSymbol::Element(element));
                }
            }

            match element_from_symbol(&first.to_string()) {
                Some(element) => {
                    scanner.pop();

                    Ok(BracketSymbol::Element(element))
                }
                None => Err(ParseError::UnknownElement(start)),
            }
        }
        Some(first) if first.is_ascii_lowercase() => {
            let first = *first;
            let second = scanner.peek_at(1).copied();

            let (aromatic, length) = match (first, second) {
                ('s', Some('e')) => (BracketAromatic::Se, 2),
                ('a', Some('s')) => (BracketAromatic::As, 2),
                ('b', _) => (BracketAromatic::B, 1),
                ('c', _) => (BracketAromatic::C, 1),
                ('n', _) => (BracketAromatic::N, 1),
                ('o', _) => (BracketAromatic::O, 1),
                ('p', _) => (BracketAromatic::P, 1),
                ('s', _) => (BracketAromatic::S, 1),
                _ => return Err(ParseError::UnknownElement(start)),
            };

            for _ in 0..length {
                scanner.pop();
            }

            Ok(BracketSymbol::Aromatic(aromatic))
        }
        Some(_) => Err(ParseError::MalformedBracket(start)),
        None => Err(ParseError::UnclosedBracket),
    }
}

fn element_from_symbol(symbol: &str) -> Option<Element> {
    Element::list()
        .iter()
        .copied()
        .find(|element| element.symbol() == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn star() {
        let mut scanner = Scanner::new("*]");

        assert_eq!(read_symbol(&mut scanner), Ok(BracketSymbol::Star));
    }

    #[test]
    fn single_letter_element() {
        let mut scanner = Scanner::new("C]");

        assert_eq!(
            read_symbol(&mut scanner),
            Ok(BracketSymbol::Element(Element::C))
        );
    }

    #[test]
    fn hydrogen() {
        let mut scanner = Scanner::new("H+]");

        assert_eq!(
            read_symbol(&mut scanner),
            Ok(BracketSymbol::Element(Element::H))
        );
    }

    #[test]
    fn longest_match_wins() {
        let mut scanner = Scanner::new("Sc]");

        assert_eq!(
            read_symbol(&mut scanner),
            Ok(BracketSymbol::Element(Element::Sc))
        );
    }

    #[test]
    fn carbon_before_uppercase_hydrogen() {
        let mut scanner = Scanner::new("CH4]");

        assert_eq!(
            read_symbol(&mut scanner),
            Ok(BracketSymbol::Element(Element::C))
        );
        assert_eq!(scanner.cursor(), 1);
    }

    #[test]
    fn aromatic_selenium() {
        let mut scanner = Scanner::new("se]");

        assert_eq!(
            read_symbol(&mut scanner),
            Ok(BracketSymbol::Aromatic(BracketAromatic::Se))
        );
        assert_eq!(scanner.cursor(), 2);
    }

    #[test]
    fn aromatic_arsenic() {
        let mut scanner = Scanner::new("as]");

        assert_eq!(
            read_symbol(&mut scanner),
            Ok(BracketSymbol::Aromatic(BracketAromatic::As))
        );
    }

    #[test]
    fn unknown_uppercase() {
        let mut scanner = Scanner::new("Qx]");

        assert_eq!(read_symbol(&mut scanner), Err(ParseError::UnknownElement(0)));
    }

    #[test]
    fn unknown_lowercase() {
        let mut scanner = Scanner::new("q]");

        assert_eq!(read_symbol(&mut scanner), Err(ParseError::UnknownElement(0)));
    }

    #[test]
    fn end_of_input() {
        let mut scanner = Scanner::new("");

        assert_eq!(read_symbol(&mut scanner), Err(ParseError::UnclosedBracket));
    }
}

use super::scanner::Scanner;
use crate::error::ParseError;
use crate::feature::Configuration;

/// Reads the configuration tag of a bracket atom:
///
/// - `@` and `@@` for counterclockwise and clockwise tetrahedral,
/// - `@TH1`/`@TH2`, `@AL1`/`@AL2`, `@SP1`..`@SP3`, `@TB1`..`@TB20`,
///   `@OH1`..`@OH30` for the extended templates,
/// - a family tag without an index (`@TH`, `@OH`, ...) reads as the
///   unspecified member of that family.
///
/// A bare `@` followed by `H` is tetrahedral; the `H` belongs to the
/// hydrogen count that follows.
pub fn read_configuration(scanner: &mut Scanner) -> Result<Option<Configuration>, ParseError> {
    match scanner.peek() {
        Some('@') => {
            scanner.pop();
        }
        _ => return Ok(None),
    }

    if scanner.peek() == Some(&'@') {
        scanner.pop();

        return Ok(Some(Configuration::TH2));
    }

    let family = match (scanner.peek(), scanner.peek_at(1)) {
        (Some('T'), Some('H')) => Family::TH,
        (Some('T'), Some('B')) => Family::TB,
        (Some('A'), Some('L')) => Family::AL,
        (Some('S'), Some('P')) => Family::SP,
        (Some('O'), Some('H')) => Family::OH,
        _ => return Ok(Some(Configuration::TH1)),
    };

    scanner.pop();
    scanner.pop();

    let Some(index) = read_index(scanner) else {
        return Ok(Some(match family {
            Family::TH => Configuration::UnspecifiedTH,
            Family::TB => Configuration::UnspecifiedTB,
            Family::AL => Configuration::UnspecifiedAL,
            Family::SP => Configuration::UnspecifiedSP,
            Family::OH => Configuration::UnspecifiedOH,
        }));
    };

    let configuration = match family {
        Family::TH => Configuration::th(index),
        Family::TB => Configuration::tb(index),
        Family::AL => Configuration::al(index),
        Family::SP => Configuration::sp(index),
        Family::OH => Configuration::oh(index),
    };

    configuration
        .map(Some)
        .ok_or(ParseError::InvalidChirality(scanner.cursor()))
}

enum Family {
    TH,
    TB,
    AL,
    SP,
    OH,
}

fn read_index(scanner: &mut Scanner) -> Option<u8> {
    let mut value: Option<u8> = None;

    for _ in 0..2 {
        match scanner.peek() {
            Some(digit @ '0'..='9') => {
                value = Some(value.unwrap_or(0) * 10 + (*digit as u8 - b'0'));
                scanner.pop();
            }
            _ => break,
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn none_without_at() {
        let mut scanner = Scanner::new("H]");

        assert_eq!(read_configuration(&mut scanner), Ok(None));
    }

    #[test]
    fn counterclockwise() {
        let mut scanner = Scanner::new("@]");

        assert_eq!(
            read_configuration(&mut scanner),
            Ok(Some(Configuration::TH1))
        );
    }

    #[test]
    fn clockwise() {
        let mut scanner = Scanner::new("@@]");

        assert_eq!(
            read_configuration(&mut scanner),
            Ok(Some(Configuration::TH2))
        );
    }

    #[test]
    fn at_before_hydrogen_count() {
        let mut scanner = Scanner::new("@H]");

        assert_eq!(
            read_configuration(&mut scanner),
            Ok(Some(Configuration::TH1))
        );
        assert_eq!(scanner.cursor(), 1);
    }

    #[test]
    fn tetrahedral_spelled_out() {
        let mut scanner = Scanner::new("@TH2]");

        assert_eq!(
            read_configuration(&mut scanner),
            Ok(Some(Configuration::TH2))
        );
    }

    #[test]
    fn trigonal_bipyramidal_two_digits() {
        let mut scanner = Scanner::new("@TB17]");

        assert_eq!(
            read_configuration(&mut scanner),
            Ok(Some(Configuration::TB17))
        );
    }

    #[test]
    fn octahedral_two_digits() {
        let mut scanner = Scanner::new("@OH23]");

        assert_eq!(
            read_configuration(&mut scanner),
            Ok(Some(Configuration::OH23))
        );
    }

    #[test]
    fn unspecified_family() {
        let mut scanner = Scanner::new("@SP]");

        assert_eq!(
            read_configuration(&mut scanner),
            Ok(Some(Configuration::UnspecifiedSP))
        );
    }

    #[test]
    fn out_of_range_index() {
        let mut scanner = Scanner::new("@TH3]");

        assert_eq!(
            read_configuration(&mut scanner),
            Err(ParseError::InvalidChirality(4))
        );
    }

    #[test]
    fn tb_out_of_range() {
        let mut scanner = Scanner::new("@TB21]");

        assert_eq!(
            read_configuration(&mut scanner),
            Err(ParseError::InvalidChirality(5))
        );
    }
}

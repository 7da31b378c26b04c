use super::scanner::Scanner;
use crate::error::ParseError;
use crate::feature::Rnum;

/// Reads a ring closure number: a single digit, or `%` followed by
/// exactly two digits.
pub fn read_rnum(scanner: &mut Scanner) -> Result<Option<Rnum>, ParseError> {
    match scanner.peek() {
        Some(digit @ '0'..='9') => {
            let rnum = Rnum::new(*digit as u8 - b'0');

            scanner.pop();

            Ok(Some(rnum))
        }
        Some('%') => {
            scanner.pop();

            let mut value = 0;

            for _ in 0..2 {
                match scanner.peek() {
                    Some(digit @ '0'..='9') => {
                        value = value * 10 + (*digit as u8 - b'0');
                        scanner.pop();
                    }
                    _ => return Err(ParseError::BadRnum(scanner.cursor())),
                }
            }

            Ok(Some(Rnum::new(value)))
        }
        _ => Ok(None),
    }
}

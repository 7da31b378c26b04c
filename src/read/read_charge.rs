use super::scanner::Scanner;
use crate::feature::Charge;

/// Reads a bracket atom charge: `+`/`-`, doubled signs, or a sign with
/// a magnitude up to 15.
pub fn read_charge(scanner: &mut Scanner) -> Option<Charge> {
    let sign: i8 = match scanner.peek() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return None,
    };

    scanner.pop();

    if let Some(magnitude) = read_magnitude(scanner) {
        return Charge::new(sign * magnitude);
    }

    let doubled = match (sign, scanner.peek()) {
        (1, Some('+')) | (-1, Some('-')) => true,
        _ => false,
    };

    if doubled {
        scanner.pop();

        Charge::new(sign * 2)
    } else {
        Charge::new(sign)
    }
}

fn read_magnitude(scanner: &mut Scanner) -> Option<i8> {
    let first = match scanner.peek() {
        Some(digit @ '1'..='9') => *digit as i8 - b'0' as i8,
        _ => return None,
    };

    scanner.pop();

    // only 10..=15 take a second digit
    if first == 1 {
        if let Some(digit @ '0'..='5') = scanner.peek() {
            let second = *digit as i8 - b'0' as i8;

            scanner.pop();

            return Some(10 + second);
        }
    }

    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn none() {
        let mut scanner = Scanner::new("]");

        assert_eq!(read_charge(&mut scanner), None);
    }

    #[test]
    fn bare_signs() {
        let mut scanner = Scanner::new("+]");
        assert_eq!(read_charge(&mut scanner), Charge::new(1));

        let mut scanner = Scanner::new("-]");
        assert_eq!(read_charge(&mut scanner), Charge::new(-1));
    }

    #[test]
    fn doubled_signs() {
        let mut scanner = Scanner::new("++]");
        assert_eq!(read_charge(&mut scanner), Charge::new(2));

        let mut scanner = Scanner::new("--]");
        assert_eq!(read_charge(&mut scanner), Charge::new(-2));
    }

    #[test]
    fn numeric_magnitude() {
        let mut scanner = Scanner::new("+3]");
        assert_eq!(read_charge(&mut scanner), Charge::new(3));

        let mut scanner = Scanner::new("-15]");
        assert_eq!(read_charge(&mut scanner), Charge::new(-15));
    }

    #[test]
    fn magnitude_sixteen_stops_at_one() {
        let mut scanner = Scanner::new("+16]");

        assert_eq!(read_charge(&mut scanner), Charge::new(1));
        assert_eq!(scanner.cursor(), 2);
    }
}

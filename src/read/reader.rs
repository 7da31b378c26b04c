use super::read_bond::read_bond;
use super::read_bracket::read_bracket;
use super::read_organic::read_organic;
use super::read_rnum::read_rnum;
use super::scanner::Scanner;
use crate::error::ParseError;
use crate::feature::{AtomKind, BondKind};
use crate::graph::{Builder, Molecule};
use crate::perceive;

/// The outcome of [`parse`]: the molecules that could be built, one per
/// connected component, and every problem found along the way. An empty
/// error list means success; with errors present the molecules are a
/// best effort and may be partial.
#[derive(Debug, Default)]
pub struct ParseResult {
    pub molecules: Vec<Molecule>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Reads a SMILES string. Malformed input never panics and never aborts
/// the read: errors accumulate on the result and parsing continues
/// wherever recovery is possible.
///
/// ```
/// use chirr::parse;
///
/// let result = parse("CCO");
///
/// assert!(result.errors.is_empty());
/// assert_eq!(result.molecules.len(), 1);
/// assert_eq!(result.molecules[0].atoms.len(), 3);
/// assert_eq!(result.molecules[0].atoms[2].hydrogens, 1);
/// ```
pub fn parse(smiles: &str) -> ParseResult {
    let mut scanner = Scanner::new(smiles);
    let mut builder = Builder::new();
    let mut errors: Vec<ParseError> = Vec::new();
    let mut pending: Option<(BondKind, usize)> = None;
    // position of an unsatisfied `.`, and whether it already errored
    let mut dot: Option<(usize, bool)> = None;

    while let Some(&character) = scanner.peek() {
        let cursor = scanner.cursor();

        match character {
            character if character.is_whitespace() => {
                if builder.is_empty() && errors.is_empty() && pending.is_none() {
                    scanner.pop();
                    continue;
                }

                // the remainder is a title, not SMILES
                break;
            }
            '(' => {
                scanner.pop();

                if let Some((_, at)) = pending.take() {
                    errors.push(ParseError::BadBondSequence(at));
                }

                if !builder.open_branch() {
                    errors.push(ParseError::UnbalancedParenthesis);
                }
            }
            ')' => {
                scanner.pop();

                if let Some((_, at)) = pending.take() {
                    errors.push(ParseError::BadBondSequence(at));
                }

                if !builder.close_branch() {
                    errors.push(ParseError::UnbalancedParenthesis);
                }
            }
            '.' => {
                scanner.pop();

                if let Some((_, at)) = pending.take() {
                    errors.push(ParseError::BadBondSequence(at));
                }

                let empty = !builder.has_prev() || dot.is_some();

                if empty {
                    errors.push(ParseError::EmptyFragment(cursor));
                }

                dot = Some((cursor, empty));
                builder.split();
            }
            '-' | '=' | '#' | '$' | ':' | '/' | '\\' => {
                let kind = read_bond(&mut scanner);

                if pending.replace((kind, cursor)).is_some() {
                    errors.push(ParseError::BadBondSequence(cursor));
                }
            }
            '0'..='9' | '%' => match read_rnum(&mut scanner) {
                Ok(Some(rnum)) => {
                    let (bond, _) = pending.take().unwrap_or((BondKind::Elided, cursor));

                    if builder.has_prev() {
                        builder.join(bond, rnum);
                    } else {
                        errors.push(ParseError::BadRnum(cursor));
                    }
                }
                Ok(None) => {}
                Err(error) => errors.push(error),
            },
            '[' => match read_bracket(&mut scanner) {
                Ok(Some(kind)) => {
                    attach(&mut builder, &mut pending, &mut dot, &mut errors, kind);
                }
                Ok(None) => {}
                Err(error) => {
                    errors.push(error);
                    pending = None;

                    // resume after the bracket body
                    while let Some(&skipped) = scanner.peek() {
                        scanner.pop();

                        if skipped == ']' {
                            break;
                        }
                    }
                }
            },
            _ => match read_organic(&mut scanner) {
                Some(kind) => {
                    attach(&mut builder, &mut pending, &mut dot, &mut errors, kind);
                }
                None => {
                    scanner.pop();
                    errors.push(ParseError::Character(cursor, character));
                }
            },
        }
    }

    if pending.is_some() {
        errors.push(ParseError::TrailingBond);
    }

    if let Some((at, errored)) = dot {
        if !errored {
            errors.push(ParseError::EmptyFragment(at));
        }
    }

    let (mut molecules, mut structural) = builder.finish();

    errors.append(&mut structural);

    for molecule in &mut molecules {
        errors.extend(perceive::validate(molecule));
    }

    ParseResult { molecules, errors }
}

fn attach(
    builder: &mut Builder,
    pending: &mut Option<(BondKind, usize)>,
    dot: &mut Option<(usize, bool)>,
    errors: &mut Vec<ParseError>,
    kind: AtomKind,
) {
    *dot = None;

    match pending.take() {
        Some((bond, at)) => {
            if builder.has_prev() {
                builder.extend(bond, kind);
            } else {
                errors.push(ParseError::BadBondSequence(at));
                builder.root(kind);
            }
        }
        None => {
            if builder.has_prev() {
                builder.extend(BondKind::Elided, kind);
            } else {
                builder.root(kind);
            }
        }
    }
}

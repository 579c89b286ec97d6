//! Chemical formula parsing.
//!
//! Turns a formula string such as `"Al2(SO4)3"` into a
//! [`Composition`]. The grammar is deliberately small: element symbols
//! (uppercase letter plus optional lowercase letter) with optional decimal
//! counts, bracket groups `()`/`[]`/`{}` with an optional trailing
//! multiplier, a trailing ionic-charge suffix (`+`, `-`, `2+`, `3-`), and a
//! trailing hydrate suffix (`·5H2O`), both of which are stripped before
//! counting. Hydration water is discarded, not folded into the composition.

use super::models::composition::Composition;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("Formula is empty")]
    Empty,

    #[error("Unbalanced bracket at position {position}")]
    UnbalancedBracket { position: usize },

    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("Formula '{0}' contains no element symbols")]
    NoElements(String),
}

/// Parses a formula string into its element-to-count composition.
///
/// # Errors
///
/// Returns a [`FormulaError`] for empty input, unbalanced brackets,
/// characters outside the grammar, or a formula that reduces to no element
/// symbols at all.
pub fn parse_formula(formula: &str) -> Result<Composition, FormulaError> {
    let trimmed = formula.trim();
    if trimmed.is_empty() {
        return Err(FormulaError::Empty);
    }

    let body = strip_hydrate(strip_charge(trimmed));
    let chars: Vec<char> = body.chars().collect();

    let mut stack: Vec<Composition> = Vec::new();
    let mut current = Composition::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '(' | '[' | '{' => {
                stack.push(std::mem::take(&mut current));
                i += 1;
            }
            ')' | ']' | '}' => {
                let Some(mut outer) = stack.pop() else {
                    return Err(FormulaError::UnbalancedBracket { position: i });
                };
                let (multiplier, next) = read_count(&chars, i + 1);
                i = next;
                for (element, count) in current.iter() {
                    outer.add(element, count * multiplier);
                }
                current = outer;
            }
            c if c.is_ascii_uppercase() => {
                let mut symbol = String::from(c);
                i += 1;
                if i < chars.len() && chars[i].is_ascii_lowercase() {
                    symbol.push(chars[i]);
                    i += 1;
                }
                let (count, next) = read_count(&chars, i);
                i = next;
                current.add(&symbol, count);
            }
            c if c.is_whitespace() => i += 1,
            c => {
                return Err(FormulaError::UnexpectedCharacter {
                    character: c,
                    position: i,
                });
            }
        }
    }

    if !stack.is_empty() {
        return Err(FormulaError::UnbalancedBracket {
            position: chars.len(),
        });
    }
    if current.is_empty() {
        return Err(FormulaError::NoElements(formula.to_string()));
    }
    Ok(current)
}

/// Reads a decimal count starting at `start`, defaulting to 1 when absent.
fn read_count(chars: &[char], start: usize) -> (u32, usize) {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return (1, start);
    }
    let digits: String = chars[start..end].iter().collect();
    (digits.parse().unwrap_or(1), end)
}

/// Strips a trailing ionic-charge suffix such as `+`, `-`, `2+` or `3-`.
fn strip_charge(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = bytes.len();
    if end == 0 || (bytes[end - 1] != b'+' && bytes[end - 1] != b'-') {
        return s;
    }
    end -= 1;
    while end > 0 && bytes[end - 1].is_ascii_digit() {
        end -= 1;
    }
    if end > 0 && (bytes[end - 1] == b'+' || bytes[end - 1] == b'-') {
        end -= 1;
    }
    &s[..end]
}

/// Strips a trailing hydrate suffix (`·5H2O` or `.5H2O`); hydration water
/// is not part of the modeled molecule.
fn strip_hydrate(s: &str) -> &str {
    for separator in ['·', '.'] {
        if let Some(idx) = s.find(separator) {
            return &s[..idx];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(formula: &str) -> Vec<(String, u32)> {
        parse_formula(formula)
            .unwrap()
            .iter()
            .map(|(e, c)| (e.to_string(), c))
            .collect()
    }

    #[test]
    fn parses_simple_formulas() {
        assert_eq!(counts("H2O"), vec![("H".into(), 2), ("O".into(), 1)]);
        assert_eq!(counts("NaCl"), vec![("Cl".into(), 1), ("Na".into(), 1)]);
        assert_eq!(
            counts("C6H12O6"),
            vec![("C".into(), 6), ("H".into(), 12), ("O".into(), 6)]
        );
    }

    #[test]
    fn parses_bracket_groups_with_multipliers() {
        assert_eq!(
            counts("Ca(OH)2"),
            vec![("Ca".into(), 1), ("H".into(), 2), ("O".into(), 2)]
        );
        assert_eq!(
            counts("Al2(SO4)3"),
            vec![("Al".into(), 2), ("O".into(), 12), ("S".into(), 3)]
        );
    }

    #[test]
    fn parses_nested_and_square_bracket_groups() {
        assert_eq!(
            counts("K4[Fe(CN)6]"),
            vec![
                ("C".into(), 6),
                ("Fe".into(), 1),
                ("K".into(), 4),
                ("N".into(), 6)
            ]
        );
    }

    #[test]
    fn group_without_multiplier_counts_once() {
        assert_eq!(counts("(NH4)Cl"), counts("NH4Cl"));
    }

    #[test]
    fn strips_trailing_charge() {
        assert_eq!(counts("NH4+"), vec![("H".into(), 4), ("N".into(), 1)]);
        assert_eq!(counts("Fe3+"), vec![("Fe".into(), 1)]);
        assert_eq!(counts("PO4 3-"), vec![("O".into(), 4), ("P".into(), 1)]);
    }

    #[test]
    fn strips_hydrate_suffix() {
        assert_eq!(
            counts("CuSO4·5H2O"),
            vec![("Cu".into(), 1), ("O".into(), 4), ("S".into(), 1)]
        );
        assert_eq!(counts("CuSO4.5H2O"), counts("CuSO4·5H2O"));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_formula(""), Err(FormulaError::Empty));
        assert_eq!(parse_formula("   "), Err(FormulaError::Empty));
    }

    #[test]
    fn unbalanced_brackets_are_an_error() {
        assert!(matches!(
            parse_formula("Ca(OH"),
            Err(FormulaError::UnbalancedBracket { .. })
        ));
        assert!(matches!(
            parse_formula("OH)2"),
            Err(FormulaError::UnbalancedBracket { .. })
        ));
    }

    #[test]
    fn lowercase_leading_letters_are_rejected() {
        assert!(matches!(
            parse_formula("h2o"),
            Err(FormulaError::UnexpectedCharacter { character: 'h', .. })
        ));
    }

    #[test]
    fn charge_only_input_has_no_elements() {
        assert!(matches!(
            parse_formula("2+"),
            Err(FormulaError::NoElements(_))
        ));
    }
}

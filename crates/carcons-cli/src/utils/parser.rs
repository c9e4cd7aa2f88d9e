use carcons::core::utils::residues;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid position '{0}'. Expected a 1-based alignment column (1, 2, 3, ...).")]
    InvalidPosition(String),

    #[error("Invalid mutation '{0}'. Expected a single amino-acid letter (e.g., 'W').")]
    InvalidMutation(String),
}

/// Parses a 1-based alignment position.
pub fn parse_position(value: &str) -> Result<usize, ParseError> {
    match value.trim().parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position),
        _ => Err(ParseError::InvalidPosition(value.to_string())),
    }
}

/// Parses a one-letter amino-acid code, returning it in upper case.
pub fn parse_mutation(value: &str) -> Result<char, ParseError> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if residues::is_amino_acid(c) => Ok(c.to_ascii_uppercase()),
        _ => Err(ParseError::InvalidMutation(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_position_accepts_positive_integers() {
        assert_eq!(parse_position("1"), Ok(1));
        assert_eq!(parse_position("250"), Ok(250));
        assert_eq!(parse_position(" 7 "), Ok(7));
    }

    #[test]
    fn parse_position_rejects_zero_negative_and_non_numeric() {
        for bad in ["0", "-3", "abc", "", "1.5"] {
            assert_eq!(
                parse_position(bad),
                Err(ParseError::InvalidPosition(bad.to_string()))
            );
        }
    }

    #[test]
    fn parse_mutation_accepts_single_residue_letters() {
        assert_eq!(parse_mutation("W"), Ok('W'));
        assert_eq!(parse_mutation("k"), Ok('K'));
        assert_eq!(parse_mutation("X"), Ok('X'));
    }

    #[test]
    fn parse_mutation_rejects_other_input() {
        for bad in ["", "WA", "J", "-", "1"] {
            assert_eq!(
                parse_mutation(bad),
                Err(ParseError::InvalidMutation(bad.to_string()))
            );
        }
    }
}

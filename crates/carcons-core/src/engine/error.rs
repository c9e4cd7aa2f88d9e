use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Column {column} is outside sequence '{sequence}' of length {length}")]
    ColumnOutOfRange {
        column: usize,
        length: usize,
        sequence: String,
    },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Sequences '{first}' and '{second}' share no comparable columns (all double gaps)")]
    DegenerateComparison { first: String, second: String },

    #[error("Substitution matrix '{matrix}' has no score for residue pair '{first}'/'{second}'")]
    UnknownResidue {
        first: char,
        second: char,
        matrix: String,
    },

    #[error("Invalid scoring configuration: {0}")]
    Config(#[from] ConfigError),
}

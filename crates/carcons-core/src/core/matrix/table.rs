use super::SubstitutionMatrix;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

const COMMENT_PREFIX: char = '#';

#[derive(Debug, Error)]
pub enum MatrixLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io { path: String, source: io::Error },
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: MatrixParseErrorKind,
    },
    #[error("Matrix contains no residue header line")]
    MissingHeader,
    #[error("Expected {expected} score rows but found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("Matrix maximum must be positive to normalize scores (found {0})")]
    NonPositiveMaximum(f64),
}

#[derive(Debug, Error, PartialEq)]
pub enum MatrixParseErrorKind {
    #[error("Header entry '{0}' is not a single residue symbol")]
    InvalidSymbol(String),
    #[error("Residue symbol '{0}' appears more than once in the header")]
    DuplicateSymbol(char),
    #[error("Invalid score value '{0}'")]
    InvalidScore(String),
    #[error("Score value '{0}' is not finite")]
    NonFiniteScore(String),
    #[error("Expected {expected} scores but found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("Row label '{found}' does not match header residue '{expected}'")]
    RowLabelMismatch { expected: char, found: char },
}

/// A dense substitution matrix over a fixed residue alphabet.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    name: String,
    alphabet: Vec<u8>,
    index: [Option<usize>; 256],
    scores: Vec<f64>,
    max_score: f64,
}

impl ScoreTable {
    /// Builds a table from an alphabet and its row-major score rows. Error
    /// line numbers count the alphabet as line 1 and each row after it.
    pub fn from_rows(
        name: impl Into<String>,
        alphabet: &[u8],
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixLoadError> {
        let mut index = [None; 256];
        for (i, &symbol) in alphabet.iter().enumerate() {
            let symbol = symbol.to_ascii_uppercase();
            if index[symbol as usize].replace(i).is_some() {
                return Err(MatrixLoadError::Parse {
                    line: 1,
                    kind: MatrixParseErrorKind::DuplicateSymbol(symbol as char),
                });
            }
        }

        if rows.len() != alphabet.len() {
            return Err(MatrixLoadError::RowCount {
                expected: alphabet.len(),
                found: rows.len(),
            });
        }

        let mut scores = Vec::with_capacity(alphabet.len() * alphabet.len());
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != alphabet.len() {
                return Err(MatrixLoadError::Parse {
                    line: i + 2,
                    kind: MatrixParseErrorKind::ColumnCount {
                        expected: alphabet.len(),
                        found: row.len(),
                    },
                });
            }
            if let Some(value) = row.iter().find(|value| !value.is_finite()) {
                return Err(MatrixLoadError::Parse {
                    line: i + 2,
                    kind: MatrixParseErrorKind::NonFiniteScore(value.to_string()),
                });
            }
            scores.extend(row);
        }

        let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !(max_score > 0.0) {
            return Err(MatrixLoadError::NonPositiveMaximum(max_score));
        }

        Ok(Self {
            name: name.into(),
            alphabet: alphabet.iter().map(u8::to_ascii_uppercase).collect(),
            index,
            scores,
            max_score,
        })
    }

    pub fn load(path: &Path) -> Result<Self, MatrixLoadError> {
        let file = File::open(path).map_err(|e| MatrixLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self::read_from(&name, &mut BufReader::new(file)).map_err(|e| match e {
            MatrixLoadError::Io { source, .. } => MatrixLoadError::Io {
                path: path.to_string_lossy().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parses a whitespace-separated matrix: comment lines start with `#`, the
    /// first data line lists the residue symbols, and each following line is a
    /// score row, optionally prefixed by its residue label.
    pub fn read_from(name: &str, reader: &mut impl BufRead) -> Result<Self, MatrixLoadError> {
        let mut alphabet: Option<Vec<u8>> = None;
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res.map_err(|e| MatrixLoadError::Io {
                path: name.to_string(),
                source: e,
            })?;
            let line_num = line_num + 1;
            let content = line.trim();
            if content.is_empty() || content.starts_with(COMMENT_PREFIX) {
                continue;
            }

            if let Some(header) = alphabet.as_deref() {
                let row = parse_row(content, header, rows.len(), line_num)?;
                rows.push(row);
            } else {
                alphabet = Some(parse_header(content, line_num)?);
            }
        }

        let alphabet = alphabet.ok_or(MatrixLoadError::MissingHeader)?;
        Self::from_rows(name, &alphabet, rows)
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }
}

impl SubstitutionMatrix for ScoreTable {
    fn score(&self, a: u8, b: u8) -> Option<f64> {
        let i = self.index[a.to_ascii_uppercase() as usize]?;
        let j = self.index[b.to_ascii_uppercase() as usize]?;
        Some(self.scores[i * self.alphabet.len() + j])
    }

    fn max_score(&self) -> f64 {
        self.max_score
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn parse_header(content: &str, line: usize) -> Result<Vec<u8>, MatrixLoadError> {
    let mut alphabet: Vec<u8> = Vec::new();
    for token in content.split_whitespace() {
        let symbol = match token.as_bytes() {
            [symbol] => symbol.to_ascii_uppercase(),
            _ => {
                return Err(MatrixLoadError::Parse {
                    line,
                    kind: MatrixParseErrorKind::InvalidSymbol(token.to_string()),
                });
            }
        };
        if alphabet.contains(&symbol) {
            return Err(MatrixLoadError::Parse {
                line,
                kind: MatrixParseErrorKind::DuplicateSymbol(symbol as char),
            });
        }
        alphabet.push(symbol);
    }
    Ok(alphabet)
}

fn parse_row(
    content: &str,
    alphabet: &[u8],
    row_index: usize,
    line: usize,
) -> Result<Vec<f64>, MatrixLoadError> {
    let mut tokens: Vec<&str> = content.split_whitespace().collect();

    if let Some(first) = tokens.first() {
        if first.parse::<f64>().is_err() && first.len() == 1 {
            let label = first.as_bytes()[0].to_ascii_uppercase();
            if let Some(&expected) = alphabet.get(row_index) {
                if label != expected {
                    return Err(MatrixLoadError::Parse {
                        line,
                        kind: MatrixParseErrorKind::RowLabelMismatch {
                            expected: expected as char,
                            found: label as char,
                        },
                    });
                }
            }
            tokens.remove(0);
        }
    }

    if tokens.len() != alphabet.len() {
        return Err(MatrixLoadError::Parse {
            line,
            kind: MatrixParseErrorKind::ColumnCount {
                expected: alphabet.len(),
                found: tokens.len(),
            },
        });
    }

    tokens
        .into_iter()
        .map(|token| {
            let value = token.parse::<f64>().map_err(|_| MatrixLoadError::Parse {
                line,
                kind: MatrixParseErrorKind::InvalidScore(token.to_string()),
            })?;
            if !value.is_finite() {
                return Err(MatrixLoadError::Parse {
                    line,
                    kind: MatrixParseErrorKind::NonFiniteScore(token.to_string()),
                });
            }
            Ok(value)
        })
        .collect()
}

use thiserror::Error;

pub const DEFAULT_NUM_SD: f64 = 1.0;
pub const DEFAULT_MUTATED_POSITIONS: usize = 1;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Runtime parameters for scoring one substitution at one alignment column.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// 0-based alignment column.
    pub column: usize,
    /// Proposed replacement residue (upper case).
    pub mutant: u8,
    /// Number of standard deviations added to the mean to form the threshold.
    pub num_sd: f64,
    /// Number of positions assumed mutated when computing self-identity.
    pub mutated_positions: usize,
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    column: Option<usize>,
    mutant: Option<u8>,
    num_sd: Option<f64>,
    mutated_positions: Option<usize>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
    pub fn mutant(mut self, residue: u8) -> Self {
        self.mutant = Some(residue);
        self
    }
    pub fn num_sd(mut self, num_sd: f64) -> Self {
        self.num_sd = Some(num_sd);
        self
    }
    pub fn mutated_positions(mut self, n: usize) -> Self {
        self.mutated_positions = Some(n);
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        let column = self.column.ok_or(ConfigError::MissingParameter("column"))?;
        let mutant = self
            .mutant
            .ok_or(ConfigError::MissingParameter("mutant"))?
            .to_ascii_uppercase();
        if !mutant.is_ascii_alphabetic() {
            return Err(ConfigError::InvalidParameter {
                name: "mutant",
                reason: format!("'{}' is not a residue letter", mutant as char),
            });
        }

        let num_sd = self.num_sd.unwrap_or(DEFAULT_NUM_SD);
        if !num_sd.is_finite() || num_sd < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "num_sd",
                reason: format!("must be a finite, non-negative number (got {})", num_sd),
            });
        }

        let mutated_positions = self
            .mutated_positions
            .unwrap_or(DEFAULT_MUTATED_POSITIONS);
        if mutated_positions == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "mutated_positions",
                reason: "at least one position must be mutated".to_string(),
            });
        }

        Ok(ScoringConfig {
            column,
            mutant,
            num_sd,
            mutated_positions,
        })
    }
}

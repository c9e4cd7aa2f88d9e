//! Amino-acid substitution matrices.
//!
//! The scoring engine only needs two things from a matrix: the raw score for a
//! pair of residue symbols and the matrix-wide maximum used to normalize those
//! scores. [`SubstitutionMatrix`] captures exactly that, so the engine can be
//! driven by a matrix loaded from disk ([`ScoreTable`]) or by any other source.

pub mod table;

pub use table::{MatrixLoadError, MatrixParseErrorKind, ScoreTable};

/// Read-only access to pairwise residue substitution scores.
pub trait SubstitutionMatrix {
    /// Returns the raw score for substituting `a` with `b`, or `None` when the
    /// matrix does not define the pair.
    fn score(&self, a: u8, b: u8) -> Option<f64>;

    /// The largest score anywhere in the matrix.
    fn max_score(&self) -> f64;

    /// A human-readable identifier used in diagnostics.
    fn name(&self) -> &str;
}

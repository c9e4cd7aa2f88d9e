use super::error::EngineError;
use crate::core::models::sequence::AlignedSequence;
use crate::core::utils::residues;

/// Fractional identity between two aligned sequences.
///
/// Columns beyond the shorter sequence are ignored. A column where both
/// sequences carry a gap is excluded entirely; every other column counts
/// towards the denominator, and towards the numerator when the residues match.
pub fn pairwise_identity(a: &AlignedSequence, b: &AlignedSequence) -> Result<f64, EngineError> {
    let mut compared = 0usize;
    let mut matches = 0usize;

    for (&x, &y) in a.residues().iter().zip(b.residues()) {
        if residues::is_gap(x) && residues::is_gap(y) {
            continue;
        }
        compared += 1;
        if x == y {
            matches += 1;
        }
    }

    if compared == 0 {
        return Err(EngineError::DegenerateComparison {
            first: a.header().to_string(),
            second: b.header().to_string(),
        });
    }
    Ok(matches as f64 / compared as f64)
}

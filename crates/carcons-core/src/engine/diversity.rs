use super::error::EngineError;
use crate::core::matrix::SubstitutionMatrix;
use crate::core::models::sequence::AlignedSequence;
use crate::core::utils::residues;
use tracing::debug;

/// Raw substitution score for a residue pair.
///
/// A pair the matrix does not define scores zero when either side is a gap;
/// any other undefined pair is an error, as is a non-finite score.
pub fn substitution_score<M>(matrix: &M, a: u8, b: u8) -> Result<f64, EngineError>
where
    M: SubstitutionMatrix + ?Sized,
{
    if let Some(score) = matrix.score(a, b) {
        if !score.is_finite() {
            return Err(EngineError::MalformedInput(format!(
                "substitution matrix '{}' gives non-finite score {} for '{}'/'{}'",
                matrix.name(),
                score,
                a as char,
                b as char
            )));
        }
        return Ok(score);
    }
    if residues::is_gap(a) || residues::is_gap(b) {
        debug!(
            first = %(a as char),
            second = %(b as char),
            "Gap pair not defined by matrix; scoring as zero."
        );
        return Ok(0.0);
    }
    Err(EngineError::UnknownResidue {
        first: a as char,
        second: b as char,
        matrix: matrix.name().to_string(),
    })
}

fn residue_at(sequence: &AlignedSequence, column: usize) -> Result<u8, EngineError> {
    sequence
        .residue_at(column)
        .ok_or_else(|| EngineError::ColumnOutOfRange {
            column,
            length: sequence.len(),
            sequence: sequence.header().to_string(),
        })
}

/// Normalized similarity of two sequences at one column: the raw matrix score
/// divided by the matrix maximum. No clamping is applied.
pub fn positional_similarity<M>(
    a: &AlignedSequence,
    b: &AlignedSequence,
    column: usize,
    matrix: &M,
) -> Result<f64, EngineError>
where
    M: SubstitutionMatrix + ?Sized,
{
    let x = residue_at(a, column)?;
    let y = residue_at(b, column)?;
    Ok(substitution_score(matrix, x, y)? / matrix.max_score())
}

pub fn positional_diversity<M>(
    a: &AlignedSequence,
    b: &AlignedSequence,
    column: usize,
    matrix: &M,
) -> Result<f64, EngineError>
where
    M: SubstitutionMatrix + ?Sized,
{
    Ok(1.0 - positional_similarity(a, b, column, matrix)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::matrix::ScoreTable;

    /// Identity-style matrix over the standard residues: `matched` on the
    /// diagonal and `mismatched` elsewhere.
    pub fn identity_matrix(matched: f64, mismatched: f64) -> ScoreTable {
        let alphabet = b"ARNDCQEGHILKMFPSTWYV";
        let rows = (0..alphabet.len())
            .map(|i| {
                (0..alphabet.len())
                    .map(|j| if i == j { matched } else { mismatched })
                    .collect()
            })
            .collect();
        ScoreTable::from_rows("identity", alphabet, rows).unwrap()
    }
}

use super::context::ScoringContext;
use super::diversity::positional_diversity;
use super::error::EngineError;
use super::identity::pairwise_identity;
use crate::core::matrix::SubstitutionMatrix;
use crate::core::models::alignment::AlignmentSet;
use crate::core::models::sequence::AlignedSequence;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Smallest alignment (query plus two orthologues) for which a sample
/// standard deviation over the orthologue comparisons is defined.
pub const MIN_SEQUENCES: usize = 3;

/// Summary of identity-weighted diversity at one column across orthologues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityStatistics {
    pub mean: f64,
    pub standard_deviation: f64,
    pub orthologues: usize,
}

impl DiversityStatistics {
    /// Mean and standard deviation of a set of per-orthologue weighted
    /// diversities. With `N - 1` values (one per orthologue of an `N`-sequence
    /// alignment) the variance divisor is `N - 2`.
    pub fn from_weighted(weighted: &[f64]) -> Result<Self, EngineError> {
        let count = weighted.len();
        if count + 1 < MIN_SEQUENCES {
            return Err(EngineError::InsufficientData(format!(
                "at least {} sequences are required (query plus {} orthologues), found {}",
                MIN_SEQUENCES,
                MIN_SEQUENCES - 1,
                count + 1
            )));
        }

        let mean = weighted.iter().sum::<f64>() / count as f64;
        let sum_sq: f64 = weighted.iter().map(|w| (w - mean).powi(2)).sum();
        let standard_deviation = (sum_sq / (count - 1) as f64).sqrt();

        Ok(Self {
            mean,
            standard_deviation,
            orthologues: count,
        })
    }

    /// `mean + num_sd * standard_deviation`.
    pub fn threshold(&self, num_sd: f64) -> f64 {
        self.mean + num_sd * self.standard_deviation
    }
}

fn weighted_diversity<M>(
    query: &AlignedSequence,
    orthologue: &AlignedSequence,
    column: usize,
    matrix: &M,
) -> Result<f64, EngineError>
where
    M: SubstitutionMatrix + ?Sized,
{
    let diversity = positional_diversity(query, orthologue, column, matrix)?;
    let identity = pairwise_identity(query, orthologue)?;
    debug!(
        orthologue = orthologue.header(),
        diversity, identity, "Compared orthologue."
    );
    Ok(diversity * identity)
}

/// Identity-weighted positional diversity of every orthologue against the
/// query, in alignment order.
pub fn weighted_diversities<M>(
    alignment: &AlignmentSet,
    column: usize,
    matrix: &M,
) -> Result<Vec<f64>, EngineError>
where
    M: SubstitutionMatrix + Sync + ?Sized,
{
    let query = alignment.query();
    if column >= query.len() {
        return Err(EngineError::ColumnOutOfRange {
            column,
            length: query.len(),
            sequence: query.header().to_string(),
        });
    }

    #[cfg(not(feature = "parallel"))]
    let iterator = alignment.orthologues().iter();

    #[cfg(feature = "parallel")]
    let iterator = alignment.orthologues().par_iter();

    iterator
        .map(|orthologue| weighted_diversity(query, orthologue, column, matrix))
        .collect()
}

#[instrument(skip_all, name = "diversity_statistics", fields(column = context.config.column))]
pub fn run<M>(context: &ScoringContext<M>) -> Result<(Vec<f64>, DiversityStatistics), EngineError>
where
    M: SubstitutionMatrix + Sync + ?Sized,
{
    if context.alignment.len() < MIN_SEQUENCES {
        return Err(EngineError::InsufficientData(format!(
            "at least {} sequences are required (query plus {} orthologues), found {}",
            MIN_SEQUENCES,
            MIN_SEQUENCES - 1,
            context.alignment.len()
        )));
    }

    let weighted = weighted_diversities(context.alignment, context.config.column, context.matrix)?;
    let statistics = DiversityStatistics::from_weighted(&weighted)?;

    info!(
        mean = statistics.mean,
        standard_deviation = statistics.standard_deviation,
        orthologues = statistics.orthologues,
        "Computed weighted diversity statistics."
    );
    Ok((weighted, statistics))
}

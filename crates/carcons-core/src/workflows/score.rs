use crate::core::matrix::SubstitutionMatrix;
use crate::core::models::alignment::AlignmentSet;
use crate::core::utils::residues::three_letter_code;
use crate::engine::config::ScoringConfig;
use crate::engine::context::ScoringContext;
use crate::engine::error::EngineError;
use crate::engine::mutation::{self, MutationScore};
use crate::engine::statistics::{self, DiversityStatistics};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    /// Identity-weighted diversity of each orthologue, in alignment order.
    pub weighted_diversities: Vec<f64>,
    pub statistics: DiversityStatistics,
    pub threshold: f64,
    pub mutation: MutationScore,
}

impl ScoreReport {
    pub fn score(&self) -> f64 {
        self.mutation.score
    }
}

/// Computes the CAR score for one substitution at one alignment column.
#[instrument(skip_all, name = "score_workflow")]
pub fn run<M>(
    alignment: &AlignmentSet,
    matrix: &M,
    config: &ScoringConfig,
) -> Result<ScoreReport, EngineError>
where
    M: SubstitutionMatrix + Sync + ?Sized,
{
    info!(
        sequences = alignment.len(),
        column = config.column,
        mutant = three_letter_code(config.mutant as char).unwrap_or("UNK"),
        num_sd = config.num_sd,
        matrix = matrix.name(),
        "Starting CAR scoring."
    );

    let max_score = matrix.max_score();
    if !(max_score.is_finite() && max_score > 0.0) {
        return Err(EngineError::MalformedInput(format!(
            "substitution matrix '{}' has maximum score {}; a finite positive maximum is required",
            matrix.name(),
            max_score
        )));
    }

    let context = ScoringContext::new(alignment, matrix, config);

    let (weighted_diversities, statistics) = statistics::run(&context)?;
    let threshold = statistics.threshold(config.num_sd);
    info!(threshold, "Derived diversity threshold.");

    let mutation = mutation::run(&context, threshold)?;

    Ok(ScoreReport {
        weighted_diversities,
        statistics,
        threshold,
        mutation,
    })
}

use super::context::ScoringContext;
use super::diversity::substitution_score;
use super::error::EngineError;
use crate::core::matrix::SubstitutionMatrix;
use crate::core::models::sequence::AlignedSequence;
use crate::core::utils::residues;
use tracing::{info, instrument, warn};

/// Breakdown of the CAR score for one substitution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationScore {
    pub native: u8,
    pub mutant: u8,
    pub raw_similarity: f64,
    pub mutant_diversity: f64,
    pub self_identity: f64,
    pub threshold: f64,
    pub score: f64,
}

/// Fraction of the query's non-gap residues left unchanged after
/// `mutated_positions` substitutions.
pub fn self_identity(query: &AlignedSequence, mutated_positions: usize) -> Result<f64, EngineError> {
    let residues = query.non_gap_count();
    if residues == 0 {
        return Err(EngineError::InsufficientData(format!(
            "query sequence '{}' contains only gaps",
            query.header()
        )));
    }
    if mutated_positions > residues {
        return Err(EngineError::InsufficientData(format!(
            "cannot mutate {} positions of query sequence '{}' with {} residues",
            mutated_positions,
            query.header(),
            residues
        )));
    }
    Ok((residues - mutated_positions) as f64 / residues as f64)
}

/// `1 - score(native, mutant) / max`, returned with the raw score.
pub fn mutant_diversity<M>(native: u8, mutant: u8, matrix: &M) -> Result<(f64, f64), EngineError>
where
    M: SubstitutionMatrix + ?Sized,
{
    let raw = substitution_score(matrix, native, mutant)?;
    Ok((raw, 1.0 - raw / matrix.max_score()))
}

#[instrument(skip_all, name = "mutation_scorer", fields(column = context.config.column))]
pub fn run<M>(context: &ScoringContext<M>, threshold: f64) -> Result<MutationScore, EngineError>
where
    M: SubstitutionMatrix + ?Sized,
{
    let query = context.alignment.query();
    let column = context.config.column;
    let mutant = context.config.mutant;

    let native = query
        .residue_at(column)
        .ok_or_else(|| EngineError::ColumnOutOfRange {
            column,
            length: query.len(),
            sequence: query.header().to_string(),
        })?;
    if residues::is_gap(native) {
        warn!(column, "Query has a gap at the scored column.");
    }

    let (raw_similarity, mutant_diversity) = mutant_diversity(native, mutant, context.matrix)?;
    let self_identity = self_identity(query, context.config.mutated_positions)?;
    let score = threshold - mutant_diversity * self_identity;

    info!(
        native = %(native as char),
        mutant = %(mutant as char),
        raw_similarity,
        mutant_diversity,
        self_identity,
        score,
        "Scored mutation."
    );

    Ok(MutationScore {
        native,
        mutant,
        raw_similarity,
        mutant_diversity,
        self_identity,
        threshold,
        score,
    })
}

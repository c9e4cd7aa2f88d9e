use super::config::ScoringConfig;
use crate::core::matrix::SubstitutionMatrix;
use crate::core::models::alignment::AlignmentSet;

/// Everything one scoring operation reads: the alignment, the matrix and the
/// runtime parameters. Nothing here is mutated during scoring.
pub struct ScoringContext<'a, M>
where
    M: SubstitutionMatrix + ?Sized,
{
    pub alignment: &'a AlignmentSet,
    pub matrix: &'a M,
    pub config: &'a ScoringConfig,
}

impl<'a, M> ScoringContext<'a, M>
where
    M: SubstitutionMatrix + ?Sized,
{
    pub fn new(alignment: &'a AlignmentSet, matrix: &'a M, config: &'a ScoringConfig) -> Self {
        Self {
            alignment,
            matrix,
            config,
        }
    }
}

impl<M> Clone for ScoringContext<'_, M>
where
    M: SubstitutionMatrix + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ScoringContext<'_, M> where M: SubstitutionMatrix + ?Sized {}

use super::sequence::AlignedSequence;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("An alignment must contain at least one sequence")]
    Empty,
    #[error("The query sequence '{0}' contains no residues")]
    EmptyQuery(String),
}

/// An ordered set of aligned sequences. Index 0 is the query; every later
/// sequence is an orthologue, kept in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentSet {
    sequences: Vec<AlignedSequence>,
}

impl AlignmentSet {
    pub fn new(sequences: Vec<AlignedSequence>) -> Result<Self, AlignmentError> {
        let query = sequences.first().ok_or(AlignmentError::Empty)?;
        if query.is_empty() {
            return Err(AlignmentError::EmptyQuery(query.header().to_string()));
        }
        Ok(Self { sequences })
    }

    pub fn query(&self) -> &AlignedSequence {
        &self.sequences[0]
    }

    pub fn orthologues(&self) -> &[AlignedSequence] {
        &self.sequences[1..]
    }

    /// Total number of sequences, query included.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(header: &str, residues: &str) -> AlignedSequence {
        AlignedSequence::new(header, residues.as_bytes())
    }

    #[test]
    fn new_fails_for_empty_input() {
        assert_eq!(AlignmentSet::new(vec![]), Err(AlignmentError::Empty));
    }

    #[test]
    fn new_fails_when_query_has_no_residues() {
        let result = AlignmentSet::new(vec![seq("q", ""), seq("o", "ACD")]);
        assert_eq!(result, Err(AlignmentError::EmptyQuery("q".to_string())));
    }

    #[test]
    fn query_and_orthologues_follow_input_order() {
        let set = AlignmentSet::new(vec![seq("q", "ACDE"), seq("o1", "ACDF"), seq("o2", "AC-E")])
            .unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.query().header(), "q");
        let headers: Vec<_> = set.orthologues().iter().map(|s| s.header()).collect();
        assert_eq!(headers, vec!["o1", "o2"]);
    }

    #[test]
    fn single_sequence_alignment_has_no_orthologues() {
        let set = AlignmentSet::new(vec![seq("q", "ACDE")]).unwrap();
        assert!(set.orthologues().is_empty());
    }
}

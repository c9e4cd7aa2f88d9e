use crate::core::utils::residues::{self, normalize_symbol};

/// A single row of a multiple sequence alignment.
///
/// Residues are stored as normalized single-byte symbols (upper case, with the
/// gap symbol canonicalized). The sequence is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequence {
    header: String,
    residues: Vec<u8>,
}

impl AlignedSequence {
    pub fn new(header: impl Into<String>, residues: &[u8]) -> Self {
        Self {
            header: header.into(),
            residues: residues.iter().copied().map(normalize_symbol).collect(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Residue at an alignment column, or `None` past the end of the sequence.
    pub fn residue_at(&self, column: usize) -> Option<u8> {
        self.residues.get(column).copied()
    }

    pub fn non_gap_count(&self) -> usize {
        self.residues
            .iter()
            .filter(|&&symbol| !residues::is_gap(symbol))
            .count()
    }
}

impl std::fmt::Display for AlignedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.residues))
    }
}

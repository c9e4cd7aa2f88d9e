use super::traits::AlignmentFile;
use crate::core::models::alignment::{AlignmentError, AlignmentSet};
use crate::core::models::sequence::AlignedSequence;
use std::io::{self, BufRead};
use thiserror::Error;

const HEADER_PREFIX: char = '>';

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: FastaParseErrorKind },
    #[error("Alignment contains no sequences")]
    Empty,
    #[error("Invalid alignment: {0}")]
    Alignment(#[from] AlignmentError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FastaParseErrorKind {
    #[error("Sequence data found before the first '>' header")]
    DataBeforeHeader,
    #[error("Record '{0}' contains no residues")]
    EmptyRecord(String),
}

struct PendingRecord {
    header: String,
    line: usize,
    residues: Vec<u8>,
}

impl PendingRecord {
    fn finish(self) -> Result<AlignedSequence, FastaError> {
        if self.residues.is_empty() {
            return Err(FastaError::Parse {
                line: self.line,
                kind: FastaParseErrorKind::EmptyRecord(self.header),
            });
        }
        Ok(AlignedSequence::new(self.header, &self.residues))
    }
}

/// Reader for FASTA-formatted multiple sequence alignments.
pub struct FastaFile;

impl AlignmentFile for FastaFile {
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<AlignmentSet, Self::Error> {
        let mut sequences = Vec::new();
        let mut current: Option<PendingRecord> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let content = line.trim();

            if content.is_empty() {
                continue;
            }

            if let Some(header) = content.strip_prefix(HEADER_PREFIX) {
                if let Some(record) = current.take() {
                    sequences.push(record.finish()?);
                }
                current = Some(PendingRecord {
                    header: header.trim().to_string(),
                    line: line_num,
                    residues: Vec::new(),
                });
                continue;
            }

            let record = current.as_mut().ok_or(FastaError::Parse {
                line: line_num,
                kind: FastaParseErrorKind::DataBeforeHeader,
            })?;
            record
                .residues
                .extend(content.bytes().filter(|b| !b.is_ascii_whitespace()));
        }

        if let Some(record) = current.take() {
            sequences.push(record.finish()?);
        }

        if sequences.is_empty() {
            return Err(FastaError::Empty);
        }
        Ok(AlignmentSet::new(sequences)?)
    }
}

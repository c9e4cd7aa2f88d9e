use crate::core::models::alignment::AlignmentSet;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading aligned sequence file formats.
pub trait AlignmentFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads an alignment from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader reports an I/O failure.
    fn read_from(reader: &mut impl BufRead) -> Result<AlignmentSet, Self::Error>;

    /// Reads an alignment from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<AlignmentSet, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

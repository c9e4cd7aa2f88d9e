//! Provides input functionality for multiple sequence alignment formats.
//!
//! Readers produce an [`AlignmentSet`](crate::core::models::alignment::AlignmentSet)
//! whose first record is the query sequence and whose remaining records are
//! orthologues in file order.

pub mod fasta;
pub mod traits;

//! # Core Module
//!
//! The stateless foundation of the CAR scoring library: the data models for
//! aligned sequences, the substitution-matrix abstraction with its text-format
//! loader, alignment file readers, and residue-symbol helpers.
//!
//! - **Alignment Representation** ([`models`]) - Aligned sequences and the ordered
//!   query-first alignment set
//! - **Substitution Scores** ([`matrix`]) - The `SubstitutionMatrix` trait and the
//!   dense `ScoreTable` loaded from `.mat` files
//! - **File I/O** ([`io`]) - FASTA alignment reading
//! - **Residue Symbols** ([`utils`]) - Gap handling and amino-acid codes

pub mod io;
pub mod matrix;
pub mod models;
pub mod utils;

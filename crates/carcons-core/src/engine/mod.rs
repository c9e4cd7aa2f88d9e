//! # Engine Module
//!
//! The scoring engine behind the Conservation and Allowed Residues (CAR) score.
//!
//! ## Overview
//!
//! For a target alignment column the engine compares the query against every
//! orthologue, weighting each orthologue's positional diversity by its overall
//! identity to the query. The mean and sample standard deviation of those
//! weighted values define a threshold of naturally tolerated diversity, which is
//! then offset by the diversity of the proposed substitution itself.
//!
//! ## Architecture
//!
//! - **Pairwise Identity** ([`identity`]) - Fractional identity ignoring double gaps
//! - **Positional Diversity** ([`diversity`]) - Matrix-normalized dissimilarity at a column
//! - **Diversity Statistics** ([`statistics`]) - Mean, standard deviation and threshold
//! - **Mutation Scoring** ([`mutation`]) - Final score for a proposed substitution
//! - **Configuration** ([`config`]) - Runtime scoring parameters and their builder
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Every function is a pure computation over borrowed, read-only inputs. The
//! per-orthologue comparisons run in parallel when the `parallel` feature is
//! enabled; results are reduced in alignment order, so output does not depend
//! on the thread count.

pub mod config;
pub mod context;
pub mod diversity;
pub mod error;
pub mod identity;
pub mod mutation;
pub mod statistics;

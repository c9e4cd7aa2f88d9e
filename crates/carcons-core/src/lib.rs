//! # CARCONS Core Library
//!
//! Scores the likely impact of a point mutation in a protein from a multiple
//! sequence alignment of functional orthologues, using Conservation and Allowed
//! Residues (CAR): how conserved the column is across orthologues, and how
//! similar the proposed residue is to what those orthologues tolerate there.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless alignment models, the
//!   substitution-matrix abstraction and loader, and alignment file readers.
//!
//! - **[`engine`]: The Scoring Engine.** Pairwise identity, positional diversity,
//!   diversity statistics and the mutation scorer, each a pure function of
//!   borrowed inputs.
//!
//! - **[`workflows`]: The Public API.** [`workflows::score::run`] ties the engine
//!   together and returns a full [`workflows::score::ScoreReport`].

pub mod core;
pub mod engine;
pub mod workflows;

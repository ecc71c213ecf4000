//! Top-level module for the Markov chain model.
//!
//! This module provides:
//! - Provenance-tagged tokens (`Word`)
//! - Fixed-length lookup windows (`Prefix`)
//! - The successor table (`Chain`)
//! - Generation parameters (`GenerateOptions`)
//! - The generation interface (`Generator`)

/// Token plus the id of the document it came from.
pub mod word;

/// Fixed-length window of preceding words, serialized as a map key.
pub mod prefix;

/// Prefix → successors table, populated one document at a time.
pub mod chain;

/// Generation parameters (word limit, retry budget).
pub mod generate_options;

/// Random walk over a `Chain` with the source-variation rule.
///
/// Borrows the chain read-only and owns an injected random source.
pub mod generator;

//! Word-level Markov chain text generation library.
//!
//! This crate provides a source-aware Markov chain including:
//! - Fixed-length word prefixes used as lookup keys
//! - A successor table recording which document every word came from
//! - Seeded, bounded generation that only accepts texts mixing several sources
//! - Text normalization and concurrent ingestion of fetched documents
//!
//! Retrieval of the documents themselves is left to the caller.

/// Chain data model and generation.
pub mod model;

/// Document normalization and chain population.
pub mod ingest;

/// Text helpers (mention trimming, tokenization).
pub mod text;

/// Error type shared by the crate.
pub mod error;

pub use error::ChainError;
pub use ingest::{ChainBuilder, Document, IngestOptions, IngestReport};
pub use model::chain::Chain;
pub use model::generate_options::GenerateOptions;
pub use model::generator::{Generation, Generator};
pub use model::prefix::Prefix;
pub use model::word::Word;

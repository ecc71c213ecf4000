/// Errors surfaced by chain construction and generation.
///
/// Chain exhaustion (no successor for the current prefix) is not an error:
/// it simply ends one generation attempt early.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// A prefix must hold at least one word.
	#[error("prefix length must be >= 1, got {0}")]
	InvalidPrefixLength(usize),

	/// Nothing was ingested, there is nothing to walk.
	#[error("the model is empty, ingest at least one document first")]
	EmptyModel,

	/// Fewer than two distinct sources were ingested, so no output can
	/// ever blend material from more than one of them.
	#[error("the model was built from {sources} source(s), at least 2 are required")]
	SingleSource { sources: usize },

	/// A single word can never come from two sources.
	#[error("word limit must be >= 2 to mix sources, got {0}")]
	WordLimitTooSmall(usize),

	/// The retry budget ran out before an attempt mixed two sources.
	/// `best_effort` holds the text of the last rejected attempt.
	#[error("no source variation achieved after {attempts} attempt(s)")]
	NoVariation { attempts: usize, best_effort: String },
}

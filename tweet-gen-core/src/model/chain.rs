use std::collections::{HashMap, HashSet};

use crate::error::ChainError;
use super::prefix::Prefix;
use super::word::Word;

/// Word-level Markov chain keyed on a fixed-length prefix.
///
/// The `Chain` maps the serialized form of every `K`-word window seen during
/// ingestion to the list of words that followed it, each word carrying the
/// identifier of the document it came from.
///
/// # Responsibilities
/// - Record prefix → successor associations, one document at a time
/// - Answer successor lookups for generation
/// - Track how many distinct sources contributed
///
/// # Invariants
/// - `prefix_len >= 1` and never changes after construction
/// - Every word stored under key `p` followed the window `p` in its source document
/// - Successor lists only grow, in insertion order
#[derive(Clone, Debug)]
pub struct Chain {
	/// Number of words in a prefix (K).
	prefix_len: usize,

	/// Serialized prefix → observed successors.
	links: HashMap<String, Vec<Word>>,

	/// Distinct source ids that contributed at least one word.
	sources: HashSet<String>,
}

impl Chain {
	/// Creates an empty chain with prefixes of `prefix_len` words.
	///
	/// # Errors
	/// Returns an error if `prefix_len < 1`.
	pub fn new(prefix_len: usize) -> Result<Self, ChainError> {
		if prefix_len < 1 {
			return Err(ChainError::InvalidPrefixLength(prefix_len));
		}
		Ok(Self {
			prefix_len,
			links: HashMap::new(),
			sources: HashSet::new(),
		})
	}

	/// Returns the configured prefix length.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Returns a fresh, all-empty prefix sized for this chain.
	pub fn start_prefix(&self) -> Prefix {
		Prefix::new(self.prefix_len)
	}

	/// Adds one document to the chain.
	///
	/// Scans the words left to right with a rolling prefix that starts empty.
	/// The prefix is local to this call so no association is ever recorded
	/// across the boundary between two documents.
	pub fn ingest(&mut self, document: &[Word]) {
		let mut prefix = self.start_prefix();
		for word in document {
			self.links.entry(prefix.key()).or_default().push(word.clone());
			prefix.shift(word.text());

			if !self.sources.contains(word.source_id()) {
				self.sources.insert(word.source_id().to_owned());
			}
		}
	}

	/// Returns every word observed after `prefix`, in insertion order.
	///
	/// Returns an empty slice if the prefix was never seen.
	pub fn successors(&self, prefix: &Prefix) -> &[Word] {
		self.successors_by_key(&prefix.key())
	}

	/// Same as `successors`, with an already serialized key.
	pub fn successors_by_key(&self, key: &str) -> &[Word] {
		self.links.get(key).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Returns true if nothing has been ingested.
	pub fn is_empty(&self) -> bool {
		self.links.is_empty()
	}

	/// Number of distinct prefixes recorded.
	pub fn prefix_count(&self) -> usize {
		self.links.len()
	}

	/// Total number of stored successor occurrences.
	pub fn word_count(&self) -> usize {
		self.links.values().map(Vec::len).sum()
	}

	/// Number of distinct sources that contributed words.
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn doc(text: &str, source: &str) -> Vec<Word> {
		text.split_whitespace().map(|w| Word::new(w, source)).collect()
	}

	#[test]
	fn rejects_zero_prefix_length() {
		assert_eq!(Chain::new(0).unwrap_err(), ChainError::InvalidPrefixLength(0));
	}

	#[test]
	fn ingest_records_every_window() {
		let mut chain = Chain::new(2).unwrap();
		chain.ingest(&doc("the cat sat on the mat", "a"));

		let expect = |prefix: [&str; 2], next: &str| {
			let words = chain.successors(&Prefix::from_words(prefix));
			assert!(
				words.iter().any(|w| w.text() == next && w.source_id() == "a"),
				"{prefix:?} should lead to {next}"
			);
		};
		expect(["", ""], "the");
		expect(["", "the"], "cat");
		expect(["the", "cat"], "sat");
		expect(["cat", "sat"], "on");
		expect(["sat", "on"], "the");
		expect(["on", "the"], "mat");

		assert_eq!(chain.word_count(), 6);
		assert_eq!(chain.source_count(), 1);
	}

	#[test]
	fn documents_do_not_leak_into_each_other() {
		let mut chain = Chain::new(1).unwrap();
		chain.ingest(&doc("hello world", "a"));
		chain.ingest(&doc("again now", "b"));

		assert!(chain.successors(&Prefix::from_words(["world"])).is_empty());
		let starts: Vec<&str> = chain
			.successors(&Prefix::new(1))
			.iter()
			.map(Word::text)
			.collect();
		assert_eq!(starts, ["hello", "again"]);
	}

	#[test]
	fn duplicates_are_kept_in_insertion_order() {
		let mut chain = Chain::new(1).unwrap();
		chain.ingest(&doc("go go go", "a"));
		let after_go = chain.successors(&Prefix::from_words(["go"]));
		assert_eq!(after_go.len(), 2);
		assert_eq!(chain.prefix_count(), 2);
	}

	#[test]
	fn empty_document_changes_nothing() {
		let mut chain = Chain::new(2).unwrap();
		chain.ingest(&[]);
		assert!(chain.is_empty());
		assert_eq!(chain.source_count(), 0);
	}
}

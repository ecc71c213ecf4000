use std::fmt::Display;
use std::sync::mpsc;
use std::thread;

use log::{debug, info, warn};

use crate::error::ChainError;
use crate::model::chain::Chain;
use crate::model::word::Word;
use crate::text::{tokenize, trim_leading_mentions};

/// Number of fetch threads spawned per CPU by `ChainBuilder::build_concurrently`.
const FETCH_FACTOR: usize = 8;

/// A raw text sample with a stable identifier.
///
/// The identifier becomes the `source_id` of every word of the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
	pub id: String,
	pub text: String,
}

impl Document {
	pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
		Self { id: id.into(), text: text.into() }
	}

	/// Text with surrounding whitespace and leading mentions removed.
	pub fn content(&self) -> &str {
		trim_leading_mentions(self.text.trim_start()).trim()
	}

	/// Tokenizes the document, tagging every token with the document id.
	pub fn words(&self) -> Vec<Word> {
		tokenize(self.content()).map(|token| Word::new(token, self.id.as_str())).collect()
	}
}

/// Configuration of a `ChainBuilder`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IngestOptions {
	/// Number of words in a chain prefix (K).
	pub prefix_len: usize,

	/// Documents whose content is shorter than this many characters are skipped.
	pub min_length: usize,
}

impl Default for IngestOptions {
	fn default() -> Self {
		Self { prefix_len: 2, min_length: 0 }
	}
}

/// Outcome of a concurrent build.
///
/// `failures` lists the jobs whose fetch failed, with their error. The chain
/// holds whatever the other jobs produced.
#[derive(Debug)]
pub struct IngestReport<E> {
	pub chain: Chain,
	/// Documents added to the chain.
	pub documents: usize,
	/// Documents dropped by the length filter or empty after normalization.
	pub skipped: usize,
	pub failures: Vec<(String, E)>,
}

/// Populates a `Chain` from documents.
///
/// # Responsibilities
/// - Normalize and tokenize documents
/// - Skip documents below the configured minimum length
/// - Serialize merges coming from concurrent fetchers
pub struct ChainBuilder {
	chain: Chain,
	min_length: usize,
	documents: usize,
	skipped: usize,
}

impl ChainBuilder {
	/// Creates a builder around an empty chain.
	///
	/// # Errors
	/// Returns an error if `options.prefix_len < 1`.
	pub fn new(options: IngestOptions) -> Result<Self, ChainError> {
		Ok(Self {
			chain: Chain::new(options.prefix_len)?,
			min_length: options.min_length,
			documents: 0,
			skipped: 0,
		})
	}

	/// Adds a document to the chain.
	///
	/// Returns `false` if the document was skipped.
	pub fn add_document(&mut self, document: &Document) -> bool {
		let content = document.content();
		if content.is_empty() || content.chars().count() < self.min_length {
			debug!("skipping document {} ({} chars)", document.id, content.chars().count());
			self.skipped += 1;
			return false;
		}

		self.chain.ingest(&document.words());
		self.documents += 1;
		true
	}

	/// Adds every document of `documents`, returns how many were kept.
	pub fn add_documents<'d, I>(&mut self, documents: I) -> usize
	where
		I: IntoIterator<Item = &'d Document>,
	{
		documents.into_iter().filter(|d| self.add_document(d)).count()
	}

	/// Returns the chain built so far.
	pub fn finish(self) -> Chain {
		self.chain
	}

	/// Fetches every job concurrently and merges the results into the chain.
	///
	/// # Behavior
	/// - Splits `jobs` into chunks (based on CPU cores * factor).
	/// - Spawns one thread per chunk, each calling `fetch` for its jobs in order.
	/// - Results come back over an MPSC channel and are merged one at a time by
	///   the calling thread, which is the only writer of the chain.
	/// - Returns once every thread has finished.
	///
	/// # Notes
	/// - A failing job is logged and reported in `IngestReport::failures`,
	///   it does not stop the others.
	pub fn build_concurrently<J, E, F>(mut self, jobs: &[J], fetch: F) -> IngestReport<E>
	where
		J: AsRef<str> + Sync,
		E: Display + Send,
		F: Fn(&J) -> Result<Vec<Document>, E> + Sync,
	{
		let chunks = (num_cpus::get() * FETCH_FACTOR).max(1);
		let chunk_size = jobs.len().div_ceil(chunks).max(1);
		let mut failures = Vec::new();

		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for chunk in jobs.chunks(chunk_size) {
				let tx = tx.clone();
				let fetch = &fetch;

				scope.spawn(move || {
					for job in chunk {
						let result = fetch(job);
						if tx.send((job.as_ref().to_owned(), result)).is_err() {
							return;
						}
					}
				});
			}
			drop(tx);

			for (label, result) in rx.iter() {
				match result {
					Ok(documents) => {
						let kept = self.add_documents(&documents);
						info!("{label}: {kept}/{} documents ingested", documents.len());
					}
					Err(e) => {
						warn!("{label}: fetch failed: {e}");
						failures.push((label, e));
					}
				}
			}
		});

		info!(
			"chain built: {} prefixes, {} words, {} sources",
			self.chain.prefix_count(),
			self.chain.word_count(),
			self.chain.source_count()
		);

		IngestReport {
			chain: self.chain,
			documents: self.documents,
			skipped: self.skipped,
			failures,
		}
	}
}

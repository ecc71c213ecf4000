use std::collections::HashSet;

use log::{trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ChainError;
use super::chain::Chain;
use super::generate_options::GenerateOptions;
use super::word::Word;

/// Result of a successful generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	/// Generated words joined with single spaces.
	pub text: String,

	/// The words chosen during the accepted walk, with their provenance.
	pub words: Vec<Word>,

	/// Number of walks performed, the accepted one included.
	pub attempts: usize,
}

impl Generation {
	/// Number of distinct sources the accepted walk drew from.
	pub fn distinct_sources(&self) -> usize {
		self.words.iter().map(Word::source_id).collect::<HashSet<_>>().len()
	}
}

/// One walk over the chain.
struct Walk<'a> {
	words: Vec<&'a Word>,
	varied: bool,
}

impl Walk<'_> {
	fn text(&self) -> String {
		self.words.iter().map(|w| w.text()).collect::<Vec<_>>().join(" ")
	}
}

/// High-level text generator over a populated `Chain`.
///
/// # Responsibilities
/// - Walk the chain from the empty prefix, picking successors uniformly at random
/// - Accept only walks that blend words from at least two sources
/// - Bound the number of walks and report failure explicitly
///
/// The chain is only borrowed: any number of generators can read the same
/// chain concurrently once ingestion is over. The random source is injected so
/// that runs can be reproduced with a fixed seed.
#[derive(Debug)]
pub struct Generator<'a, R> {
	chain: &'a Chain,
	rng: R,
}

impl<'a> Generator<'a, StdRng> {
	/// Creates a generator whose random stream is fully determined by `seed`.
	pub fn seeded(chain: &'a Chain, seed: u64) -> Self {
		Self::new(chain, StdRng::seed_from_u64(seed))
	}

	/// Creates a generator seeded from the operating system.
	pub fn from_entropy(chain: &'a Chain) -> Self {
		Self::new(chain, StdRng::from_os_rng())
	}
}

impl<'a, R: Rng> Generator<'a, R> {
	/// Creates a generator drawing its choices from `rng`.
	pub fn new(chain: &'a Chain, rng: R) -> Self {
		Self { chain, rng }
	}

	/// Returns the chain this generator reads from.
	pub fn chain(&self) -> &'a Chain {
		self.chain
	}

	/// Generates a text of at most `max_words` words mixing at least two
	/// sources, with the default retry budget.
	///
	/// # Errors
	/// See `generate_with`.
	pub fn generate(&mut self, max_words: usize) -> Result<String, ChainError> {
		self.generate_with(&GenerateOptions::new(max_words)).map(|g| g.text)
	}

	/// Generates a text according to `options`.
	///
	/// # Behavior
	/// - Each attempt walks the chain from an all-empty prefix, for at most
	///   `max_words` steps, stopping early when the current prefix has no successor.
	/// - An attempt is accepted once two consecutive picks come from different sources.
	/// - Rejected attempts are discarded and the walk restarts from scratch.
	///
	/// # Errors
	/// - `EmptyModel` if the chain holds nothing.
	/// - `SingleSource` if fewer than two sources were ingested.
	/// - `WordLimitTooSmall` if `max_words < 2`.
	/// - `NoVariation` once `max_attempts` walks were rejected. The error carries
	///   the text of the last walk.
	pub fn generate_with(&mut self, options: &GenerateOptions) -> Result<Generation, ChainError> {
		if self.chain.is_empty() {
			return Err(ChainError::EmptyModel);
		}
		let sources = self.chain.source_count();
		if sources < 2 {
			return Err(ChainError::SingleSource { sources });
		}
		if options.max_words < 2 {
			return Err(ChainError::WordLimitTooSmall(options.max_words));
		}

		let max_attempts = options.attempts();
		let mut last = String::new();
		for attempt in 1..=max_attempts {
			let walk = self.walk(options.max_words);
			if walk.varied {
				return Ok(Generation {
					text: walk.text(),
					words: walk.words.into_iter().cloned().collect(),
					attempts: attempt,
				});
			}
			trace!("attempt {attempt} drew from a single source ({} words), retrying", walk.words.len());
			last = walk.text();
		}

		warn!("no source variation after {max_attempts} attempts");
		Err(ChainError::NoVariation { attempts: max_attempts, best_effort: last })
	}

	/// Performs a single walk of at most `max_words` steps.
	fn walk(&mut self, max_words: usize) -> Walk<'a> {
		let chain = self.chain;
		let mut prefix = chain.start_prefix();
		let mut words: Vec<&'a Word> = Vec::with_capacity(max_words);
		let mut last_source: Option<&'a str> = None;
		let mut varied = false;

		for _ in 0..max_words {
			let choices = chain.successors(&prefix);
			if choices.is_empty() {
				break;
			}

			let next = &choices[self.rng.random_range(0..choices.len())];
			if last_source.is_some_and(|id| id != next.source_id()) {
				varied = true;
			}
			last_source = Some(next.source_id());
			words.push(next);

			prefix.shift(next.text());
		}

		Walk { words, varied }
	}
}

/// Default maximum number of words per generated text.
pub const DEFAULT_MAX_WORDS: usize = 40;

/// Default number of attempts before giving up on source variation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Parameters of a single `Generator::generate_with` call.
///
/// # Invariants
/// - `max_words` bounds the length of every attempt, walks may stop earlier
///   when the chain runs dry
/// - `max_attempts` bounds the number of walks, a value of 0 is treated as 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
	/// Maximum number of words in the generated text.
	pub max_words: usize,

	/// Number of walks to try before reporting that no attempt mixed sources.
	pub max_attempts: usize,
}

impl GenerateOptions {
	/// Options producing at most `max_words` words with the default retry budget.
	pub fn new(max_words: usize) -> Self {
		Self { max_words, ..Self::default() }
	}

	/// Sets the retry budget.
	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts;
		self
	}

	/// Effective number of attempts (at least one).
	pub(crate) fn attempts(&self) -> usize {
		self.max_attempts.max(1)
	}
}

impl Default for GenerateOptions {
	fn default() -> Self {
		Self {
			max_words: DEFAULT_MAX_WORDS,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}
}

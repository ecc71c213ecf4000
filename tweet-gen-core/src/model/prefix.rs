/// Separator placed between the words of a serialized prefix.
pub const DELIMITER: char = ' ';

/// Escape character used when a word contains `DELIMITER` or itself.
const ESCAPE: char = '\\';

/// A fixed-length window over the last `K` words seen.
///
/// A `Prefix` is the lookup key of a `Chain`: every stored word is filed under
/// the serialized form of the `K` words that preceded it.
///
/// # Invariants
/// - The window always holds exactly `K` words (`K >= 1`)
/// - A fresh prefix holds `K` empty strings, so the first words of a document
///   are reachable from the all-empty key
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
	words: Vec<String>,
}

impl Prefix {
	/// Creates an empty prefix of `len` slots.
	///
	/// `len` is validated by `Chain::new`, a zero length produces a key that
	/// no chain ever stores.
	pub fn new(len: usize) -> Self {
		Self { words: vec![String::new(); len] }
	}

	/// Builds a prefix holding exactly the given words, oldest first.
	pub fn from_words<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { words: words.into_iter().map(Into::into).collect() }
	}

	/// Number of slots in the window.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Returns true if the window has no slots.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Words currently in the window, oldest first.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Serializes the prefix into a map key.
	///
	/// Words are joined with `DELIMITER`. Occurrences of the delimiter or of
	/// the escape character inside a word are backslash-escaped, so two
	/// different word sequences never share a key.
	///
	/// Examples:
	/// - `["the", "cat"]` → `"the cat"`
	/// - `["a b", "c"]` → `"a\ b c"`
	pub fn key(&self) -> String {
		let capacity = self.words.iter().map(|w| w.len() + 1).sum();
		let mut key = String::with_capacity(capacity);
		for (i, word) in self.words.iter().enumerate() {
			if i > 0 {
				key.push(DELIMITER);
			}
			for c in word.chars() {
				if c == DELIMITER || c == ESCAPE {
					key.push(ESCAPE);
				}
				key.push(c);
			}
		}
		key
	}

	/// Drops the oldest word and appends `word` at the end.
	///
	/// The length of the window is preserved.
	pub fn shift(&mut self, word: &str) {
		if self.words.is_empty() {
			return;
		}
		self.words.rotate_left(1);
		if let Some(last) = self.words.last_mut() {
			last.clear();
			last.push_str(word);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fresh_prefix_is_all_empty() {
		let prefix = Prefix::new(3);
		assert_eq!(prefix.len(), 3);
		assert!(prefix.words().iter().all(String::is_empty));
		assert_eq!(prefix.key(), "  ");
	}

	#[test]
	fn shift_keeps_length_and_order() {
		let mut prefix = Prefix::new(2);
		prefix.shift("the");
		assert_eq!(prefix.key(), " the");
		prefix.shift("cat");
		assert_eq!(prefix.key(), "the cat");
		prefix.shift("sat");
		assert_eq!(prefix.words(), &["cat".to_owned(), "sat".to_owned()]);
		assert_eq!(prefix.len(), 2);
	}

	#[test]
	fn single_slot_prefix_replaces_its_word() {
		let mut prefix = Prefix::new(1);
		prefix.shift("a");
		prefix.shift("b");
		assert_eq!(prefix.key(), "b");
	}

	#[test]
	fn equal_sequences_share_a_key() {
		let a = Prefix::from_words(["the", "cat"]);
		let mut b = Prefix::new(2);
		b.shift("the");
		b.shift("cat");
		assert_eq!(a.key(), b.key());
	}

	#[test]
	fn delimiter_inside_words_does_not_collide() {
		let joined = Prefix::from_words(["a b", "c"]);
		let split = Prefix::from_words(["a", "b c"]);
		assert_ne!(joined.key(), split.key());
		assert_eq!(joined.key(), "a\\ b c");

		let escaped = Prefix::from_words(["a\\", "b"]);
		let literal = Prefix::from_words(["a\\ b", ""]);
		assert_ne!(escaped.key(), literal.key());
	}

	#[test]
	fn order_matters() {
		assert_ne!(
			Prefix::from_words(["cat", "the"]).key(),
			Prefix::from_words(["the", "cat"]).key()
		);
	}
}

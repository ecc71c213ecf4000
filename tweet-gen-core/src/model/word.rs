/// A single token stored in a `Chain`, tagged with the document it came from.
///
/// The provenance (`source_id`) is only used by generation to check that an
/// output blends at least two sources.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
	/// The token itself.
	text: String,
	/// Identifier of the document that produced this occurrence.
	source_id: String,
}

impl Word {
	/// Creates a new word observed in the document `source_id`.
	pub fn new(text: impl Into<String>, source_id: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			source_id: source_id.into(),
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn source_id(&self) -> &str {
		&self.source_id
	}
}

//! Text normalization applied to documents before they reach the chain.

/// Marker opening a mention (`@handle`).
const MENTION: char = '@';

/// Separator ending a mention.
const SPACE: char = ' ';

/// Strips the run of leading `@handle ` tokens from `text`.
///
/// Reply markers at the start of a post carry no content and would otherwise
/// dominate the start-of-document prefix. Mentions appearing after the first
/// regular character are kept.
///
/// Examples:
/// - `"@a @b hello world"` → `"hello world"`
/// - `"hello @b world"` → `"hello @b world"`
/// - `"@only"` → `""`
pub fn trim_leading_mentions(text: &str) -> &str {
	let mut in_mention = false;

	for (i, c) in text.char_indices() {
		if in_mention {
			if c == SPACE {
				in_mention = false;
			}
			continue;
		}

		if c == MENTION {
			in_mention = true;
			continue;
		}

		return &text[i..];
	}

	""
}

/// Splits `text` into whitespace-separated tokens, dropping empty ones.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
	text.split_whitespace()
}

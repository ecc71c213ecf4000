//! Retrieval of timelines, the documents fed to the chain.

use serde::Deserialize;
use tweet_gen_core::Document;

/// Remote retrieval through the Twitter REST API.
pub mod twitter;

/// Offline retrieval from saved timeline dumps.
pub mod local;

/// A single post, as returned by the timeline endpoint.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tweet {
	#[serde(rename = "id_str")]
	pub id: String,
	pub text: String,
}

impl Tweet {
	/// Converts the post into a chain document identified by the post id.
	pub fn into_document(self) -> Document {
		Document::new(self.id, self.text)
	}
}

/// Errors raised while retrieving a timeline.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("malformed timeline: {0}")]
	Json(#[from] serde_json::Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("no access token in authentication response")]
	MissingToken,
}

/// Anything able to return the latest posts of an account.
pub trait TimelineSource: Sync {
	/// Retrieves at most `count` recent posts of `account`.
	fn timeline(&self, account: &str, count: usize) -> Result<Vec<Tweet>, FetchError>;

	/// Same as `timeline`, converted to chain documents.
	fn documents(&self, account: &str, count: usize) -> Result<Vec<Document>, FetchError> {
		Ok(self.timeline(account, count)?.into_iter().map(Tweet::into_document).collect())
	}
}

use std::fs;
use std::path::{Path, PathBuf};

use super::{FetchError, TimelineSource, Tweet};
use crate::io;

/// Extension of saved timeline dumps.
const DUMP_EXTENSION: &str = "json";

/// Timelines read from `<dir>/<account>.json` files.
///
/// Each file holds the JSON array returned by the timeline endpoint, which
/// allows running without credentials or network access.
pub struct LocalTimelines {
	dir: PathBuf,
}

impl LocalTimelines {
	/// Creates a source reading dumps from `dir`.
	///
	/// Both `"folder"` and `"folder/"` are accepted, `"."` is the current directory.
	pub fn new<P: AsRef<Path>>(dir: P) -> Self {
		Self { dir: io::normalize_folder(dir.as_ref()) }
	}

	/// Lists the accounts that have a dump in the directory, sorted by name.
	pub fn accounts(&self) -> Result<Vec<String>, FetchError> {
		let mut accounts = Vec::new();
		for file in io::list_files(&self.dir, DUMP_EXTENSION)? {
			accounts.push(io::account_name(&file)?);
		}
		Ok(accounts)
	}

	fn dump_path(&self, account: &str) -> PathBuf {
		self.dir.join(format!("{account}.{DUMP_EXTENSION}"))
	}
}

impl TimelineSource for LocalTimelines {
	fn timeline(&self, account: &str, count: usize) -> Result<Vec<Tweet>, FetchError> {
		let contents = fs::read_to_string(self.dump_path(account))?;
		let mut tweets: Vec<Tweet> = serde_json::from_str(&contents)?;
		tweets.truncate(count);
		Ok(tweets)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn dump(dir: &Path, account: &str, texts: &[&str]) {
		let tweets: Vec<String> = texts
			.iter()
			.enumerate()
			.map(|(i, t)| format!(r#"{{"id_str": "{account}-{i}", "text": "{t}"}}"#))
			.collect();
		fs::write(dir.join(format!("{account}.json")), format!("[{}]", tweets.join(","))).unwrap();
	}

	#[test]
	fn reads_and_truncates_a_dump() {
		let dir = tempfile::tempdir().unwrap();
		dump(dir.path(), "drake", &["one", "two", "three"]);

		let source = LocalTimelines::new(dir.path());
		let tweets = source.timeline("drake", 2).unwrap();
		assert_eq!(tweets.len(), 2);
		assert_eq!(tweets[1], Tweet { id: "drake-1".to_owned(), text: "two".to_owned() });
	}

	#[test]
	fn lists_available_accounts() {
		let dir = tempfile::tempdir().unwrap();
		dump(dir.path(), "therock", &["hi"]);
		dump(dir.path(), "drake", &["yo"]);

		let source = LocalTimelines::new(dir.path());
		assert_eq!(source.accounts().unwrap(), ["drake", "therock"]);
	}

	#[test]
	fn missing_and_malformed_dumps_are_errors() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("broken.json"), "{not json").unwrap();

		let source = LocalTimelines::new(dir.path());
		assert!(matches!(source.timeline("nobody", 10), Err(FetchError::Io(_))));
		assert!(matches!(source.timeline("broken", 10), Err(FetchError::Json(_))));
	}
}

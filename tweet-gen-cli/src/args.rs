use std::path::PathBuf;

use clap::Parser;
use tweet_gen_core::model::generate_options::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_WORDS};

/// Accounts used when none are given on the command line.
pub const DEFAULT_ACCOUNTS: [&str; 8] = [
	"2chainz", "TheRock", "LilTunechi", "Drake", "FrencHMonTanA", "kanyewest", "SnoopDogg", "yungleann",
];

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
	#[error("credentials not set, export TWITTER_KEY and TWITTER_SECRET (or pass --key and --secret), or use --offline")]
	MissingCredentials,
}

/// Generates pseudo-random posts by blending the timelines of several accounts.
#[derive(Parser, Debug)]
#[command(name = "tweet-gen", version, about)]
pub struct Cli {
	/// Maximum number of words to print
	#[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
	pub words: usize,

	/// Prefix length in words
	#[arg(long, default_value_t = 2)]
	pub prefix: usize,

	/// Number of posts fetched per account
	#[arg(long, default_value_t = 200)]
	pub count: usize,

	/// Skip posts shorter than this many characters
	#[arg(long, default_value_t = 0)]
	pub min_length: usize,

	/// Generation attempts before giving up on mixing accounts
	#[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
	pub max_attempts: usize,

	/// Seed of the random generator, for reproducible output
	#[arg(long)]
	pub seed: Option<u64>,

	/// Read `<account>.json` timeline dumps from this directory instead of the network
	#[arg(long, value_name = "DIR")]
	pub offline: Option<PathBuf>,

	/// Consumer key
	#[arg(long, env = "TWITTER_KEY", hide_env_values = true)]
	pub key: Option<String>,

	/// Consumer secret
	#[arg(long, env = "TWITTER_SECRET", hide_env_values = true)]
	pub secret: Option<String>,

	/// Per-request timeout in seconds
	#[arg(long, default_value_t = 10)]
	pub timeout: u64,

	/// Accounts to blend
	pub accounts: Vec<String>,
}

impl Cli {
	/// Returns the consumer key and secret.
	///
	/// # Errors
	/// Returns an error if either is missing or empty.
	pub fn credentials(&self) -> Result<(&str, &str), ArgsError> {
		match (self.key.as_deref(), self.secret.as_deref()) {
			(Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => Ok((key, secret)),
			_ => Err(ArgsError::MissingCredentials),
		}
	}

	/// Accounts given on the command line, or the default list.
	pub fn accounts_or_default(&self) -> Vec<String> {
		if self.accounts.is_empty() {
			DEFAULT_ACCOUNTS.iter().map(|a| (*a).to_owned()).collect()
		} else {
			self.accounts.clone()
		}
	}
}

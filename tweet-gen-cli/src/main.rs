use std::io::{stdin, stdout};
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use tweet_gen_core::{ChainBuilder, GenerateOptions, Generator, IngestOptions, IngestReport};

use crate::args::Cli;
use crate::source::local::LocalTimelines;
use crate::source::twitter::TwitterClient;
use crate::source::{FetchError, TimelineSource};

/// Command-line configuration.
mod args;

/// Path helpers for offline dumps.
mod io;

/// Interactive generation loop.
mod repl;

/// Timeline retrieval (network or disk).
mod source;

/// Fetches every account concurrently and builds the chain.
fn ingest<S: TimelineSource>(
	builder: ChainBuilder,
	source: &S,
	accounts: &[String],
	count: usize,
) -> IngestReport<FetchError> {
	builder.build_concurrently(accounts, |account: &String| source.documents(account, count))
}

/// Main entry point.
///
/// Fetches the timelines of all accounts in parallel, merges them into a
/// single chain once every fetch is done, then prints generated posts on
/// demand until the user types `exit`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let cli = Cli::parse();

	let builder = ChainBuilder::new(IngestOptions {
		prefix_len: cli.prefix,
		min_length: cli.min_length,
	})?;

	let report = match &cli.offline {
		Some(dir) => {
			let source = LocalTimelines::new(dir);
			let accounts = if cli.accounts.is_empty() { source.accounts()? } else { cli.accounts.clone() };
			ingest(builder, &source, &accounts, cli.count)
		}
		None => {
			let (key, secret) = cli.credentials()?;
			let source = TwitterClient::authenticate(key, secret, Duration::from_secs(cli.timeout))?;
			ingest(builder, &source, &cli.accounts_or_default(), cli.count)
		}
	};

	for (account, e) in &report.failures {
		warn!("{account} was not ingested: {e}");
	}
	info!("{} posts ingested, {} skipped", report.documents, report.skipped);

	let chain = report.chain;
	if chain.is_empty() {
		return Err("no post could be ingested, nothing to generate from".into());
	}

	let mut generator = match cli.seed {
		Some(seed) => Generator::seeded(&chain, seed),
		None => Generator::from_entropy(&chain),
	};
	let options = GenerateOptions::new(cli.words).with_max_attempts(cli.max_attempts);

	repl::run(&mut generator, &options, stdin().lock(), stdout().lock())?;
	Ok(())
}

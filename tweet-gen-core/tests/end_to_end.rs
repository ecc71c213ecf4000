use std::collections::HashSet;

use tweet_gen_core::{
	Chain, ChainBuilder, ChainError, Document, GenerateOptions, Generator, IngestOptions, Prefix, Word,
};

fn two_cats() -> Chain {
	let mut builder = ChainBuilder::new(IngestOptions { prefix_len: 2, min_length: 0 }).unwrap();
	builder.add_document(&Document::new("sourceA", "the cat sat"));
	builder.add_document(&Document::new("sourceB", "the cat ran"));
	builder.finish()
}

#[test]
fn shared_prefix_holds_both_successors() {
	let chain = two_cats();
	let after: Vec<(&str, &str)> = chain
		.successors(&Prefix::from_words(["the", "cat"]))
		.iter()
		.map(|w| (w.text(), w.source_id()))
		.collect();
	assert_eq!(after, [("sat", "sourceA"), ("ran", "sourceB")]);
	assert_eq!(chain.successors_by_key("the cat").len(), 2);
}

#[test]
fn seeded_runs_reach_both_endings() {
	let chain = two_cats();
	let mut seen = HashSet::new();

	for seed in 0..200 {
		let generation = Generator::seeded(&chain, seed)
			.generate_with(&GenerateOptions::new(3))
			.unwrap();
		assert!(generation.distinct_sources() >= 2, "{generation:?}");
		seen.insert(generation.text);
	}

	assert!(seen.contains("the cat sat"));
	assert!(seen.contains("the cat ran"));
	assert!(seen.iter().all(|text| text == "the cat sat" || text == "the cat ran"));
}

#[test]
fn every_window_is_retrievable() {
	let text = "a rose is a rose is a rose but not a daisy";
	let tokens: Vec<&str> = text.split_whitespace().collect();

	for k in 1..=4 {
		let mut chain = Chain::new(k).unwrap();
		let words: Vec<Word> = tokens.iter().map(|t| Word::new(*t, "doc")).collect();
		chain.ingest(&words);

		for window in tokens.windows(k + 1) {
			let prefix = Prefix::from_words(window[..k].iter().copied());
			assert!(
				chain.successors(&prefix).iter().any(|w| w.text() == window[k]),
				"k={k}: {:?} should lead to {}",
				&window[..k],
				window[k]
			);
		}
	}
}

#[test]
fn single_source_fails_fast_instead_of_looping() {
	let mut builder = ChainBuilder::new(IngestOptions::default()).unwrap();
	builder.add_document(&Document::new("only", "one lonely source of words"));
	let chain = builder.finish();

	let result = Generator::seeded(&chain, 0).generate(10);
	assert_eq!(result, Err(ChainError::SingleSource { sources: 1 }));
}

#[test]
fn fixed_seed_is_reproducible() {
	let mut builder = ChainBuilder::new(IngestOptions { prefix_len: 1, min_length: 0 }).unwrap();
	for (id, text) in [
		("1", "i like green tea in the morning"),
		("2", "you like black coffee in the evening"),
		("3", "they drink green coffee in the rain"),
	] {
		builder.add_document(&Document::new(id, text));
	}
	let chain = builder.finish();

	let first: Vec<_> = {
		let mut generator = Generator::seeded(&chain, 2024);
		(0..5).map(|_| generator.generate_with(&GenerateOptions::new(20))).collect()
	};
	let second: Vec<_> = {
		let mut generator = Generator::seeded(&chain, 2024);
		(0..5).map(|_| generator.generate_with(&GenerateOptions::new(20))).collect()
	};
	assert_eq!(first, second);
}

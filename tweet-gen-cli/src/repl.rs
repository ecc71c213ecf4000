use std::io::{self, BufRead, Write};

use rand::Rng;
use tweet_gen_core::{ChainError, GenerateOptions, Generator};

const PROMPT: &str = "Press enter to continue (exit to end)...";
const EXIT: &str = "exit";

/// Prints generated texts until the user types `exit` or closes the input.
///
/// Returns the number of texts printed. Failures that retrying cannot fix
/// (empty or single-source model) are printed once and end the loop.
pub fn run<G, R, W>(
	generator: &mut Generator<'_, G>,
	options: &GenerateOptions,
	mut input: R,
	mut output: W,
) -> io::Result<usize>
where
	G: Rng,
	R: BufRead,
	W: Write,
{
	let mut printed = 0;

	loop {
		match generator.generate_with(options) {
			Ok(generation) => {
				writeln!(output, "{}", generation.text)?;
				printed += 1;
			}
			Err(ChainError::NoVariation { attempts, best_effort }) => {
				writeln!(output, "[could not mix accounts after {attempts} attempts] {best_effort}")?;
				printed += 1;
			}
			Err(e) => {
				writeln!(output, "error: {e}")?;
				return Ok(printed);
			}
		}

		writeln!(output, "{PROMPT}")?;
		output.flush()?;

		let mut line = String::new();
		if input.read_line(&mut line)? == 0 || line.trim() == EXIT {
			return Ok(printed);
		}
	}
}

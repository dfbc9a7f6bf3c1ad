use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use super::corpus_model::CorpusModel;
use super::dictionary::TokenId;
use super::generation_input::GenerationInput;

/// Characters that end a sentence, both as a stop condition during the
/// walk and as the classification of a requested sentence kind.
pub const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Errors from terminator-constrained generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
	#[error("no sentence ending in '{terminator}' after {attempts} attempts")]
	AttemptsExhausted { terminator: char, attempts: usize },
}

/// High-level sentence generator over a finished corpus model.
///
/// # Responsibilities
/// - Pick a sentence-initial token (uppercase heuristic, with fallback)
/// - Walk successor choices uniformly at random until a stop condition
/// - Enforce the sentence byte budget and the whole-sentence retry bound
///
/// All random choices are uniform over the candidate set at the time of
/// the choice; already-visited tokens are not excluded, so cycles are
/// possible and expected.
#[derive(Debug)]
pub struct SentenceGenerator<'a> {
	model: &'a CorpusModel,
}

impl<'a> SentenceGenerator<'a> {
	/// Creates a generator borrowing a finished `model`.
	pub fn new(model: &'a CorpusModel) -> Self {
		Self { model }
	}

	/// Returns true if the last character of `token` ends a sentence.
	pub fn ends_sentence(token: &str) -> bool {
		token.chars().last().is_some_and(|c| TERMINATORS.contains(&c))
	}

	/// Picks the starting token of a sentence.
	///
	/// Draws uniformly from the precomputed uppercase-initial set; a
	/// corpus with no such token falls back to an arbitrary token instead
	/// of resampling forever. Returns `None` only for an empty model.
	fn pick_sentence_start(&self) -> Option<TokenId> {
		let starts = self.model.sentence_starts();
		if let Some(&id) = starts.choose(&mut rand::rng()) {
			return Some(id);
		}
		if self.model.is_empty() {
			return None;
		}
		// No uppercase-initial token in the corpus
		Some(rand::rng().random_range(0..self.model.token_count()))
	}

	/// Generates one sentence by random walk.
	///
	/// # Behavior
	/// - Starts on a sentence-initial token and appends successor picks,
	///   space separated, to the output buffer.
	/// - Stops on the first token ending in `.`, `?` or `!`.
	/// - Stops early when the current token has no recorded successor, or
	///   when appending the chosen successor (separator included) would
	///   push the buffer past `input.max_sentence_len` bytes.
	///
	/// The returned string is empty only for an empty model. Early stops
	/// are defined outcomes, not errors.
	pub fn generate(&self, input: &GenerationInput) -> String {
		let mut sentence = String::new();
		let Some(mut current) = self.pick_sentence_start() else {
			return sentence;
		};
		sentence.push_str(self.model.token_text(current));

		loop {
			if Self::ends_sentence(self.model.token_text(current)) {
				break;
			}

			let successors = self.model.successors_of(current);
			if successors.is_empty() {
				break;
			}

			let next = successors[rand::rng().random_range(0..successors.len())];
			let next_text = self.model.token_text(next);
			if sentence.len() + 1 + next_text.len() > input.max_sentence_len {
				break;
			}

			sentence.push(' ');
			sentence.push_str(next_text);
			current = next;
		}

		sentence
	}

	/// Generates sentences until one ends in `terminator`.
	///
	/// The whole-sentence retry loop, bounded by `input.max_attempts`;
	/// sentences ending on the wrong terminator or truncated early are
	/// discarded silently.
	///
	/// # Errors
	/// Returns [`GenerateError::AttemptsExhausted`] when no attempt
	/// produced a sentence ending in `terminator`.
	pub fn generate_ending_with(
		&self,
		terminator: char,
		input: &GenerationInput,
	) -> Result<String, GenerateError> {
		for _ in 0..input.max_attempts {
			let sentence = self.generate(input);
			if sentence.ends_with(terminator) {
				return Ok(sentence);
			}
		}
		Err(GenerateError::AttemptsExhausted {
			terminator,
			attempts: input.max_attempts,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::corpus_model::ModelConfig;

	fn model(corpus: &str) -> CorpusModel {
		CorpusModel::from_text(corpus, ModelConfig::default())
	}

	#[test]
	fn test_empty_model_generates_empty_sentence() {
		let model = model("");
		let generator = SentenceGenerator::new(&model);
		assert_eq!(generator.generate(&GenerationInput::default()), "");
	}

	#[test]
	fn test_single_path_corpus_is_deterministic() {
		let model = model("Only one path.");
		let generator = SentenceGenerator::new(&model);
		assert_eq!(generator.generate(&GenerationInput::default()), "Only one path.");
	}

	#[test]
	fn test_walk_stops_when_successors_run_out() {
		// No terminator anywhere; the walk ends on the last token
		let model = model("Aa bb");
		let generator = SentenceGenerator::new(&model);
		assert_eq!(generator.generate(&GenerationInput::default()), "Aa bb");
	}

	#[test]
	fn test_no_uppercase_corpus_falls_back_to_any_token() {
		let model = model("aa bb.");
		let generator = SentenceGenerator::new(&model);
		let sentence = generator.generate(&GenerationInput::default());
		assert!(sentence == "aa bb." || sentence == "bb.");
	}

	#[test]
	fn test_byte_budget_truncates_cyclic_walk() {
		// Aa -> bb -> Aa -> ... never reaches a terminator
		let model = model("Aa bb Aa bb Aa");
		let generator = SentenceGenerator::new(&model);
		let input = GenerationInput {
			max_sentence_len: 12,
			..GenerationInput::default()
		};
		let sentence = generator.generate(&input);
		assert_eq!(sentence, "Aa bb Aa bb");
		assert!(sentence.len() <= input.max_sentence_len);
	}

	#[test]
	fn test_start_token_ending_a_sentence_is_complete() {
		let model = model("Done. Done. Done.");
		let generator = SentenceGenerator::new(&model);
		assert_eq!(generator.generate(&GenerationInput::default()), "Done.");
	}

	#[test]
	fn test_generate_ending_with_selects_terminator() {
		let model = model("See Spot run. See Spot jump! Will Spot run?");
		let generator = SentenceGenerator::new(&model);
		let input = GenerationInput::default();

		let question = generator.generate_ending_with('?', &input).unwrap();
		assert!(question.ends_with('?'));

		let exclamation = generator.generate_ending_with('!', &input).unwrap();
		assert!(exclamation.ends_with('!'));
	}

	#[test]
	fn test_unreachable_terminator_exhausts_attempts() {
		let model = model("Aa bb");
		let generator = SentenceGenerator::new(&model);
		let input = GenerationInput {
			max_attempts: 5,
			..GenerationInput::default()
		};
		assert_eq!(
			generator.generate_ending_with('?', &input),
			Err(GenerateError::AttemptsExhausted {
				terminator: '?',
				attempts: 5,
			})
		);
	}

	#[test]
	fn test_every_sentence_ends_on_terminator_or_truncation() {
		let model = model("One two three. Two four! Four five two six? Six seven");
		let generator = SentenceGenerator::new(&model);
		let input = GenerationInput::default();

		for _ in 0..200 {
			let sentence = generator.generate(&input);
			assert!(!sentence.is_empty());
			assert!(sentence.len() <= input.max_sentence_len);
			if SentenceGenerator::ends_sentence(&sentence) {
				continue;
			}
			// Truncated: the last emitted token must have no way forward
			let last = sentence.split(' ').next_back().unwrap();
			let id = model.dictionary().lookup(last).unwrap();
			let successors = model.successors_of(id);
			assert!(
				successors.is_empty()
					|| successors
						.iter()
						.any(|&s| sentence.len() + 1 + model.token_text(s).len() > input.max_sentence_len)
			);
		}
	}
}

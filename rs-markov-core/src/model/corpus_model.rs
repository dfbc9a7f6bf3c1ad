use std::path::Path;

use log::debug;

use super::dictionary::{Dictionary, TokenId};
use super::successors::SuccessorTable;
use crate::io::{CorpusIoError, read_file_bytes};

/// Delimiters splitting the sanitized corpus into tokens.
///
/// Sanitization already folds control bytes to spaces, so in practice the
/// space alone fires; the full set is kept for inputs fed in as text.
pub const DELIMITERS: [char; 4] = [' ', '\n', '\r', '\t'];

/// Capacity configuration of a corpus model.
///
/// The defaults are the sizes the generator was tuned for on book-length
/// corpora. Both caps degrade gracefully when exceeded: a full dictionary
/// aliases new tokens to its last entry, and a full successor list drops
/// further observations.
#[derive(Clone, Copy, Debug)]
pub struct ModelConfig {
	/// Maximum number of distinct tokens kept in the dictionary.
	pub max_tokens: usize,

	/// Maximum number of successors tracked per token.
	pub max_successors: usize,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self {
			max_tokens: 50_000,
			max_successors: 64,
		}
	}
}

/// The corpus model: a token dictionary and its successor table.
///
/// This struct manages:
/// - `dictionary`: the deduplicated, identifier-indexed token store.
/// - `successors`: per-identifier lists of observed following tokens.
/// - `sentence_starts`: identifiers of tokens beginning with an ASCII
///   uppercase letter, precomputed for the sentence-initial draw.
///
/// The model is built in a single pass over the corpus and is read-only
/// afterwards. The dictionary and the table share identifiers, live behind
/// the same owner and are dropped together.
#[derive(Debug)]
pub struct CorpusModel {
	dictionary: Dictionary,
	successors: SuccessorTable,
	sentence_starts: Vec<TokenId>,
}

impl CorpusModel {
	/// Builds a model by reading a corpus file.
	///
	/// The file is read fully into memory as raw bytes before any
	/// processing; sanitization makes the encoding irrelevant.
	///
	/// # Errors
	/// Returns a [`CorpusIoError`] describing which acquisition step
	/// failed. Model construction itself cannot fail.
	pub fn from_file<P: AsRef<Path>>(filepath: P, config: ModelConfig) -> Result<Self, CorpusIoError> {
		let bytes = read_file_bytes(filepath)?;
		Ok(Self::from_bytes(&bytes, config))
	}

	/// Builds a model from raw corpus bytes.
	///
	/// # Behavior
	/// - Sanitizes the bytes (non-printable -> space, length preserved).
	/// - Splits on [`DELIMITERS`], dropping empty fragments.
	/// - Interns each token in source order; for each adjacent pair the
	///   current token is appended to the previous token's successor list.
	/// - The first token of the stream gets a dictionary entry but no
	///   incoming successor link.
	/// - Precomputes the sentence-start set.
	pub fn from_bytes(bytes: &[u8], config: ModelConfig) -> Self {
		let mut model = Self {
			dictionary: Dictionary::new(config.max_tokens),
			successors: SuccessorTable::new(config.max_successors),
			sentence_starts: Vec::new(),
		};
		let text = Self::sanitize(bytes);
		model.ingest(&text);
		model
	}

	/// Builds a model from corpus text.
	pub fn from_text(text: &str, config: ModelConfig) -> Self {
		Self::from_bytes(text.as_bytes(), config)
	}

	/// Replaces every byte outside printable ASCII with a single space.
	///
	/// The length in bytes is preserved: no deletion, no shifting. The
	/// result is ASCII-only and therefore valid UTF-8 whatever the input
	/// encoding was.
	pub fn sanitize(bytes: &[u8]) -> String {
		bytes
			.iter()
			.map(|&byte| if matches!(byte, 0x20..=0x7E) { byte as char } else { ' ' })
			.collect()
	}

	/// Single-pass ingestion of sanitized corpus text.
	fn ingest(&mut self, text: &str) {
		let mut previous: Option<TokenId> = None;
		for token in text.split(DELIMITERS).filter(|token| !token.is_empty()) {
			let current = self.dictionary.intern(token);
			self.successors.grow_to(self.dictionary.len());
			if let Some(previous) = previous {
				self.successors.record(previous, current);
			}
			previous = Some(current);
		}

		self.sentence_starts = self
			.dictionary
			.iter()
			.filter(|(_, text)| text.as_bytes().first().is_some_and(u8::is_ascii_uppercase))
			.map(|(id, _)| id)
			.collect();

		debug!(
			"ingested corpus: {} distinct tokens, {} sentence starts",
			self.dictionary.len(),
			self.sentence_starts.len()
		);
	}

	/// Text of `id`, or an empty string for an unknown identifier.
	pub fn token_text(&self, id: TokenId) -> &str {
		self.dictionary.text(id)
	}

	/// Successors of `id` in first-seen order, repeats included.
	pub fn successors_of(&self, id: TokenId) -> &[TokenId] {
		self.successors.successors(id)
	}

	/// Identifiers of tokens starting with an ASCII uppercase letter.
	pub fn sentence_starts(&self) -> &[TokenId] {
		&self.sentence_starts
	}

	/// Number of distinct tokens in the dictionary.
	pub fn token_count(&self) -> usize {
		self.dictionary.len()
	}

	/// True if the corpus contained no token at all.
	pub fn is_empty(&self) -> bool {
		self.dictionary.is_empty()
	}

	/// Read-only access to the token dictionary.
	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}
}

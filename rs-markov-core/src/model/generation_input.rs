/// Parameters driving sentence generation.
///
/// `GenerationInput` bounds a single random walk (`max_sentence_len`) and
/// the terminator-constrained retry loop around it (`max_attempts`).
///
/// # Invariants
/// - `max_sentence_len` counts bytes of the finished sentence, separators
///   included
/// - `max_attempts` >= 1 for any terminator-constrained request to have a
///   chance of succeeding
#[derive(Clone, Debug)]
pub struct GenerationInput {
	/// Byte budget of the output buffer; a step that would exceed it ends
	/// the sentence without appending.
	pub max_sentence_len: usize,

	/// Number of whole sentences generated before a terminator-constrained
	/// request gives up.
	pub max_attempts: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			max_sentence_len: 1000,
			max_attempts: 10_000,
		}
	}
}

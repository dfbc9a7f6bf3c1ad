use std::collections::HashMap;

/// Stable identifier of a token: its insertion index in the [`Dictionary`].
pub type TokenId = usize;

/// Insertion-ordered store of unique tokens.
///
/// A `Dictionary` assigns each distinct token text a stable integer
/// identifier equal to its insertion index, and answers reverse lookups
/// from text to identifier in O(1) amortized time.
///
/// Tokens are stored without alteration: casing and trailing punctuation
/// are kept, so `Cat` and `cat.` are distinct entries.
///
/// ## Responsibilities
/// - Deduplicate token text during corpus ingestion
/// - Hand out stable identifiers usable as indices into parallel tables
/// - Absorb insertions beyond the configured capacity without failing
///
/// ## Invariants
/// - No two identifiers map to byte-identical token text
/// - An identifier never changes once assigned
/// - At most `max_tokens` entries are ever stored
#[derive(Debug)]
pub struct Dictionary {
	/// Token text in insertion order; the position is the identifier.
	tokens: Vec<String>,
	/// Reverse lookup from token text to identifier.
	index: HashMap<String, TokenId>,
	/// Hard capacity; inserts beyond it alias to the last entry.
	max_tokens: usize,
}

impl Dictionary {
	/// Creates an empty dictionary holding at most `max_tokens` entries.
	pub fn new(max_tokens: usize) -> Self {
		Self {
			tokens: Vec::new(),
			index: HashMap::new(),
			max_tokens,
		}
	}

	/// Returns the identifier for `text`, inserting it if unseen.
	///
	/// - If the token is already known, its existing identifier is returned.
	/// - If the dictionary is full, the token is not inserted and the
	///   identifier of the last successfully inserted token is returned
	///   instead (degraded but defined).
	pub fn intern(&mut self, text: &str) -> TokenId {
		if let Some(&id) = self.index.get(text) {
			return id;
		}
		if self.tokens.len() >= self.max_tokens {
			// Full: alias to the last inserted token
			return self.tokens.len().saturating_sub(1);
		}
		let id = self.tokens.len();
		self.tokens.push(text.to_owned());
		self.index.insert(text.to_owned(), id);
		id
	}

	/// Returns the identifier for `text` without inserting.
	pub fn lookup(&self, text: &str) -> Option<TokenId> {
		self.index.get(text).copied()
	}

	/// Returns the text of `id`, or an empty string for an unknown identifier.
	pub fn text(&self, id: TokenId) -> &str {
		self.tokens.get(id).map(String::as_str).unwrap_or("")
	}

	/// Number of distinct tokens stored.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// True if no token has been stored yet.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates over `(identifier, text)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
		self.tokens.iter().enumerate().map(|(id, text)| (id, text.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_intern_assigns_insertion_order_ids() {
		let mut dictionary = Dictionary::new(16);
		assert_eq!(dictionary.intern("See"), 0);
		assert_eq!(dictionary.intern("Spot"), 1);
		assert_eq!(dictionary.intern("run."), 2);
		assert_eq!(dictionary.len(), 3);
	}

	#[test]
	fn test_intern_deduplicates() {
		let mut dictionary = Dictionary::new(16);
		let first = dictionary.intern("Spot");
		let second = dictionary.intern("Spot");
		assert_eq!(first, second);
		assert_eq!(dictionary.len(), 1);
	}

	#[test]
	fn test_case_and_punctuation_are_distinct() {
		let mut dictionary = Dictionary::new(16);
		let a = dictionary.intern("Cat");
		let b = dictionary.intern("cat.");
		assert_ne!(a, b);
		assert_eq!(dictionary.len(), 2);
	}

	#[test]
	fn test_full_dictionary_aliases_to_last_entry() {
		let mut dictionary = Dictionary::new(2);
		dictionary.intern("a");
		let last = dictionary.intern("b");
		assert_eq!(dictionary.intern("c"), last);
		assert_eq!(dictionary.intern("d"), last);
		assert_eq!(dictionary.len(), 2);
		assert_eq!(dictionary.lookup("c"), None);
	}

	#[test]
	fn test_zero_capacity_stays_empty() {
		let mut dictionary = Dictionary::new(0);
		let id = dictionary.intern("a");
		assert_eq!(id, 0);
		assert!(dictionary.is_empty());
		assert_eq!(dictionary.text(id), "");
	}

	#[test]
	fn test_text_of_unknown_id_is_empty() {
		let dictionary = Dictionary::new(4);
		assert_eq!(dictionary.text(99), "");
	}
}

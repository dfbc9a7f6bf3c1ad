use super::dictionary::TokenId;

/// Per-token successor lists, keyed by dictionary identifier.
///
/// Each list records the tokens observed directly after its owner in the
/// corpus, in first-seen order and without deduplication; a token that
/// follows twice appears twice, which is what makes the later uniform
/// draw frequency-faithful.
///
/// ## Invariants
/// - The table tracks exactly the identifiers the dictionary has assigned
/// - No list ever exceeds `max_successors` entries
#[derive(Debug)]
pub struct SuccessorTable {
	lists: Vec<Vec<TokenId>>,
	max_successors: usize,
}

impl SuccessorTable {
	/// Creates an empty table with the given per-token capacity.
	pub fn new(max_successors: usize) -> Self {
		Self {
			lists: Vec::new(),
			max_successors,
		}
	}

	/// Pads the table with empty lists so it covers `len` identifiers.
	pub fn grow_to(&mut self, len: usize) {
		while self.lists.len() < len {
			self.lists.push(Vec::new());
		}
	}

	/// Appends `next` to the list of `prev`.
	///
	/// A full list drops the observation (capped, never replaced), and an
	/// unknown `prev` drops it too; neither case is an error.
	pub fn record(&mut self, prev: TokenId, next: TokenId) {
		let Some(list) = self.lists.get_mut(prev) else {
			return;
		};
		if list.len() < self.max_successors {
			list.push(next);
		}
	}

	/// Successors of `id`, or an empty slice for an unknown identifier.
	pub fn successors(&self, id: TokenId) -> &[TokenId] {
		self.lists.get(id).map(Vec::as_slice).unwrap_or(&[])
	}
}

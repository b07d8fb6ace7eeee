use crate::score::{process, threshold, weighted_ratio};
use crate::store::Handle;
use crate::Entity;

/// Searchable string of an entity, kept alongside its processed form.
#[derive(Debug, Clone)]
struct Term {
	raw: String,
	processed: String,
}

/// Search state for one entry: its cached strings and the last match.
#[derive(Debug, Clone)]
pub(crate) struct Fuzzable {
	pub(crate) handle: Handle,
	pub(crate) seq: u64,
	terms: Vec<Term>,
	pub(crate) last_match: Option<String>,
	pub(crate) score: f64,
}

impl Fuzzable {
	pub(crate) fn new<T: Entity>(handle: Handle, seq: u64, entity: &T) -> Self {
		let terms = entity
			.searchable()
			.into_iter()
			.filter(|field| !field.value.is_empty())
			.map(|field| Term {
				processed: process(&field.value),
				raw: field.value,
			})
			.collect();

		Self {
			handle,
			seq,
			terms,
			last_match: None,
			score: 0.0,
		}
	}

	/// Score `word` against every cached string and keep the best.
	///
	/// Returns `0.0` and clears the match when nothing reaches the threshold
	/// for `word`.
	pub(crate) fn fuzz(&mut self, word: &str) -> f64 {
		let minimum = threshold(word);
		let needle = process(word);

		let best = self
			.terms
			.iter()
			.map(|term| (weighted_ratio(&needle, &term.processed), term))
			.fold(None::<(f64, &Term)>, |best, (score, term)| match best {
				Some((top, _)) if top >= score => best,
				_ => Some((score, term)),
			})
			.filter(|(score, _)| *score >= minimum);

		match best {
			Some((score, term)) => {
				self.last_match = Some(term.raw.clone());
				self.score = score;
			}
			None => {
				self.last_match = None;
				self.score = 0.0;
			}
		}
		self.score
	}

	pub(crate) fn matches(&mut self, word: &str) -> bool {
		self.fuzz(word) > 0.0
	}

	pub(crate) fn reset(&mut self) {
		self.last_match = None;
		self.score = 0.0;
	}

	#[cfg(test)]
	pub(crate) fn terms(&self) -> Vec<&str> {
		self.terms.iter().map(|term| term.raw.as_str()).collect()
	}
}

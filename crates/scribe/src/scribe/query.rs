//! Incremental narrowing and restoration of the view.

use log::debug;

use super::{Pruned, Scribe};
use crate::Entity;
use crate::fuzzable::Fuzzable;
use crate::score::process;

/// Strip leading and trailing ASCII punctuation.
fn sanitize(query: &str) -> &str {
	query.trim_matches(|ch: char| ch.is_ascii_punctuation())
}

/// Words of `query` that still hold something searchable once processed.
fn search_words(query: &str) -> Vec<&str> {
	query
		.split_whitespace()
		.filter(|word| !process(word).is_empty())
		.collect()
}

impl<T: Entity> Scribe<T> {
	/// Apply `query` to the view.
	///
	/// Extending the previous query only prunes the window. Deleting back to a
	/// prefix of the previous query pops entries off the hidden stack instead
	/// of rescanning everything, so the window ends up exactly as it was when
	/// that prefix was typed. Any other edit rebuilds the window from the
	/// filter and narrows it again.
	pub fn run_query(&mut self, query: &str, sort: bool) {
		let query = sanitize(query);
		let previous = std::mem::take(&mut self.last_query);

		if query.len() < previous.len() && previous.starts_with(query) {
			self.restore(query);
		} else if query.starts_with(previous.as_str()) {
			self.narrow(query);
		} else {
			debug!("query edited from {previous:?} to {query:?}, rebuilding");
			self.rebuild_window();
			self.narrow(query);
		}

		if sort {
			self.sort();
		}
		self.last_query = query.to_string();
	}

	/// Run `query` and complete its last word from the best match.
	///
	/// When the query has more words than the matched string, only the last
	/// query word is replaced by the match's last word.
	pub fn get_suggestion(&mut self, query: &str) -> Option<String> {
		let query = query.trim_matches(|ch| matches!(ch, '.' | '-' | ' '));
		self.run_query(query, true);

		let suggestion = self.window.first()?.last_match.clone()?;
		let mut query_words: Vec<&str> = query.split_whitespace().collect();
		let suggestion_words: Vec<&str> = suggestion.split_whitespace().collect();

		if query_words.len() > suggestion_words.len()
			&& let (Some(last), Some(completion)) =
				(query_words.last_mut(), suggestion_words.last().copied())
		{
			*last = completion;
			return Some(query_words.join(" "));
		}
		Some(suggestion)
	}

	/// Prune every window entry failing a word of `query`, word by word.
	fn narrow(&mut self, query: &str) {
		let depth = query.len();
		for word in search_words(query) {
			let mut kept = Vec::with_capacity(self.window.len());
			for mut fuzzable in self.window.drain(..) {
				if fuzzable.matches(word) {
					kept.push(fuzzable);
				} else {
					self.hidden.push(Pruned { fuzzable, depth });
				}
			}
			self.window = kept;
		}
	}

	/// Pop entries pruned by queries longer than `query` back into the window.
	///
	/// The hidden stack is ordered by prune depth, so the scan stops at the
	/// first entry pruned by `query` itself or one of its prefixes. Popped
	/// entries failing `query` stay hidden at the new depth.
	fn restore(&mut self, query: &str) {
		let depth = query.len();
		let words = search_words(query);
		let split = self
			.hidden
			.iter()
			.rposition(|pruned| pruned.depth <= depth)
			.map_or(0, |index| index + 1);
		let popped = self.hidden.split_off(split);

		let mut still_hidden = Vec::new();
		for Pruned { mut fuzzable, .. } in popped.into_iter().rev() {
			if words.iter().all(|word| fuzzable.matches(word)) {
				self.window.push(fuzzable);
			} else {
				still_hidden.push(Pruned { fuzzable, depth });
			}
		}
		self.hidden.extend(still_hidden.into_iter().rev());

		match words.last() {
			Some(last) => {
				for fuzzable in &mut self.window {
					fuzzable.fuzz(last);
				}
			}
			None => self.window.iter_mut().for_each(Fuzzable::reset),
		}
	}

	/// Insert a fresh entry into the view under the current query.
	pub(super) fn place(&mut self, mut fuzzable: Fuzzable) {
		let words = search_words(&self.last_query);
		if words.iter().all(|word| fuzzable.matches(word)) {
			self.window.push(fuzzable);
			if !words.is_empty() {
				self.sort();
			}
		} else {
			let depth = self.last_query.len();
			self.hidden.push(Pruned { fuzzable, depth });
		}
	}

	/// Order the window by descending score, oldest entry first on ties.
	fn sort(&mut self) {
		self.window.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.seq.cmp(&b.seq)));
	}
}

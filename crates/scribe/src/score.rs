//! Weighted similarity scoring on a 0-100 scale.
//!
//! Every comparison runs on [`process`]ed text, so case and punctuation never
//! influence a score. The weighting mixes plain edit similarity with partial
//! (substring window) and token based comparisons, and scales them down as
//! the lengths of the two strings diverge.

use std::collections::BTreeSet;

use rapidfuzz::fuzz;

/// Lowercase `text`, turn every non-alphanumeric character into a space and
/// trim the result.
#[must_use]
pub fn process(text: &str) -> String {
	let mut processed = String::with_capacity(text.len());
	for ch in text.chars() {
		if ch.is_alphanumeric() {
			processed.extend(ch.to_lowercase());
		} else {
			processed.push(' ');
		}
	}
	processed.trim().to_string()
}

/// Minimum score a candidate needs for `word`.
///
/// Single characters only need a weak match; longer words demand more, up to
/// a cap of 70.
#[must_use]
pub fn threshold(word: &str) -> f64 {
	let len = word.chars().count().min(5) as f64;
	40.0 + 6.0 * len
}

/// Normalized indel similarity of two strings.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
	match (a.is_empty(), b.is_empty()) {
		(true, true) => 100.0,
		(true, false) | (false, true) => 0.0,
		(false, false) => fuzz::ratio(a.chars(), b.chars()) * 100.0,
	}
}

/// Best similarity of the shorter string against every alignment window of
/// the longer one.
#[must_use]
pub fn partial_ratio(a: &str, b: &str) -> f64 {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();
	let (short, long) = if a.len() > b.len() { (b, a) } else { (a, b) };
	let (m, n) = (short.len(), long.len());
	if m == 0 {
		return 0.0;
	}

	let score =
		|window: &[char]| fuzz::ratio(short.iter().copied(), window.iter().copied()) * 100.0;

	let mut best: f64 = 0.0;
	for end in 1..m {
		best = best.max(score(&long[..end]));
	}
	for start in 0..=(n - m) {
		best = best.max(score(&long[start..start + m]));
		if best >= 100.0 {
			return 100.0;
		}
	}
	for start in (n - m + 1)..n {
		best = best.max(score(&long[start..]));
	}
	best
}

fn sorted_tokens(text: &str) -> String {
	let mut tokens: Vec<&str> = text.split_whitespace().collect();
	tokens.sort_unstable();
	tokens.join(" ")
}

fn token_set(text: &str) -> BTreeSet<&str> {
	text.split_whitespace().collect()
}

fn join(tokens: impl IntoIterator<Item = impl AsRef<str>>) -> String {
	tokens
		.into_iter()
		.map(|token| token.as_ref().to_string())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Similarity after sorting the tokens of both strings.
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
	ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Similarity of the shared tokens against each side's remainder.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
	let (left, right) = (token_set(a), token_set(b));
	let shared: Vec<&str> = left.intersection(&right).copied().collect();
	let only_left: Vec<&str> = left.difference(&right).copied().collect();
	let only_right: Vec<&str> = right.difference(&left).copied().collect();

	if !shared.is_empty() && (only_left.is_empty() || only_right.is_empty()) {
		return 100.0;
	}

	let sect = join(&shared);
	let combined_left = format!("{sect} {}", join(&only_left)).trim().to_string();
	let combined_right = format!("{sect} {}", join(&only_right)).trim().to_string();

	let mut best = ratio(&combined_left, &combined_right);
	if !sect.is_empty() {
		best = best
			.max(ratio(&sect, &combined_left))
			.max(ratio(&sect, &combined_right));
	}
	best
}

/// Partial similarity over the deduplicated, sorted tokens.
#[must_use]
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
	let (left, right) = (token_set(a), token_set(b));
	if left.intersection(&right).next().is_some() {
		return 100.0;
	}
	partial_ratio(&join(&left), &join(&right))
}

/// Weighted similarity between two processed strings.
#[must_use]
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
	if a.is_empty() || b.is_empty() {
		return 0.0;
	}

	let (len_a, len_b) = (a.chars().count() as f64, b.chars().count() as f64);
	let len_ratio = len_a.max(len_b) / len_a.min(len_b);
	let direct = ratio(a, b);

	if len_ratio < 1.5 {
		let tokens = token_sort_ratio(a, b).max(token_set_ratio(a, b));
		return direct.max(tokens * 0.95);
	}

	let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
	let partial = direct.max(partial_ratio(a, b) * partial_scale);
	partial.max(partial_token_ratio(a, b) * 0.95 * partial_scale)
}

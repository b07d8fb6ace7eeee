use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Build a table cell that highlights the characters at `indices`.
///
/// Text wider than `max_width` is cut on the right with an ellipsis; indices
/// past the cut are dropped.
pub(crate) fn highlight_cell(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: Option<u16>,
	highlight: Style,
) -> Cell<'static> {
	let (display_text, indices) = match max_width.map(usize::from) {
		Some(width) => truncate_with_highlight(text, indices, width),
		None => (text.to_string(), indices),
	};

	let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Cell::from(display_text);
	};
	sorted_indices.sort_unstable();
	let mut next = sorted_indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (idx, ch) in display_text.chars().enumerate() {
		while next.peek().is_some_and(|&index| index < idx) {
			next.next();
		}
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				let style = if highlighted { highlight } else { Style::default() };
				spans.push(Span::styled(mem::take(&mut buffer), style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		let style = if highlighted { highlight } else { Style::default() };
		spans.push(Span::styled(buffer, style));
	}

	Cell::from(Line::from(spans))
}

fn truncate_with_highlight(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: usize,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}
	if text.width() <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return (ELLIPSIS.to_string(), None);
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let mut truncated = slice.to_string();
	truncated.push_str(ELLIPSIS);
	let limit = slice.chars().count();
	let indices = indices.and_then(|indices| {
		let adjusted: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
		(!adjusted.is_empty()).then_some(adjusted)
	});
	(truncated, indices)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn truncation_keeps_visible_indices() {
		let (text, indices) = truncate_with_highlight("Volkswagen", Some(vec![1, 3, 8]), 5);
		assert_eq!(text, "Volk…");
		assert_eq!(indices, Some(vec![1, 3]));
	}

	#[test]
	fn narrow_text_is_left_alone() {
		let (text, indices) = truncate_with_highlight("BMW", Some(vec![0]), 5);
		assert_eq!(text, "BMW");
		assert_eq!(indices, Some(vec![0]));
		assert_eq!(truncate_with_highlight("Renault", None, 1).0, "…");
	}
}

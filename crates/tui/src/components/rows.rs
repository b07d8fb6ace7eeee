use frizbee::{Config, match_indices};
use ratatui::style::Style;
use ratatui::widgets::{Cell, Row};

use crate::components::highlight::highlight_cell;

const ELLIPSIS_ROW: &str = "...";

/// Create match indices for the provided needle and configuration.
#[must_use]
pub fn highlight_for_refs(needle: &str, config: &Config, text: &str) -> Option<Vec<usize>> {
	if text.is_empty() || needle.is_empty() {
		return None;
	}
	match_indices(needle, text, config).map(|m| m.indices)
}

/// Word of `query` the view was last narrowed by.
#[must_use]
pub fn last_word(query: &str) -> &str {
	query.split_whitespace().last().unwrap_or_default()
}

/// One page of records ready to be turned into table rows.
pub struct RowSource<'a> {
	pub rows: Vec<Vec<String>>,
	/// Matched search term per row.
	pub matches: Vec<Option<&'a str>>,
	pub leading_ellipsis: bool,
	pub trailing_ellipsis: bool,
	pub columns: usize,
}

/// Build table rows, highlighting `needle` in the cells that carry each
/// row's matched term.
#[must_use]
pub fn build_rows(
	source: RowSource<'_>,
	needle: &str,
	column_widths: &[u16],
	highlight_style: Style,
	ellipsis_style: Style,
) -> Vec<Row<'static>> {
	let config = Config::default();
	let ellipsis =
		|| Row::new(vec![Cell::from(ELLIPSIS_ROW); source.columns]).style(ellipsis_style);

	let mut rows = Vec::with_capacity(source.rows.len() + 2);
	if source.leading_ellipsis {
		rows.push(ellipsis());
	}
	let matches = source.matches.iter().chain(std::iter::repeat(&None));
	for (row, matched) in source.rows.iter().zip(matches) {
		let matched = matched.map(str::to_lowercase);
		let cells = row.iter().enumerate().map(|(column, text)| {
			let indices = matched
				.as_deref()
				.filter(|term| !term.is_empty() && text.to_lowercase().contains(term))
				.and_then(|_| highlight_for_refs(needle, &config, text));
			// Leave one column of slack so we don't rely on the table drawing right up to the edge.
			let width = column_widths.get(column).map(|width| width.saturating_sub(1));
			highlight_cell(text, indices, width, highlight_style)
		});
		rows.push(Row::new(cells.collect::<Vec<_>>()));
	}
	if source.trailing_ellipsis {
		rows.push(ellipsis());
	}
	rows
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn needle_is_the_last_query_word() {
		assert_eq!(last_word("jan pee"), "pee");
		assert_eq!(last_word("  "), "");
	}

	#[test]
	fn ellipsis_rows_wrap_the_page() {
		let source = RowSource {
			rows: vec![vec!["Jan".into(), "Hasselt".into()]],
			matches: vec![Some("Jan")],
			leading_ellipsis: true,
			trailing_ellipsis: true,
			columns: 2,
		};
		let rows = build_rows(source, "jan", &[10, 10], Style::default(), Style::default());
		assert_eq!(rows.len(), 3);
	}

	#[test]
	fn matching_cells_get_indices() {
		assert!(highlight_for_refs("pee", &Config::default(), "Peeters").is_some());
		assert_eq!(highlight_for_refs("", &Config::default(), "Peeters"), None);
	}
}

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
	Block, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};
use unicode_width::UnicodeWidthStr;

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;
/// Border rows around the table.
pub(crate) const TABLE_BORDER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'static>>,
	pub title: String,
	/// Row index to mark with the highlight symbol.
	pub selected: Option<usize>,
	/// Whether the table has keyboard focus.
	pub focused: bool,
	/// Total rows and cursor position of the underlying view, for the scrollbar.
	pub scroll: Option<(usize, usize)>,
}

/// Relative width of a column, keyed by header.
fn column_weight(header: &str) -> u16 {
	match header {
		"Huisnummer" | "Status" => 1,
		"Bouwjaar" | "Prijs" | "Postcode" | "Bedrag" | "Van" | "Tot" => 2,
		"BTW/RRN" | "Gemeente" | "Straat" | "Merk" | "Model" | "Nummer" => 3,
		_ => 4,
	}
}

#[must_use]
pub fn column_constraints(headers: &[&str]) -> Vec<Constraint> {
	headers.iter().map(|header| Constraint::Fill(column_weight(header))).collect()
}

/// Widths the table will give each column inside `area`, borders included.
pub(crate) fn resolve_column_widths(area: Rect, widths: &[Constraint]) -> Vec<u16> {
	if widths.is_empty() || area.width == 0 {
		return Vec::new();
	}

	// Borders plus one column kept free for the scrollbar.
	let table_width = area.width.saturating_sub(3);
	if table_width == 0 {
		return Vec::new();
	}

	let highlight_width = HIGHLIGHT_SYMBOL.width() as u16;
	let [_selection, columns_area] =
		Layout::horizontal([Constraint::Length(highlight_width), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, table_width, 1));

	Layout::horizontal(widths.to_vec())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns_area)
		.iter()
		.map(|rect| rect.width)
		.collect()
}

/// Render the table using the provided dataset definition.
pub fn render_table(frame: &mut Frame, area: Rect, spec: TableSpec, theme: &Theme) {
	let block = Block::bordered()
		.border_set(border::ROUNDED)
		.border_style(theme.pane(spec.focused))
		.title(Line::from(Span::styled(spec.title.clone(), theme.header)));

	let inner = block.inner(area);
	frame.render_widget(block, area);

	render_configured_table(frame, inner, theme, spec);
}

fn render_configured_table(frame: &mut Frame, area: Rect, theme: &Theme, spec: TableSpec) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells).style(theme.header).height(1).bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let needs_scrollbar = spec.scroll.is_some_and(|(total, _)| total > spec.rows.len());
	let table_area = Rect {
		width: area.width.saturating_sub(1),
		..area
	};

	let row_highlight = if spec.focused {
		theme.row_highlight
	} else {
		Style::new().add_modifier(Modifier::BOLD)
	};
	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	let mut table_state = TableState::default().with_selected(spec.selected);
	frame.render_stateful_widget(table, table_area, &mut table_state);

	if needs_scrollbar && let Some((total, position)) = spec.scroll {
		let mut scrollbar_state = ScrollbarState::new(total).position(position);
		let body = Rect {
			y: area.y + TABLE_HEADER_ROWS as u16,
			height: area.height.saturating_sub(TABLE_HEADER_ROWS as u16),
			..area
		};
		render_scrollbar(frame, body, &mut scrollbar_state, theme);
	}

	render_header_separator(frame, table_area, theme, 1);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width <= 2 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	let middle = "─".repeat(width - 2);
	let spans = vec![Span::raw(" "), Span::styled(middle, theme.border()), Span::raw(" ")];
	frame.render_widget(Paragraph::new(Line::from(spans)), sep_rect);
}

/// Centered notice inside an empty table body.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let body_offset = (TABLE_BORDER_ROWS / 2 + TABLE_HEADER_ROWS) as u16;
	if area.height <= body_offset + 1 {
		return;
	}
	let message_area = Rect {
		x: area.x + 1,
		y: area.y + body_offset,
		width: area.width.saturating_sub(2),
		height: 1,
	};
	let empty = Paragraph::new(message).style(theme.empty).alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn column_widths_fit_inside_the_borders() {
		let area = Rect::new(0, 0, 40, 10);
		let resolved = resolve_column_widths(area, &column_constraints(&["Merk", "Model"]));
		let used: u16 = resolved.iter().sum::<u16>() + TABLE_COLUMN_SPACING;
		assert_eq!(resolved.len(), 2);
		assert!(used <= 40 - 3 - HIGHLIGHT_SYMBOL.width() as u16);
	}

	#[test]
	fn wide_columns_get_more_room() {
		let constraints = column_constraints(&["Huisnummer", "Naam"]);
		assert_eq!(constraints, vec![Constraint::Fill(1), Constraint::Fill(4)]);
	}
}

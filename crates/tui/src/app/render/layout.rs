use ratatui::layout::{Constraint, Layout, Rect};

use crate::components::activity::ACTIVITY_HEIGHT;
use crate::components::panel::PANEL_WIDTH;
use crate::components::tables::{TABLE_BORDER_ROWS, TABLE_HEADER_ROWS};

const INPUT_HEIGHT: u16 = 3;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Areas {
	pub header: Rect,
	pub panel: Option<Rect>,
	pub table: Rect,
	pub activity: Rect,
	pub input: Rect,
	pub footer: Rect,
}

/// Split `area` top to bottom, reserving at least `viewport` table rows.
pub(crate) fn split(area: Rect, viewport: usize, panel_open: bool) -> Areas {
	let table_chrome = (TABLE_BORDER_ROWS + TABLE_HEADER_ROWS) as u16;
	let [header, body, activity, input, footer] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Min(viewport as u16 + table_chrome),
		Constraint::Length(ACTIVITY_HEIGHT),
		Constraint::Length(INPUT_HEIGHT),
		Constraint::Length(1),
	])
	.areas(area);

	let (panel, table) = if panel_open {
		let [panel, table] =
			Layout::horizontal([Constraint::Length(PANEL_WIDTH), Constraint::Fill(1)]).areas(body);
		(Some(panel), table)
	} else {
		(None, body)
	};

	Areas {
		header,
		panel,
		table,
		activity,
		input,
		footer,
	}
}

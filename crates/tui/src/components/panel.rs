//! Side panel: the menu and the field editor.

use hawk_scribe::Field;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

/// Width of the side panel when it is open.
pub const PANEL_WIDTH: u16 = 34;

fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
	Block::bordered()
		.border_set(border::ROUNDED)
		.border_style(theme.pane(focused))
		.title(Span::styled(title, theme.header))
}

/// Menu entries, the one under `cursor` reversed.
pub fn render_menu(frame: &mut Frame, area: Rect, items: &[&str], cursor: usize, theme: &Theme) {
	let lines = items
		.iter()
		.enumerate()
		.map(|(index, item)| {
			if index == cursor {
				Line::styled(format!(" > {item}"), Style::new().add_modifier(Modifier::REVERSED))
			} else {
				Line::styled(format!("   {item}"), theme.prompt)
			}
		})
		.collect::<Vec<_>>();
	frame.render_widget(Paragraph::new(lines).block(panel("Menu", true, theme)), area);
}

/// Field list of the record being edited.
pub fn render_editor(
	frame: &mut Frame,
	area: Rect,
	fields: &[Field],
	cursor: usize,
	typing: bool,
	theme: &Theme,
) {
	let label_width = fields.iter().map(|field| field.name.width()).max().unwrap_or_default();
	let inner_height = usize::from(area.height.saturating_sub(2));
	let skip = (cursor + 1).saturating_sub(inner_height);

	let lines = fields
		.iter()
		.enumerate()
		.skip(skip)
		.map(|(index, field)| {
			let value_style = match (index == cursor, typing) {
				(true, true) => theme.ghost,
				(true, false) => Style::new().add_modifier(Modifier::REVERSED),
				(false, _) => theme.prompt,
			};
			let marker = if index == cursor && typing { "✎" } else { " " };
			Line::from(vec![
				Span::styled(format!("{marker}{:<label_width$} ", field.name), theme.header),
				Span::styled(field.value.clone(), value_style),
			])
		})
		.collect::<Vec<_>>();

	let focused = !typing;
	frame.render_widget(Paragraph::new(lines).block(panel("Bewerken", focused, theme)), area);
}

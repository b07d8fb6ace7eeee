use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::Mode;
use crate::style::Theme;

/// Key hints for `mode`, as (key, description) pairs.
#[must_use]
pub fn hints(mode: &Mode) -> &'static [(&'static str, &'static str)] {
	match mode {
		Mode::Menu { .. } => &[
			("j/k", "Move"),
			("Enter", "Open"),
			("f", "Fuzzy Find"),
			("Esc", "Close Menu"),
		],
		Mode::Browsing => &[
			("m", "Menu"),
			("f", "Fuzzy Find"),
			("Tab", "Filter"),
			("e", "Edit"),
			("c/C", "Create"),
			("d", "Delete"),
			("i", "Invoice"),
			("j/k", "Move"),
			("Esc", "Quit"),
		],
		Mode::Searching => &[("Enter", "Submit"), ("Tab", "Autocomplete"), ("Esc", "Cancel")],
		Mode::Editing(editor) if editor.typing => &[("Enter", "Save Field"), ("Esc", "Cancel")],
		Mode::Editing(_) => &[("e", "Edit Field"), ("j/k", "Move"), ("Esc", "Return")],
		Mode::Selecting(selection) if selection.searching => {
			&[("Enter", "Submit"), ("Tab", "Autocomplete"), ("Esc", "Cancel")]
		}
		Mode::Selecting(_) => &[
			("s", "Select"),
			("f", "Fuzzy Find"),
			("j/k", "Move"),
			("Esc", "Cancel"),
		],
	}
}

pub fn render_footer(frame: &mut Frame, area: Rect, mode: &Mode, theme: &Theme) {
	let spans = hints(mode)
		.iter()
		.flat_map(|(key, description)| {
			[
				Span::styled(format!(" {key} "), theme.prompt.add_modifier(Modifier::BOLD)),
				Span::styled(format!("{description}  "), theme.empty),
			]
		})
		.collect::<Vec<_>>();
	frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeRegistration};

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	Theme {
		header: Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().fg(Color::Black).bg(Color::White),
		prompt: Style::new().fg(Color::White),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
		ghost: Style::new().fg(Color::DarkGray),
		focus: Style::new().fg(Color::Blue),
	}
}

fn light_theme() -> Theme {
	Theme {
		header: Style::new().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().fg(Color::White).bg(Color::Blue),
		prompt: Style::new().fg(Color::Black),
		empty: Style::new().fg(Color::Gray),
		highlight: Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
		ghost: Style::new().fg(Color::Gray),
		focus: Style::new().fg(Color::Magenta),
	}
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	vec![
		ThemeRegistration {
			name: "default",
			theme: default_theme(),
			aliases: &["dark"],
		},
		ThemeRegistration {
			name: "light",
			theme: light_theme(),
			aliases: &["bright"],
		},
	]
}

use ratatui::style::{Color, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Style for headers, borders and key hints.
	pub header: Style,
	/// Style for the row under the cursor.
	pub row_highlight: Style,
	/// Style for typed input.
	pub prompt: Style,
	/// Style for ellipsis rows, placeholders and empty states.
	pub empty: Style,
	/// Style for fuzzy match highlights.
	pub highlight: Style,
	/// Style for the suggestion rendered after typed input.
	pub ghost: Style,
	/// Border style of the focused pane.
	pub focus: Style,
}

impl Theme {
	/// Foreground of the header style, for borders and separators.
	#[must_use]
	pub fn border(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Border style for a pane, brighter when it holds focus.
	#[must_use]
	pub fn pane(&self, focused: bool) -> Style {
		if focused { self.focus } else { self.border() }
	}
}

/// Describes a theme instance that can be selected by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: &'static str,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: &'static [&'static str],
}

impl ThemeRegistration {
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

//! Single-line command input with an inline suggestion.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Paragraph};
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const PROMPT: &str = "> ";

/// What happened to the command input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
	/// The text was edited.
	Changed(String),
	/// Enter was pressed.
	Submitted(String),
	/// The suggestion replaced the text.
	Accepted(String),
}

/// Text field that renders the current suggestion as ghost text after the
/// typed text.
pub struct CommandInput {
	area: TextArea<'static>,
	suggestion: Option<String>,
	placeholder: String,
}

impl CommandInput {
	#[must_use]
	pub fn new(text: &str) -> Self {
		let mut input = Self {
			area: TextArea::default(),
			suggestion: None,
			placeholder: String::new(),
		};
		input.set_text(text);
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.area.lines().first().map_or("", String::as_str)
	}

	/// Replace the text without emitting anything. Drops the suggestion.
	pub fn set_text(&mut self, text: &str) {
		let mut area = TextArea::new(vec![text.to_string()]);
		area.set_cursor_line_style(Style::default());
		area.move_cursor(CursorMove::End);
		self.area = area;
		self.suggestion = None;
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
	}

	/// Forward an editing key. Returns whether the text changed.
	///
	/// Enter and Tab belong to the caller and are ignored here.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter | KeyCode::Tab) {
			return false;
		}
		let before = self.text().to_string();
		self.area.input(key);
		if self.area.lines().len() > 1 {
			let joined = self.area.lines().join(" ");
			self.set_text(&joined);
		}
		self.text() != before
	}

	pub fn set_suggestion(&mut self, suggestion: Option<String>) {
		self.suggestion = suggestion;
	}

	#[must_use]
	pub fn suggestion(&self) -> Option<&str> {
		self.suggestion.as_deref()
	}

	/// Part of the suggestion that extends past the typed text.
	///
	/// Only a suggestion that starts with the typed text, ignoring case, has
	/// a ghost.
	#[must_use]
	pub fn ghost(&self) -> Option<&str> {
		let suggestion = self.suggestion.as_deref()?;
		let mut rest = suggestion.char_indices();
		for typed in self.text().chars() {
			let (_, ch) = rest.next()?;
			if !ch.to_lowercase().eq(typed.to_lowercase()) {
				return None;
			}
		}
		let (offset, _) = rest.next()?;
		Some(&suggestion[offset..])
	}

	/// Replace the text with the suggestion, returning the new text.
	pub fn accept(&mut self) -> Option<String> {
		self.ghost()?;
		let suggestion = self.suggestion.take()?;
		self.set_text(&suggestion);
		Some(suggestion)
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
		let block = Block::bordered()
			.border_set(border::ROUNDED)
			.border_style(theme.pane(focused))
			.title("Command Input");
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [prompt_area, text_area] =
			Layout::horizontal([Constraint::Length(PROMPT.width() as u16), Constraint::Fill(1)])
				.areas(inner);
		frame.render_widget(Paragraph::new(PROMPT).style(theme.pane(focused)), prompt_area);

		let cursor = if focused {
			theme.prompt.add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.area.set_style(theme.prompt);
		self.area.set_cursor_style(cursor);
		self.area.set_placeholder_text(self.placeholder.clone());
		self.area.set_placeholder_style(theme.ghost);
		frame.render_widget(&self.area, text_area);

		self.render_ghost(frame, text_area, cursor, theme);
	}

	fn render_ghost(&self, frame: &mut Frame, area: Rect, cursor: Style, theme: &Theme) {
		let Some(ghost) = self.ghost() else {
			return;
		};
		let typed = self.text().width() as u16;
		if typed >= area.width {
			return;
		}

		let x = area.x + typed;
		let room = usize::from(area.width - typed);
		let mut chars = ghost.chars();
		let buffer = frame.buffer_mut();
		if let Some(first) = chars.next() {
			buffer.set_stringn(x, area.y, first.to_string(), room, cursor);
		}
		let rest = chars.as_str();
		if room > 1 && !rest.is_empty() {
			buffer.set_stringn(x + 1, area.y, rest, room - 1, theme.ghost);
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	fn type_text(input: &mut CommandInput, text: &str) {
		for ch in text.chars() {
			input.input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
		}
	}

	#[test]
	fn typing_and_backspace_edit_the_text() {
		let mut input = CommandInput::new("");
		type_text(&mut input, "jan");
		assert_eq!(input.text(), "jan");
		assert!(input.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)));
		assert_eq!(input.text(), "ja");
		assert!(!input.input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
	}

	#[test]
	fn ghost_shows_the_rest_of_the_suggestion() {
		let mut input = CommandInput::new("jan pe");
		input.set_suggestion(Some("Jan Peeters".into()));
		assert_eq!(input.ghost(), Some("eters"));

		assert_eq!(input.accept().as_deref(), Some("Jan Peeters"));
		assert_eq!(input.text(), "Jan Peeters");
		assert_eq!(input.ghost(), None);
		assert_eq!(input.accept(), None);
	}

	#[test]
	fn matches_inside_the_suggestion_leave_no_ghost() {
		let mut input = CommandInput::new("pee");
		input.set_suggestion(Some("Jan Peeters".into()));
		assert_eq!(input.ghost(), None);
		assert_eq!(input.accept(), None);
		assert_eq!(input.text(), "pee");

		input.set_text("JAN P");
		input.set_suggestion(Some("Jan Peeters".into()));
		assert_eq!(input.ghost(), Some("eeters"));
	}

	#[test]
	fn short_suggestions_leave_no_ghost() {
		let mut input = CommandInput::new("peeters");
		input.set_suggestion(Some("Peeters".into()));
		assert_eq!(input.ghost(), None);
		assert_eq!(input.accept(), None);
	}
}

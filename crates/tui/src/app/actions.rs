use hawk_records::Kind;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::mode::{MENU, MenuItem, Mode};
use super::{App, Outcome, SEARCH_PLACEHOLDER};
use crate::input::InputEvent;

impl App {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(Outcome::Discard);
		}
		if self.session.mode.input_focused() {
			self.handle_input_key(key);
			return None;
		}

		match self.session.mode.clone() {
			Mode::Menu { cursor } => return self.handle_menu_key(key, cursor),
			Mode::Browsing => return self.handle_browse_key(key),
			Mode::Editing(_) => self.handle_editor_key(key),
			Mode::Selecting(_) => self.handle_selection_key(key),
			Mode::Searching => {}
		}
		None
	}

	fn handle_input_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.cancel_input(),
			KeyCode::Enter => {
				let text = self.input.text().to_string();
				self.emit(InputEvent::Submitted(text));
			}
			KeyCode::Tab => {
				if let Some(text) = self.input.accept() {
					self.emit(InputEvent::Accepted(text));
				}
			}
			_ => {
				if self.input.input(key) {
					let text = self.input.text().to_string();
					self.emit(InputEvent::Changed(text));
				}
			}
		}
	}

	fn cancel_input(&mut self) {
		self.input.set_suggestion(None);
		match &mut self.session.mode {
			Mode::Editing(editor) => editor.typing = false,
			Mode::Selecting(selection) => selection.searching = false,
			Mode::Menu { .. } | Mode::Browsing | Mode::Searching => {}
		}
		match self.session.mode {
			Mode::Searching => {
				self.input.clear();
				self.session.search("");
				self.session.suggestion = None;
				self.session.mode = Mode::Browsing;
			}
			Mode::Editing(_) => self.show_query(),
			_ => {}
		}
	}

	fn handle_menu_key(&mut self, key: KeyEvent, cursor: usize) -> Option<Outcome> {
		match key.code {
			KeyCode::Char('j') | KeyCode::Down => {
				self.session.mode = Mode::Menu {
					cursor: (cursor + 1).min(MENU.len() - 1),
				};
			}
			KeyCode::Char('k') | KeyCode::Up => {
				self.session.mode = Mode::Menu {
					cursor: cursor.saturating_sub(1),
				};
			}
			KeyCode::Enter => match MENU.get(cursor) {
				Some(MenuItem::Open(kind)) => self.open(*kind),
				Some(MenuItem::Quit) => return Some(Outcome::Save),
				None => {}
			},
			KeyCode::Char('f') | KeyCode::Char('/') => self.start_search(),
			KeyCode::Esc | KeyCode::Char('m') => self.session.mode = Mode::Browsing,
			_ => {}
		}
		None
	}

	fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Outcome> {
		let count = self.session.collection().count();
		match key.code {
			KeyCode::Esc => return Some(Outcome::Save),
			KeyCode::Char('j') | KeyCode::Down => self.session.pager.down(count),
			KeyCode::Char('k') | KeyCode::Up => self.session.pager.up(),
			KeyCode::Char('f') | KeyCode::Char('/') => self.start_search(),
			KeyCode::Tab => self.session.cycle_preset(),
			KeyCode::Char('e') => {
				if let Some(handle) = self.session.collection().handle_at(self.session.cursor()) {
					self.session.edit(handle);
				}
			}
			KeyCode::Char('c') => self.create(0),
			KeyCode::Char('C') => self.create(1),
			KeyCode::Char('d') => self.session.remove(),
			KeyCode::Char('i') => self.session.invoice(),
			KeyCode::Char('m') => {
				let cursor = MENU
					.iter()
					.position(|item| *item == MenuItem::Open(self.session.kind))
					.unwrap_or_default();
				self.session.mode = Mode::Menu { cursor };
			}
			_ => {}
		}
		None
	}

	fn handle_editor_key(&mut self, key: KeyEvent) {
		let Mode::Editing(editor) = &mut self.session.mode else {
			return;
		};
		match key.code {
			KeyCode::Char('j') | KeyCode::Down => editor.field += 1,
			KeyCode::Char('k') | KeyCode::Up => editor.field = editor.field.saturating_sub(1),
			KeyCode::Char('e') | KeyCode::Enter => {
				editor.typing = true;
				if let Some((name, value)) = self.session.editor_field() {
					self.input.set_text(&value);
					self.input.set_placeholder(format!("{name}:"));
				}
			}
			KeyCode::Esc => {
				self.session.mode = Mode::Browsing;
				self.show_query();
			}
			_ => {}
		}
		self.clamp_editor();
	}

	/// Keep the editor cursor on an existing field.
	fn clamp_editor(&mut self) {
		let fields = match &self.session.mode {
			Mode::Editing(editor) => {
				let collection = self.session.collection();
				collection
					.position(editor.handle)
					.and_then(|index| collection.fields(index).ok())
					.map_or(0, |fields| fields.len())
			}
			_ => return,
		};
		if let Mode::Editing(editor) = &mut self.session.mode {
			editor.field = editor.field.min(fields.saturating_sub(1));
		}
	}

	fn handle_selection_key(&mut self, key: KeyEvent) {
		let count = self.session.collection().count();
		let Mode::Selecting(selection) = &mut self.session.mode else {
			return;
		};
		match key.code {
			KeyCode::Char('j') | KeyCode::Down => self.session.pager.down(count),
			KeyCode::Char('k') | KeyCode::Up => self.session.pager.up(),
			KeyCode::Char('f') | KeyCode::Char('/') => {
				selection.searching = true;
				self.input.set_placeholder(SEARCH_PLACEHOLDER);
			}
			KeyCode::Char('s') | KeyCode::Enter => {
				self.session.pick();
				self.show_query();
			}
			KeyCode::Esc => {
				let origin = selection.origin;
				self.session.end_selection(origin);
				self.show_query();
			}
			_ => {}
		}
	}

	fn start_search(&mut self) {
		self.session.mode = Mode::Searching;
		self.input.set_placeholder(SEARCH_PLACEHOLDER);
	}

	fn open(&mut self, kind: Kind) {
		self.session.switch_to(kind);
		self.show_query();
	}

	fn create(&mut self, choice: usize) {
		self.session.create(choice);
		self.show_query();
	}
}

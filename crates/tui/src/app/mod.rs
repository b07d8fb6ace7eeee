//! Application state: the record collections, the active mode and the
//! command input, plus the listeners that connect them.

mod actions;
mod listeners;
mod mode;
mod render;
mod session;
#[cfg(test)]
mod tests;

use hawk_records::{Kind, Records};
use tui_logger::TuiWidgetState;

pub use self::mode::{Editor, Mode, Selection, Step};
pub use self::session::Session;
use crate::config::UiOptions;
use crate::events::{ListenerId, Listeners};
use crate::input::{CommandInput, InputEvent};
use crate::style::Theme;

pub(crate) const SEARCH_PLACEHOLDER: &str = "Fuzzy search";

/// How the user left the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// Leave and keep the changes.
	Save,
	/// Leave and drop the changes made this session.
	Discard,
}

/// Interactive front-end over a set of [`Records`].
pub struct App {
	pub(crate) session: Session,
	pub(crate) input: CommandInput,
	listeners: Listeners<InputEvent, Session>,
	pub(crate) theme: Theme,
	pub(crate) viewport: usize,
	pub(crate) activity: TuiWidgetState,
}

impl App {
	#[must_use]
	pub fn new(records: Records, options: UiOptions) -> Self {
		let mut session = Session::new(records, options.kind);
		if !options.initial_query.is_empty() {
			session.search(&options.initial_query);
			session.suggestion = None;
		}

		let mut input = CommandInput::new(&options.initial_query);
		input.set_placeholder(SEARCH_PLACEHOLDER);

		let mut listeners = Listeners::new();
		listeners::install(&mut listeners);

		Self {
			session,
			input,
			listeners,
			theme: options.theme,
			viewport: options.viewport.max(3),
			activity: TuiWidgetState::new(),
		}
	}

	/// Register an extra listener for command input events.
	pub fn listen(
		&mut self,
		callback: impl FnMut(&InputEvent, &mut Session) + 'static,
	) -> ListenerId {
		self.listeners.subscribe(callback)
	}

	pub fn unlisten(&mut self, id: ListenerId) -> bool {
		self.listeners.unsubscribe(id)
	}

	#[must_use]
	pub fn mode(&self) -> &Mode {
		&self.session.mode
	}

	#[must_use]
	pub fn kind(&self) -> Kind {
		self.session.kind
	}

	#[must_use]
	pub fn records(&self) -> &Records {
		&self.session.records
	}

	#[must_use]
	pub fn into_records(self) -> Records {
		self.session.records
	}

	/// Dispatch an input event and pull the resulting suggestion back into
	/// the command input.
	pub(crate) fn emit(&mut self, event: InputEvent) {
		self.listeners.emit(&event, &mut self.session);

		let suggestion = self.session.suggestion.take();
		if self.session.mode.is_search() {
			self.input.set_suggestion(suggestion);
		} else {
			self.input.set_suggestion(None);
		}
		if matches!(event, InputEvent::Submitted(_))
			&& matches!(self.session.mode, Mode::Editing(_))
		{
			self.show_query();
		}
	}

	/// Put the active collection's query back into the command input.
	pub(crate) fn show_query(&mut self) {
		let query = self.session.collection().last_query().to_string();
		self.input.set_text(&query);
		self.input.set_placeholder(SEARCH_PLACEHOLDER);
	}
}

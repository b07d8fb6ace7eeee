//! Built-in reactions to command input events.

use log::debug;

use super::mode::Mode;
use super::session::Session;
use crate::events::Listeners;
use crate::input::InputEvent;

pub(crate) fn install(listeners: &mut Listeners<InputEvent, Session>) {
	listeners.subscribe(narrow);
	listeners.subscribe(submit);
}

/// Re-run the search whenever the query text moves.
fn narrow(event: &InputEvent, session: &mut Session) {
	let (InputEvent::Changed(text) | InputEvent::Accepted(text)) = event else {
		return;
	};
	if session.mode.is_search() {
		session.search(text);
	}
}

fn submit(event: &InputEvent, session: &mut Session) {
	let InputEvent::Submitted(text) = event else {
		return;
	};
	if matches!(&session.mode, Mode::Editing(editor) if editor.typing) {
		session.commit(text);
		return;
	}
	match &mut session.mode {
		mode @ Mode::Searching => {
			debug!("search submitted: {text:?}");
			*mode = Mode::Browsing;
		}
		Mode::Selecting(selection) if selection.searching => selection.searching = false,
		_ => {}
	}
}

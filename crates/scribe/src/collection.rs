use std::ops::Range;

use crate::{Entity, Field, Filter, Handle, Scribe, ScribeError};

/// Kind-erased access to a [`Scribe`], for frontends that switch between
/// collections of different entity kinds at runtime.
pub trait Collection {
	fn columns(&self) -> &'static [&'static str];

	/// Entries owned, visible or not.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Entries in the current view.
	fn count(&self) -> usize;

	fn rows(&self, range: Range<usize>) -> Vec<Vec<String>>;

	fn matches(&self, range: Range<usize>) -> Vec<Option<&str>>;

	fn last_query(&self) -> &str;

	fn run_query(&mut self, query: &str);

	fn get_suggestion(&mut self, query: &str) -> Option<String>;

	fn set_filter(&mut self, filter: Option<Filter>);

	fn active_filter(&self) -> Option<&Filter>;

	fn refresh(&mut self);

	fn handle_at(&self, index: usize) -> Option<Handle>;

	fn position(&self, handle: Handle) -> Option<usize>;

	/// Editable fields of the entry at view `index`.
	fn fields(&self, index: usize) -> Result<Vec<Field>, ScribeError>;

	fn uid(&self, index: usize) -> Option<String>;

	fn update(&mut self, index: usize, name: &str, raw: &str) -> Result<(), ScribeError>;

	/// Remove the entry at view `index`.
	fn remove_row(&mut self, index: usize) -> Result<(), ScribeError>;
}

impl<T: Entity> Collection for Scribe<T> {
	fn columns(&self) -> &'static [&'static str] {
		T::columns()
	}

	fn len(&self) -> usize {
		Scribe::len(self)
	}

	fn count(&self) -> usize {
		Scribe::count(self)
	}

	fn rows(&self, range: Range<usize>) -> Vec<Vec<String>> {
		Scribe::rows(self, range)
	}

	fn matches(&self, range: Range<usize>) -> Vec<Option<&str>> {
		Scribe::matches(self, range)
	}

	fn last_query(&self) -> &str {
		Scribe::last_query(self)
	}

	fn run_query(&mut self, query: &str) {
		Scribe::run_query(self, query, true);
	}

	fn get_suggestion(&mut self, query: &str) -> Option<String> {
		Scribe::get_suggestion(self, query)
	}

	fn set_filter(&mut self, filter: Option<Filter>) {
		Scribe::set_filter(self, filter);
	}

	fn active_filter(&self) -> Option<&Filter> {
		Scribe::active_filter(self)
	}

	fn refresh(&mut self) {
		Scribe::refresh(self);
	}

	fn handle_at(&self, index: usize) -> Option<Handle> {
		Scribe::handle_at(self, index)
	}

	fn position(&self, handle: Handle) -> Option<usize> {
		Scribe::position(self, handle)
	}

	fn fields(&self, index: usize) -> Result<Vec<Field>, ScribeError> {
		Scribe::fields(self, index)
	}

	fn uid(&self, index: usize) -> Option<String> {
		Scribe::get(self, index).ok().and_then(T::uid)
	}

	fn update(&mut self, index: usize, name: &str, raw: &str) -> Result<(), ScribeError> {
		Scribe::update(self, index, name, raw)
	}

	fn remove_row(&mut self, index: usize) -> Result<(), ScribeError> {
		let handle = self.handle_at(index).ok_or(ScribeError::IndexOutOfRange {
			index,
			len: Scribe::count(self),
		})?;
		self.remove_handle(handle).map(drop)
	}
}

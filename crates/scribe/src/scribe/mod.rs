//! The generic fuzzy-searchable collection.
//!
//! A [`Scribe`] owns its entities in a generation-checked store. The view is
//! split in two sequences: the window of entries still matching the active
//! filter and query, and the hidden stack of entries pruned by the query in
//! prune order. Every entry passing the filter lives in exactly one of them.

mod query;

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use log::{debug, info, warn};

use crate::fuzzable::Fuzzable;
use crate::store::{Handle, Store};
use crate::{Entity, Field, Filter, ScribeError};

/// An entry pruned by the query, with the length of the query that pruned it.
#[derive(Debug, Clone)]
struct Pruned {
	fuzzable: Fuzzable,
	depth: usize,
}

/// Owning, fuzzy-searchable collection of one entity kind.
#[derive(Debug)]
pub struct Scribe<T> {
	store: Store<T>,
	all: Vec<Handle>,
	window: Vec<Fuzzable>,
	hidden: Vec<Pruned>,
	active_filter: Option<Filter>,
	last_query: String,
}

impl<T: Entity> Default for Scribe<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Entity> Scribe<T> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			store: Store::new(),
			all: Vec::new(),
			window: Vec::new(),
			hidden: Vec::new(),
			active_filter: None,
			last_query: String::new(),
		}
	}

	/// Build a collection from `entities`, rejecting duplicate uids.
	pub fn from_entities<I>(entities: I) -> Result<Self, ScribeError>
	where
		I: IntoIterator<Item = T>,
	{
		let mut scribe = Self::new();
		for entity in entities {
			scribe.add(entity)?;
		}
		Ok(scribe)
	}

	/// Take ownership of `entity` and index it.
	///
	/// Entities failing the active filter are stored but never enter the view.
	/// With a query active the new entry is scored against every word and
	/// lands in the window or on the hidden stack accordingly.
	pub fn add(&mut self, entity: T) -> Result<Handle, ScribeError> {
		if let Some(uid) = entity.uid()
			&& self.contains_uid(&uid, None)
		{
			return Err(ScribeError::DuplicateUid { uid });
		}

		let admitted = self.admits(&entity);
		let handle = self.store.insert(entity);
		self.all.push(handle);

		if admitted && let Some(fuzzable) = self.fuzzable(handle) {
			self.place(fuzzable);
		}
		Ok(handle)
	}

	/// Remove the entry at `index` in insertion order.
	pub fn remove(&mut self, index: usize) -> Result<T, ScribeError> {
		let len = self.all.len();
		let handle = *self
			.all
			.get(index)
			.ok_or(ScribeError::IndexOutOfRange { index, len })?;
		self.remove_handle(handle)
	}

	/// Remove the entry identified by `uid`.
	pub fn remove_uid(&mut self, uid: &str) -> Result<T, ScribeError> {
		let handle = self
			.all
			.iter()
			.copied()
			.find(|&handle| {
				self.store
					.get(handle)
					.and_then(T::uid)
					.is_some_and(|candidate| candidate == uid)
			})
			.ok_or_else(|| ScribeError::UnknownUid {
				uid: uid.to_string(),
			})?;
		self.remove_handle(handle)
	}

	/// Remove the entry behind `handle` and purge it from the view.
	pub fn remove_handle(&mut self, handle: Handle) -> Result<T, ScribeError> {
		let entity = self.store.remove(handle).ok_or(ScribeError::StaleHandle)?;
		self.all.retain(|&candidate| candidate != handle);
		self.window.retain(|fuzzable| fuzzable.handle != handle);
		self.hidden.retain(|pruned| pruned.fuzzable.handle != handle);
		info!(
			"removed {} {}",
			entity.kind(),
			entity.uid().unwrap_or_else(|| "(unidentified)".into())
		);
		Ok(entity)
	}

	/// Drop every entry and reset the query. The active filter is kept.
	pub fn clear(&mut self) {
		self.store.clear();
		self.all.clear();
		self.window.clear();
		self.hidden.clear();
		self.last_query.clear();
	}

	/// Parse `raw` into attribute `name` of the entry at view `index`.
	pub fn update(&mut self, index: usize, name: &str, raw: &str) -> Result<(), ScribeError> {
		let handle = self.handle_at(index).ok_or(ScribeError::IndexOutOfRange {
			index,
			len: self.window.len(),
		})?;
		self.update_handle(handle, name, raw)
	}

	/// Parse `raw` into attribute `name` of the entry behind `handle`.
	///
	/// A value that would duplicate another entry's uid is rolled back and
	/// reported. On success the view is rebuilt, since any searchable string
	/// may have changed.
	pub fn update_handle(
		&mut self,
		handle: Handle,
		name: &str,
		raw: &str,
	) -> Result<(), ScribeError> {
		let entity = self.store.get_mut(handle).ok_or(ScribeError::StaleHandle)?;
		let previous = entity
			.fields()
			.into_iter()
			.find(|field| field.name == name)
			.map(|field| field.value);
		entity.set_attribute(name, raw)?;

		if let Some(uid) = entity.uid()
			&& self.contains_uid(&uid, Some(handle))
		{
			if let Some(entity) = self.store.get_mut(handle) {
				match previous {
					Some(previous) => {
						if let Err(err) = entity.set_attribute(name, &previous) {
							warn!("failed to roll back {name}: {err}");
						}
					}
					None => warn!("no previous value to restore for {name}"),
				}
			}
			return Err(ScribeError::DuplicateUid { uid });
		}

		debug!("updated {name}");
		self.refresh();
		Ok(())
	}

	/// Entry at view `index`.
	pub fn get(&self, index: usize) -> Result<&T, ScribeError> {
		self.handle_at(index)
			.and_then(|handle| self.store.get(handle))
			.ok_or(ScribeError::IndexOutOfRange {
				index,
				len: self.window.len(),
			})
	}

	/// Editable fields of the entry at view `index`.
	pub fn fields(&self, index: usize) -> Result<Vec<Field>, ScribeError> {
		self.get(index).map(T::fields)
	}

	#[must_use]
	pub fn entity(&self, handle: Handle) -> Option<&T> {
		self.store.get(handle)
	}

	#[must_use]
	pub fn handle_at(&self, index: usize) -> Option<Handle> {
		self.window.get(index).map(|fuzzable| fuzzable.handle)
	}

	/// View position of `handle`, if it is currently visible.
	#[must_use]
	pub fn position(&self, handle: Handle) -> Option<usize> {
		self.window
			.iter()
			.position(|fuzzable| fuzzable.handle == handle)
	}

	/// Every entry in insertion order, regardless of filter and query.
	pub fn all(&self) -> impl Iterator<Item = &T> {
		self.all.iter().filter_map(|&handle| self.store.get(handle))
	}

	/// Entries of the current view, in view order.
	pub fn view(&self) -> impl Iterator<Item = &T> {
		self.window
			.iter()
			.filter_map(|fuzzable| self.store.get(fuzzable.handle))
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.view()
	}

	/// Number of entries in the current view.
	#[must_use]
	pub fn count(&self) -> usize {
		self.window.len()
	}

	/// Number of entries owned, visible or not.
	#[must_use]
	pub fn len(&self) -> usize {
		self.all.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.all.is_empty()
	}

	#[must_use]
	pub fn hidden_len(&self) -> usize {
		self.hidden.len()
	}

	/// Map every identified entry by uid.
	///
	/// Built on demand; the collection keeps no index it would have to
	/// invalidate.
	#[must_use]
	pub fn uid_index(&self) -> HashMap<String, &T> {
		self.all()
			.filter_map(|entity| entity.uid().map(|uid| (uid, entity)))
			.collect()
	}

	#[must_use]
	pub fn uids(&self) -> HashSet<String> {
		self.all().filter_map(T::uid).collect()
	}

	/// Replace the active filter and rebuild the view.
	pub fn set_filter(&mut self, filter: Option<Filter>) {
		self.active_filter = filter;
		self.refresh();
	}

	#[must_use]
	pub fn active_filter(&self) -> Option<&Filter> {
		self.active_filter.as_ref()
	}

	/// Rebuild the view from scratch and replay the last query.
	///
	/// Used after entities changed behind the collection's back, e.g. through
	/// a shared reference held by another collection.
	pub fn refresh(&mut self) {
		let query = std::mem::take(&mut self.last_query);
		self.rebuild_window();
		debug!(
			"rebuilt view: {} of {} entries pass the filter",
			self.window.len(),
			self.all.len()
		);
		if !query.is_empty() {
			self.run_query(&query, true);
		}
	}

	/// Drop the filter and query and show everything.
	pub fn reset(&mut self) {
		self.active_filter = None;
		self.last_query.clear();
		self.rebuild_window();
	}

	#[must_use]
	pub fn last_query(&self) -> &str {
		&self.last_query
	}

	#[must_use]
	pub fn columns(&self) -> &'static [&'static str] {
		T::columns()
	}

	/// Display rows for the view slice `range`, clamped to the view.
	#[must_use]
	pub fn rows(&self, range: Range<usize>) -> Vec<Vec<String>> {
		self.window_slice(range)
			.iter()
			.filter_map(|fuzzable| self.store.get(fuzzable.handle))
			.map(T::row)
			.collect()
	}

	/// Last matched string of each entry in the view slice `range`.
	#[must_use]
	pub fn matches(&self, range: Range<usize>) -> Vec<Option<&str>> {
		self.window_slice(range)
			.iter()
			.map(|fuzzable| fuzzable.last_match.as_deref())
			.collect()
	}

	fn window_slice(&self, range: Range<usize>) -> &[Fuzzable] {
		let end = range.end.min(self.window.len());
		let start = range.start.min(end);
		&self.window[start..end]
	}

	fn admits(&self, entity: &T) -> bool {
		self.active_filter
			.as_ref()
			.is_none_or(|filter| filter.matches(entity))
	}

	fn contains_uid(&self, uid: &str, except: Option<Handle>) -> bool {
		self.all
			.iter()
			.filter(|&&handle| Some(handle) != except)
			.filter_map(|&handle| self.store.get(handle))
			.any(|entity| entity.uid().is_some_and(|candidate| candidate == uid))
	}

	fn fuzzable(&self, handle: Handle) -> Option<Fuzzable> {
		let entity = self.store.get(handle)?;
		let seq = self.store.seq(handle)?;
		Some(Fuzzable::new(handle, seq, entity))
	}

	/// Repopulate the window from every entry passing the filter.
	fn rebuild_window(&mut self) {
		self.hidden.clear();
		self.window = self
			.all
			.iter()
			.filter(|&&handle| self.store.get(handle).is_some_and(|entity| self.admits(entity)))
			.filter_map(|&handle| self.fuzzable(handle))
			.collect();
	}
}

impl<'a, T: Entity> IntoIterator for &'a Scribe<T> {
	type Item = &'a T;
	type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

	fn into_iter(self) -> Self::IntoIter {
		Box::new(self.view())
	}
}

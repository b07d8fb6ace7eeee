//! Typed listener registry.
//!
//! Listeners receive the event together with a `&mut` context and run
//! synchronously in registration order. The registry is never part of the
//! context it hands out, so a listener cannot emit into the registry that is
//! currently dispatching.

use indexmap::IndexMap;

/// Token returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<E, C> = Box<dyn FnMut(&E, &mut C)>;

/// Ordered set of callbacks for events of type `E` over a context `C`.
pub struct Listeners<E, C> {
	next: u64,
	callbacks: IndexMap<ListenerId, Callback<E, C>>,
}

impl<E, C> Listeners<E, C> {
	#[must_use]
	pub fn new() -> Self {
		Self {
			next: 0,
			callbacks: IndexMap::new(),
		}
	}

	pub fn subscribe(&mut self, callback: impl FnMut(&E, &mut C) + 'static) -> ListenerId {
		let id = ListenerId(self.next);
		self.next += 1;
		self.callbacks.insert(id, Box::new(callback));
		id
	}

	/// Drop a listener. Returns `false` when it was already gone.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		self.callbacks.shift_remove(&id).is_some()
	}

	pub fn emit(&mut self, event: &E, context: &mut C) {
		for callback in self.callbacks.values_mut() {
			callback(event, context);
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.callbacks.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.callbacks.is_empty()
	}
}

impl<E, C> Default for Listeners<E, C> {
	fn default() -> Self {
		Self::new()
	}
}

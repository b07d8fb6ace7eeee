//! Generation-checked slot storage for collection entries.

/// Stable reference to an entry in a [`crate::Scribe`].
///
/// Removing an entry bumps its slot generation, so handles taken before the
/// removal resolve to nothing instead of aliasing a later entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
	index: u32,
	generation: u32,
}

#[derive(Debug)]
struct Slot<T> {
	generation: u32,
	seq: u64,
	value: Option<T>,
}

#[derive(Debug)]
pub(crate) struct Store<T> {
	slots: Vec<Slot<T>>,
	free: Vec<u32>,
	next_seq: u64,
	len: usize,
}

impl<T> Store<T> {
	pub(crate) fn new() -> Self {
		Self {
			slots: Vec::new(),
			free: Vec::new(),
			next_seq: 0,
			len: 0,
		}
	}

	pub(crate) fn insert(&mut self, value: T) -> Handle {
		let seq = self.next_seq;
		self.next_seq += 1;
		self.len += 1;

		if let Some(index) = self.free.pop() {
			let slot = &mut self.slots[index as usize];
			slot.seq = seq;
			slot.value = Some(value);
			return Handle {
				index,
				generation: slot.generation,
			};
		}

		let index = self.slots.len() as u32;
		self.slots.push(Slot {
			generation: 0,
			seq,
			value: Some(value),
		});
		Handle {
			index,
			generation: 0,
		}
	}

	fn slot(&self, handle: Handle) -> Option<&Slot<T>> {
		self.slots
			.get(handle.index as usize)
			.filter(|slot| slot.generation == handle.generation && slot.value.is_some())
	}

	pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
		self.slot(handle).and_then(|slot| slot.value.as_ref())
	}

	pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
		self.slots
			.get_mut(handle.index as usize)
			.filter(|slot| slot.generation == handle.generation)
			.and_then(|slot| slot.value.as_mut())
	}

	/// Insertion sequence of a live entry, used to keep sorts stable.
	pub(crate) fn seq(&self, handle: Handle) -> Option<u64> {
		self.slot(handle).map(|slot| slot.seq)
	}

	pub(crate) fn remove(&mut self, handle: Handle) -> Option<T> {
		let slot = self
			.slots
			.get_mut(handle.index as usize)
			.filter(|slot| slot.generation == handle.generation)?;
		let value = slot.value.take()?;
		slot.generation = slot.generation.wrapping_add(1);
		self.free.push(handle.index);
		self.len -= 1;
		Some(value)
	}

	pub(crate) fn clear(&mut self) {
		for (index, slot) in self.slots.iter_mut().enumerate() {
			if slot.value.take().is_some() {
				slot.generation = slot.generation.wrapping_add(1);
				self.free.push(index as u32);
			}
		}
		self.len = 0;
	}

	pub(crate) fn len(&self) -> usize {
		self.len
	}
}

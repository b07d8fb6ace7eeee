//! Windowed paging over a ranked view.

use std::ops::Range;

/// Cursor over a view of `count` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
	cursor: usize,
}

/// Visible slice of a view for one viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
	pub start: usize,
	pub end: usize,
	pub cursor: usize,
	/// Rows exist above `start`.
	pub leading_ellipsis: bool,
	/// Rows exist at or below `end`.
	pub trailing_ellipsis: bool,
}

impl Page {
	#[must_use]
	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

impl Pager {
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn up(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn down(&mut self, count: usize) {
		if self.cursor + 1 < count {
			self.cursor += 1;
		}
	}

	pub fn select(&mut self, index: usize, count: usize) {
		self.cursor = index;
		self.clamp(count);
	}

	/// Pull the cursor back inside `[0, count)` after the view shrank.
	pub fn clamp(&mut self, count: usize) {
		self.cursor = self.cursor.min(count.saturating_sub(1));
	}

	/// Compute the visible slice for a viewport of `height` rows.
	///
	/// The cursor row is always inside the slice. Near either end the slice
	/// pins to that edge, otherwise it keeps the cursor roughly centered. When
	/// the view overflows, one row per ellipsis is reserved from `height`.
	pub fn page(&mut self, count: usize, height: usize) -> Page {
		self.clamp(count);
		let cursor = self.cursor;
		if count == 0 || height == 0 {
			return Page::default();
		}

		let (start, end) = if count <= height {
			(0, count)
		} else if height < 3 {
			(cursor, cursor + 1)
		} else {
			let margin = height / 2;
			if cursor < margin {
				(0, height - 1)
			} else if cursor + margin >= count {
				(count - height + 1, count)
			} else {
				let body = height - 2;
				let start = cursor - body / 2;
				(start, start + body)
			}
		};

		Page {
			start,
			end,
			cursor,
			leading_ellipsis: start > 0,
			trailing_ellipsis: end < count,
		}
	}
}

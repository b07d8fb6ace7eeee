use chrono::NaiveDate;

/// Reservation numbers of one day, `yymmdd-NNN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySequence {
	prefix: String,
	last: u32,
}

impl DailySequence {
	#[must_use]
	pub fn for_day(day: NaiveDate) -> Self {
		Self {
			prefix: day.format("%y%m%d").to_string(),
			last: 0,
		}
	}

	/// Continue after the highest of `numbers` issued on this day.
	pub fn seed<'a>(&mut self, numbers: impl IntoIterator<Item = &'a str>) {
		for nummer in numbers {
			self.observe(nummer);
		}
	}

	/// Account for an existing number so it is never issued again.
	pub fn observe(&mut self, nummer: &str) {
		let serial = nummer
			.strip_prefix(self.prefix.as_str())
			.and_then(|rest| rest.strip_prefix('-'))
			.and_then(|serial| serial.parse::<u32>().ok());
		if let Some(serial) = serial {
			self.last = self.last.max(serial);
		}
	}

	pub fn next(&mut self) -> String {
		self.last += 1;
		format!("{}-{:03}", self.prefix, self.last)
	}

	#[must_use]
	pub fn peek(&self) -> String {
		format!("{}-{:03}", self.prefix, self.last + 1)
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, NaiveDate};

use crate::ScribeError;

/// A named, rendered attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	pub name: &'static str,
	pub value: String,
}

impl Field {
	pub fn new(name: &'static str, value: impl Into<String>) -> Self {
		Self {
			name,
			value: value.into(),
		}
	}
}

/// Typed attribute value used by filters.
#[derive(Debug, Clone)]
pub enum Value {
	Text(String),
	Integer(i64),
	Number(f64),
	Flag(bool),
	Date(NaiveDate),
}

impl Value {
	/// Numeric view of the value, used by range filters.
	///
	/// Dates map to their day number so they can be compared in ranges too.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Integer(value) => Some(*value as f64),
			Self::Number(value) => Some(*value),
			Self::Date(date) => Some(f64::from(date.num_days_from_ce())),
			Self::Text(_) | Self::Flag(_) => None,
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Text(a), Self::Text(b)) => a == b,
			(Self::Flag(a), Self::Flag(b)) => a == b,
			(Self::Date(a), Self::Date(b)) => a == b,
			(Self::Integer(_) | Self::Number(_), Self::Integer(_) | Self::Number(_)) => {
				self.as_f64() == other.as_f64()
			}
			_ => false,
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Flag(value)
	}
}

impl From<NaiveDate> for Value {
	fn from(value: NaiveDate) -> Self {
		Self::Date(value)
	}
}

/// Capability contract every record stored in a [`crate::Scribe`] provides.
///
/// The collection never looks inside an entity beyond these accessors.
pub trait Entity {
	/// Stable identity; `None` for placeholders that are not yet identifiable.
	fn uid(&self) -> Option<String>;

	/// Kind name matched by kind filters.
	fn kind(&self) -> &'static str;

	/// Ordered searchable attributes. Empty renderings are not indexed.
	fn searchable(&self) -> Vec<Field>;

	/// Editable attributes, rendered so that `set_attribute` accepts them back.
	fn fields(&self) -> Vec<Field>;

	/// Formatted display cells, one per entry of [`Entity::columns`].
	fn row(&self) -> Vec<String>;

	/// Typed attribute lookup for filters.
	fn attribute(&self, name: &str) -> Option<Value>;

	/// Kind of a related entity, if `relation` names one.
	fn inner_kind(&self, _relation: &str) -> Option<&'static str> {
		None
	}

	/// Attribute of a related entity, if `relation` names one.
	fn inner_attribute(&self, _relation: &str, _name: &str) -> Option<Value> {
		None
	}

	/// Parse `raw` and assign it to `name`.
	///
	/// Implementations must leave the entity untouched when they return an error.
	fn set_attribute(&mut self, name: &str, raw: &str) -> Result<(), ScribeError>;

	/// Column headers matching [`Entity::row`].
	fn columns() -> &'static [&'static str]
	where
		Self: Sized;
}

impl<T: Entity> Entity for Rc<RefCell<T>> {
	fn uid(&self) -> Option<String> {
		self.borrow().uid()
	}

	fn kind(&self) -> &'static str {
		self.borrow().kind()
	}

	fn searchable(&self) -> Vec<Field> {
		self.borrow().searchable()
	}

	fn fields(&self) -> Vec<Field> {
		self.borrow().fields()
	}

	fn row(&self) -> Vec<String> {
		self.borrow().row()
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		self.borrow().attribute(name)
	}

	fn inner_kind(&self, relation: &str) -> Option<&'static str> {
		self.borrow().inner_kind(relation)
	}

	fn inner_attribute(&self, relation: &str, name: &str) -> Option<Value> {
		self.borrow().inner_attribute(relation, name)
	}

	fn set_attribute(&mut self, name: &str, raw: &str) -> Result<(), ScribeError> {
		self.borrow_mut().set_attribute(name, raw)
	}

	fn columns() -> &'static [&'static str] {
		T::columns()
	}
}

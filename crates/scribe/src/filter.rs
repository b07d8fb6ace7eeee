use std::collections::HashSet;

use crate::{Entity, Value};

/// Stateless predicate restricting which entries a view may contain.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
	/// Entity kind equals the name.
	Kind(String),
	/// Named attribute equals the value.
	Attribute { name: String, value: Value },
	/// Kind of the related entity equals the name.
	InnerKind { relation: String, kind: String },
	/// Named attribute of the related entity equals the value.
	InnerAttribute {
		relation: String,
		name: String,
		value: Value,
	},
	/// Numeric attribute within `[start, limit)`. Missing bounds are open.
	Range {
		name: String,
		start: Option<f64>,
		limit: Option<f64>,
	},
	/// Every sub-filter matches. An empty conjunction matches everything.
	All(Vec<Filter>),
	/// Entity uid is one of the set.
	Uids(HashSet<String>),
	/// Entity has a uid at all.
	Identified,
}

impl Filter {
	pub fn kind(name: impl Into<String>) -> Self {
		Self::Kind(name.into())
	}

	pub fn attribute(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self::Attribute {
			name: name.into(),
			value: value.into(),
		}
	}

	pub fn inner_kind(relation: impl Into<String>, kind: impl Into<String>) -> Self {
		Self::InnerKind {
			relation: relation.into(),
			kind: kind.into(),
		}
	}

	pub fn inner_attribute(
		relation: impl Into<String>,
		name: impl Into<String>,
		value: impl Into<Value>,
	) -> Self {
		Self::InnerAttribute {
			relation: relation.into(),
			name: name.into(),
			value: value.into(),
		}
	}

	pub fn range(name: impl Into<String>, start: Option<f64>, limit: Option<f64>) -> Self {
		Self::Range {
			name: name.into(),
			start,
			limit,
		}
	}

	pub fn uids<I, S>(uids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Uids(uids.into_iter().map(Into::into).collect())
	}

	/// Evaluate the predicate against `entity`.
	pub fn matches(&self, entity: &dyn Entity) -> bool {
		match self {
			Self::Kind(kind) => entity.kind() == kind,
			Self::Attribute { name, value } => entity.attribute(name).as_ref() == Some(value),
			Self::InnerKind { relation, kind } => {
				entity.inner_kind(relation) == Some(kind.as_str())
			}
			Self::InnerAttribute {
				relation,
				name,
				value,
			} => entity.inner_attribute(relation, name).as_ref() == Some(value),
			Self::Range { name, start, limit } => {
				let Some(number) = entity.attribute(name).and_then(|value| value.as_f64()) else {
					return false;
				};
				start.is_none_or(|start| number >= start)
					&& limit.is_none_or(|limit| number < limit)
			}
			Self::All(filters) => filters.iter().all(|filter| filter.matches(entity)),
			Self::Uids(uids) => entity.uid().is_some_and(|uid| uids.contains(&uid)),
			Self::Identified => entity.uid().is_some(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Field, ScribeError};

	struct Car {
		vin: Option<&'static str>,
		price: f64,
		available: bool,
		owner: Owner,
	}

	struct Owner {
		kind: &'static str,
		city: &'static str,
	}

	impl Entity for Car {
		fn uid(&self) -> Option<String> {
			self.vin.map(str::to_string)
		}

		fn kind(&self) -> &'static str {
			"Car"
		}

		fn searchable(&self) -> Vec<Field> {
			Vec::new()
		}

		fn fields(&self) -> Vec<Field> {
			Vec::new()
		}

		fn row(&self) -> Vec<String> {
			Vec::new()
		}

		fn attribute(&self, name: &str) -> Option<Value> {
			match name {
				"price" => Some(self.price.into()),
				"available" => Some(self.available.into()),
				_ => None,
			}
		}

		fn inner_kind(&self, relation: &str) -> Option<&'static str> {
			(relation == "owner").then_some(self.owner.kind)
		}

		fn inner_attribute(&self, relation: &str, name: &str) -> Option<Value> {
			(relation == "owner" && name == "city").then(|| self.owner.city.into())
		}

		fn set_attribute(&mut self, name: &str, _raw: &str) -> Result<(), ScribeError> {
			Err(ScribeError::unknown(name))
		}

		fn columns() -> &'static [&'static str] {
			&[]
		}
	}

	fn car(vin: Option<&'static str>, price: f64, available: bool) -> Car {
		Car {
			vin,
			price,
			available,
			owner: Owner {
				kind: "Person",
				city: "Genk",
			},
		}
	}

	#[test]
	fn attribute_filters_compare_values() {
		let cheap = car(Some("A"), 35.0, true);
		assert!(Filter::attribute("available", true).matches(&cheap));
		assert!(!Filter::attribute("available", false).matches(&cheap));
		assert!(!Filter::attribute("missing", true).matches(&cheap));
		assert!(Filter::attribute("price", 35.0).matches(&cheap));
	}

	#[test]
	fn range_is_half_open() {
		let at_limit = car(Some("A"), 50.0, true);
		let below = car(Some("B"), 49.99, true);
		let under_fifty = Filter::range("price", None, Some(50.0));
		let from_fifty = Filter::range("price", Some(50.0), None);
		let open = Filter::range("price", None, None);

		assert!(!under_fifty.matches(&at_limit));
		assert!(under_fifty.matches(&below));
		assert!(from_fifty.matches(&at_limit));
		assert!(Filter::range("price", Some(40.0), Some(50.0)).matches(&below));
		assert!(open.matches(&below));
		assert!(!Filter::range("available", None, None).matches(&below));
	}

	#[test]
	fn inner_filters_look_through_relations() {
		let owned = car(Some("A"), 40.0, true);
		assert!(Filter::inner_kind("owner", "Person").matches(&owned));
		assert!(!Filter::inner_kind("owner", "Company").matches(&owned));
		assert!(!Filter::inner_kind("driver", "Person").matches(&owned));
		assert!(Filter::inner_attribute("owner", "city", "Genk").matches(&owned));
		assert!(!Filter::inner_attribute("owner", "city", "Hasselt").matches(&owned));
	}

	#[test]
	fn conjunction_and_identity_filters() {
		let known = car(Some("A"), 40.0, true);
		let placeholder = car(None, 40.0, true);

		let both = Filter::All(vec![Filter::Identified, Filter::attribute("available", true)]);
		assert!(both.matches(&known));
		assert!(!both.matches(&placeholder));
		assert!(Filter::All(Vec::new()).matches(&placeholder));

		let set = Filter::uids(["A", "C"]);
		assert!(set.matches(&known));
		assert!(!set.matches(&placeholder));
		assert!(Filter::kind("Car").matches(&known));
	}
}

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use hawk_scribe::{Entity, Field, ScribeError, Value};

use crate::klant::Klant;
use crate::parse;
use crate::voertuig::Voertuig;

/// Record shared between collections, resolved once when loading.
pub type Shared<T> = Rc<RefCell<T>>;

pub fn shared<T>(value: T) -> Shared<T> {
	Rc::new(RefCell::new(value))
}

/// Return state of a rented vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingeleverd {
	Nee,
	/// Returned on time.
	Ja,
	/// Returned late, on the given day.
	Op(NaiveDate),
}

#[derive(Debug, Clone)]
pub struct Reservering {
	nummer: String,
	klant: Shared<Klant>,
	voertuig: Shared<Voertuig>,
	van: NaiveDate,
	tot: NaiveDate,
	pub(crate) ingeleverd: Ingeleverd,
}

impl Reservering {
	pub fn new(
		nummer: impl Into<String>,
		klant: Shared<Klant>,
		voertuig: Shared<Voertuig>,
		van: NaiveDate,
		tot: NaiveDate,
	) -> Result<Self, ScribeError> {
		if van > tot {
			return Err(ScribeError::invalid(
				"tot",
				tot.to_string(),
				"end date is before the start date",
			));
		}
		Ok(Self {
			nummer: nummer.into(),
			klant,
			voertuig,
			van,
			tot,
			ingeleverd: Ingeleverd::Nee,
		})
	}

	#[must_use]
	pub fn with_ingeleverd(mut self, ingeleverd: Ingeleverd) -> Self {
		self.ingeleverd = ingeleverd;
		self
	}

	#[must_use]
	pub fn nummer(&self) -> &str {
		&self.nummer
	}

	#[must_use]
	pub fn klant(&self) -> &Shared<Klant> {
		&self.klant
	}

	#[must_use]
	pub fn voertuig(&self) -> &Shared<Voertuig> {
		&self.voertuig
	}

	#[must_use]
	pub fn van(&self) -> NaiveDate {
		self.van
	}

	#[must_use]
	pub fn tot(&self) -> NaiveDate {
		self.tot
	}

	#[must_use]
	pub fn ingeleverd(&self) -> Ingeleverd {
		self.ingeleverd
	}

	#[must_use]
	pub fn is_ingeleverd(&self) -> bool {
		self.ingeleverd != Ingeleverd::Nee
	}

	/// Rental days, both ends included.
	#[must_use]
	pub fn duur(&self) -> i64 {
		(self.tot - self.van).num_days() + 1
	}

	#[must_use]
	pub fn status(&self) -> &'static str {
		if self.is_ingeleverd() { "ingeleverd" } else { "lopend" }
	}

	/// Run `read` against the related record named by `relation`.
	fn with_related<R>(&self, relation: &str, read: impl FnOnce(&dyn Entity) -> R) -> Option<R> {
		match relation {
			"klant" => Some(read(&*self.klant.borrow())),
			"voertuig" => Some(read(&*self.voertuig.borrow())),
			_ => None,
		}
	}
}

impl Entity for Reservering {
	/// Only reservations between identified parties are identified.
	fn uid(&self) -> Option<String> {
		let parties = self.klant.borrow().uid().is_some() && self.voertuig.borrow().uid().is_some();
		(parties && !self.nummer.is_empty()).then(|| self.nummer.clone())
	}

	fn kind(&self) -> &'static str {
		"Reservering"
	}

	fn searchable(&self) -> Vec<Field> {
		let klant = self.klant.borrow();
		let voertuig = self.voertuig.borrow();
		vec![
			Field::new("uid", self.uid().unwrap_or_default()),
			Field::new("klant", klant.naam.clone()),
			Field::new("model", voertuig.model.clone()),
			Field::new("merk", voertuig.merk.clone()),
			Field::new("type", klant.kind()),
			Field::new("status", self.status()),
		]
	}

	fn fields(&self) -> Vec<Field> {
		vec![
			Field::new("van", self.van.to_string()),
			Field::new("tot", self.tot.to_string()),
		]
	}

	fn row(&self) -> Vec<String> {
		let klant = self.klant.borrow();
		let voertuig = self.voertuig.borrow();
		let status = match self.ingeleverd {
			Ingeleverd::Nee => "Lopend",
			Ingeleverd::Ja | Ingeleverd::Op(_) => "Ingeleverd",
		};
		vec![
			self.uid().unwrap_or_else(|| "None".into()),
			klant.naam.clone(),
			voertuig.merk.clone(),
			voertuig.model.clone(),
			self.van.to_string(),
			self.tot.to_string(),
			status.to_string(),
		]
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		let value = match name {
			"van" => self.van.into(),
			"tot" => self.tot.into(),
			"duur" => self.duur().into(),
			"status" => self.status().into(),
			"ingeleverd" => self.is_ingeleverd().into(),
			_ => return None,
		};
		Some(value)
	}

	fn inner_kind(&self, relation: &str) -> Option<&'static str> {
		self.with_related(relation, |entity| entity.kind())
	}

	fn inner_attribute(&self, relation: &str, name: &str) -> Option<Value> {
		self.with_related(relation, |entity| entity.attribute(name)).flatten()
	}

	fn set_attribute(&mut self, name: &str, raw: &str) -> Result<(), ScribeError> {
		match name {
			"van" => {
				let van = parse::date(name, raw)?;
				if van > self.tot {
					return Err(ScribeError::invalid(name, raw, "start date is after the end date"));
				}
				self.van = van;
			}
			"tot" => {
				let tot = parse::date(name, raw)?;
				if tot < self.van {
					return Err(ScribeError::invalid(
						name,
						raw,
						"end date is before the start date",
					));
				}
				self.tot = tot;
			}
			"ingeleverd" => {
				return Err(ScribeError::invalid(
					name,
					raw,
					"vehicles are returned by invoicing the reservation",
				));
			}
			_ => return Err(ScribeError::unknown(name)),
		}
		Ok(())
	}

	fn columns() -> &'static [&'static str] {
		&["Nummer", "Klant", "Merk", "Model", "Van", "Tot", "Status"]
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::ids::{Btw, Vin};
	use crate::klant::Profiel;

	pub(crate) fn day(month: u32, day: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, month, day).unwrap()
	}

	pub(crate) fn klant() -> Shared<Klant> {
		shared(Klant {
			naam: "Claes Logistics".into(),
			profiel: Profiel::Professioneel {
				btwnummer: Btw::parse("0456.789.133").unwrap(),
			},
			..Klant::professioneel()
		})
	}

	pub(crate) fn voertuig() -> Shared<Voertuig> {
		shared(Voertuig {
			chassisnummer: Vin::parse("WBAXX00090A000001").unwrap(),
			merk: "BMW".into(),
			model: "X5".into(),
			dagprijs: 50.0,
			..Voertuig::default()
		})
	}

	pub(crate) fn reservering() -> Reservering {
		Reservering::new("250901-001", klant(), voertuig(), day(9, 1), day(9, 3)).unwrap()
	}

	#[test]
	fn duration_counts_both_ends() {
		assert_eq!(reservering().duur(), 3);
		let single =
			Reservering::new("250901-002", klant(), voertuig(), day(9, 1), day(9, 1)).unwrap();
		assert_eq!(single.duur(), 1);
	}

	#[test]
	fn dates_cannot_cross() {
		assert!(Reservering::new("x", klant(), voertuig(), day(9, 3), day(9, 1)).is_err());

		let mut reservering = reservering();
		assert!(reservering.set_attribute("van", "2025-09-04").is_err());
		assert!(reservering.set_attribute("tot", "2025-08-31").is_err());
		reservering.set_attribute("tot", "2025-09-10").unwrap();
		assert_eq!(reservering.duur(), 10);
	}

	#[test]
	fn returning_is_not_an_edit() {
		let mut reservering = reservering();
		let err = reservering.set_attribute("ingeleverd", "ja").unwrap_err();
		assert!(matches!(err, ScribeError::Validation { .. }));
		assert!(!reservering.is_ingeleverd());
	}

	#[test]
	fn uid_requires_identified_parties() {
		assert_eq!(reservering().uid().as_deref(), Some("250901-001"));
		let anonymous = Reservering::new(
			"250901-003",
			shared(Klant::particulier()),
			voertuig(),
			day(9, 1),
			day(9, 2),
		)
		.unwrap();
		assert_eq!(anonymous.uid(), None);
	}

	#[test]
	fn related_records_are_visible_to_filters() {
		let reservering = reservering();
		assert_eq!(reservering.inner_kind("klant"), Some("Professioneel"));
		assert_eq!(reservering.inner_attribute("voertuig", "merk"), Some(Value::from("BMW")));
		assert_eq!(reservering.inner_kind("factuur"), None);
	}

	#[test]
	fn shared_edits_show_up_in_rows() {
		let reservering = reservering();
		reservering.voertuig().borrow_mut().model = "X3".into();
		assert_eq!(reservering.row()[3], "X3");
		assert_eq!(reservering.row()[6], "Lopend");
	}
}

use chrono::NaiveDate;
use hawk_scribe::{Entity, Field, ScribeError, Value};

use crate::parse;
use crate::reservering::{Ingeleverd, Reservering, Shared};

/// Late days are charged at this multiple of the daily price.
const LATE_FACTOR: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct Factuur {
	reservering: Shared<Reservering>,
	pub bedrag: f64,
}

impl Factuur {
	/// Invoice as stored, without touching the reservation.
	#[must_use]
	pub fn new(reservering: Shared<Reservering>, bedrag: f64) -> Self {
		Self { reservering, bedrag }
	}

	/// Close `reservering` and bill it.
	///
	/// Charges the daily price for every reserved day, plus twice the daily
	/// price for every day the vehicle comes back after `tot`. The vehicle is
	/// available again afterwards.
	pub fn finalize(
		reservering: Shared<Reservering>,
		inleverdatum: Option<NaiveDate>,
	) -> Result<Self, ScribeError> {
		let bedrag = {
			let mut open = reservering.borrow_mut();
			if open.is_ingeleverd() {
				return Err(ScribeError::invalid(
					"reservering",
					open.nummer(),
					"this reservation was already returned",
				));
			}

			let dagprijs = {
				let mut voertuig = open.voertuig().borrow_mut();
				voertuig.beschikbaar = true;
				voertuig.dagprijs
			};
			let mut bedrag = dagprijs * open.duur() as f64;
			open.ingeleverd = match inleverdatum {
				Some(day) if day > open.tot() => {
					let late = (day - open.tot()).num_days();
					bedrag += dagprijs * late as f64 * LATE_FACTOR;
					Ingeleverd::Op(day)
				}
				_ => Ingeleverd::Ja,
			};
			bedrag
		};
		Ok(Self { reservering, bedrag })
	}

	#[must_use]
	pub fn reservering(&self) -> &Shared<Reservering> {
		&self.reservering
	}

	#[must_use]
	pub fn duur(&self) -> i64 {
		self.reservering.borrow().duur()
	}
}

impl Entity for Factuur {
	fn uid(&self) -> Option<String> {
		let nummer = self.reservering.borrow().nummer().to_string();
		(!nummer.is_empty()).then_some(nummer)
	}

	fn kind(&self) -> &'static str {
		"Factuur"
	}

	fn searchable(&self) -> Vec<Field> {
		let reservering = self.reservering.borrow();
		let klant = reservering.klant().borrow();
		vec![
			Field::new("uid", self.uid().unwrap_or_default()),
			Field::new("klant", klant.naam.clone()),
			Field::new("type", klant.kind()),
			Field::new("voertuig", reservering.voertuig().borrow().label()),
			Field::new("duur", reservering.duur().to_string()),
		]
	}

	fn fields(&self) -> Vec<Field> {
		vec![Field::new("bedrag", format!("{:.2}", self.bedrag))]
	}

	fn row(&self) -> Vec<String> {
		let reservering = self.reservering.borrow();
		vec![
			self.uid().unwrap_or_else(|| "None".into()),
			reservering.klant().borrow().naam.clone(),
			reservering.voertuig().borrow().label(),
			format!("{:.2}", self.bedrag),
		]
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		match name {
			"bedrag" => Some(self.bedrag.into()),
			"duur" => Some(self.duur().into()),
			_ => None,
		}
	}

	fn inner_kind(&self, relation: &str) -> Option<&'static str> {
		match relation {
			"reservering" => Some("Reservering"),
			_ => self.reservering.borrow().inner_kind(relation),
		}
	}

	fn inner_attribute(&self, relation: &str, name: &str) -> Option<Value> {
		let reservering = self.reservering.borrow();
		match relation {
			"reservering" => reservering.attribute(name),
			_ => reservering.inner_attribute(relation, name),
		}
	}

	fn set_attribute(&mut self, name: &str, raw: &str) -> Result<(), ScribeError> {
		match name {
			"bedrag" => self.bedrag = parse::amount(name, raw)?,
			_ => return Err(ScribeError::unknown(name)),
		}
		Ok(())
	}

	fn columns() -> &'static [&'static str] {
		&["Nummer", "Klant", "Voertuig", "Bedrag"]
	}
}

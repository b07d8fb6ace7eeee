use std::fmt;

use chrono::NaiveDate;
use hawk_scribe::{Entity, Field, ScribeError, Value};

use crate::ids::{Btw, Rrn};
use crate::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
	Man,
	Vrouw,
}

impl Gender {
	#[must_use]
	pub fn code(self) -> &'static str {
		match self {
			Self::Man => "M",
			Self::Vrouw => "V",
		}
	}

	pub fn parse(raw: &str) -> Result<Self, ScribeError> {
		match raw.trim().to_lowercase().as_str() {
			"m" | "man" | "male" => Ok(Self::Man),
			"v" | "vrouw" | "female" => Ok(Self::Vrouw),
			_ => Err(ScribeError::invalid("geslacht", raw, "expected M or V")),
		}
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Man => "Man",
			Self::Vrouw => "Vrouw",
		})
	}
}

/// What distinguishes a private customer from a company.
#[derive(Debug, Clone, PartialEq)]
pub enum Profiel {
	Particulier {
		geboortedatum: NaiveDate,
		geslacht: Gender,
		rijksregisternummer: Rrn,
	},
	Professioneel {
		btwnummer: Btw,
	},
}

#[derive(Debug, Clone, PartialEq)]
pub struct Klant {
	pub naam: String,
	pub straat: String,
	pub huisnummer: u32,
	pub postcode: u32,
	pub gemeente: String,
	pub profiel: Profiel,
}

impl Klant {
	/// Empty private customer with a placeholder national number.
	#[must_use]
	pub fn particulier() -> Self {
		Self::blank(Profiel::Particulier {
			geboortedatum: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default(),
			geslacht: Gender::Man,
			rijksregisternummer: Rrn::placeholder(),
		})
	}

	/// Empty company customer with a placeholder VAT number.
	#[must_use]
	pub fn professioneel() -> Self {
		Self::blank(Profiel::Professioneel {
			btwnummer: Btw::placeholder(),
		})
	}

	fn blank(profiel: Profiel) -> Self {
		Self {
			naam: String::new(),
			straat: String::new(),
			huisnummer: 0,
			postcode: 0,
			gemeente: String::new(),
			profiel,
		}
	}

	#[must_use]
	pub fn is_professioneel(&self) -> bool {
		matches!(self.profiel, Profiel::Professioneel { .. })
	}

	fn identifier(&self) -> &str {
		match &self.profiel {
			Profiel::Particulier {
				rijksregisternummer,
				..
			} => rijksregisternummer.as_str(),
			Profiel::Professioneel { btwnummer } => btwnummer.as_str(),
		}
	}
}

fn nonzero(value: u32) -> String {
	if value == 0 {
		String::new()
	} else {
		value.to_string()
	}
}

impl Entity for Klant {
	fn uid(&self) -> Option<String> {
		let placeholder = match &self.profiel {
			Profiel::Particulier {
				rijksregisternummer,
				..
			} => rijksregisternummer.is_placeholder(),
			Profiel::Professioneel { btwnummer } => btwnummer.is_placeholder(),
		};
		(!placeholder).then(|| self.identifier().to_string())
	}

	fn kind(&self) -> &'static str {
		match self.profiel {
			Profiel::Particulier { .. } => "Particulier",
			Profiel::Professioneel { .. } => "Professioneel",
		}
	}

	fn searchable(&self) -> Vec<Field> {
		vec![
			Field::new("uid", self.uid().unwrap_or_default()),
			Field::new("naam", self.naam.clone()),
			Field::new("postcode", nonzero(self.postcode)),
			Field::new("gemeente", self.gemeente.clone()),
			Field::new("type", self.kind()),
		]
	}

	fn fields(&self) -> Vec<Field> {
		let mut fields = vec![
			Field::new("naam", self.naam.clone()),
			Field::new("straat", self.straat.clone()),
			Field::new("huisnummer", self.huisnummer.to_string()),
			Field::new("postcode", self.postcode.to_string()),
			Field::new("gemeente", self.gemeente.clone()),
		];
		match &self.profiel {
			Profiel::Particulier {
				geboortedatum,
				geslacht,
				rijksregisternummer,
			} => fields.extend([
				Field::new("geboortedatum", geboortedatum.to_string()),
				Field::new("geslacht", geslacht.code()),
				Field::new("rijksregisternummer", rijksregisternummer.to_string()),
			]),
			Profiel::Professioneel { btwnummer } => {
				fields.push(Field::new("btwnummer", btwnummer.to_string()));
			}
		}
		fields
	}

	fn row(&self) -> Vec<String> {
		vec![
			self.uid().unwrap_or_else(|| "None".into()),
			self.naam.clone(),
			self.straat.clone(),
			self.huisnummer.to_string(),
			self.postcode.to_string(),
			self.gemeente.clone(),
		]
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		let value = match (name, &self.profiel) {
			("naam", _) => self.naam.clone().into(),
			("straat", _) => self.straat.clone().into(),
			("gemeente", _) => self.gemeente.clone().into(),
			("huisnummer", _) => self.huisnummer.into(),
			("postcode", _) => self.postcode.into(),
			("type", _) => self.kind().into(),
			("geboortedatum", Profiel::Particulier { geboortedatum, .. }) => {
				(*geboortedatum).into()
			}
			("geslacht", Profiel::Particulier { geslacht, .. }) => geslacht.code().into(),
			_ => return None,
		};
		Some(value)
	}

	fn set_attribute(&mut self, name: &str, raw: &str) -> Result<(), ScribeError> {
		match (name, &mut self.profiel) {
			("naam", _) => self.naam = parse::text(name, raw)?,
			("straat", _) => self.straat = parse::text(name, raw)?,
			("gemeente", _) => self.gemeente = parse::text(name, raw)?,
			("huisnummer", _) => self.huisnummer = parse::number(name, raw)?,
			("postcode", _) => {
				let postcode: u32 = parse::number(name, raw)?;
				if !(1000..=9999).contains(&postcode) {
					return Err(ScribeError::invalid(name, raw, "expected four digits"));
				}
				self.postcode = postcode;
			}
			("geboortedatum", Profiel::Particulier { geboortedatum, .. }) => {
				*geboortedatum = parse::date(name, raw)?;
			}
			("geslacht", Profiel::Particulier { geslacht, .. }) => *geslacht = Gender::parse(raw)?,
			(
				"rijksregisternummer",
				Profiel::Particulier {
					rijksregisternummer,
					..
				},
			) => *rijksregisternummer = Rrn::parse(raw)?,
			("btwnummer", Profiel::Professioneel { btwnummer }) => *btwnummer = Btw::parse(raw)?,
			_ => return Err(ScribeError::unknown(name)),
		}
		Ok(())
	}

	fn columns() -> &'static [&'static str] {
		&["BTW/RRN", "Naam", "Straat", "Huisnummer", "Postcode", "Gemeente"]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bakkerij() -> Klant {
		Klant {
			naam: "Bakkerij Claes".into(),
			straat: "Industrieweg".into(),
			huisnummer: 12,
			postcode: 3600,
			gemeente: "Genk".into(),
			profiel: Profiel::Professioneel {
				btwnummer: Btw::parse("0123.456.749").unwrap(),
			},
		}
	}

	#[test]
	fn placeholders_have_no_uid() {
		assert_eq!(Klant::particulier().uid(), None);
		assert_eq!(Klant::professioneel().uid(), None);
		assert_eq!(Klant::particulier().row()[0], "None");
		assert_eq!(bakkerij().uid().as_deref(), Some("0123.456.749"));
	}

	#[test]
	fn searchable_strings_follow_the_customer() {
		let values: Vec<String> = bakkerij()
			.searchable()
			.into_iter()
			.map(|field| field.value)
			.collect();
		assert_eq!(values, ["0123.456.749", "Bakkerij Claes", "3600", "Genk", "Professioneel"]);
	}

	#[test]
	fn fields_round_trip_through_set_attribute() {
		let mut klant = Klant::particulier();
		klant.set_attribute("geboortedatum", "1985-07-30").unwrap();
		klant.set_attribute("geslacht", "vrouw").unwrap();
		klant.set_attribute("postcode", "3500").unwrap();

		let mut copy = Klant::particulier();
		for field in klant.fields() {
			copy.set_attribute(field.name, &field.value).unwrap();
		}
		assert_eq!(copy, klant);
	}

	#[test]
	fn invalid_values_leave_the_customer_untouched() {
		let mut klant = bakkerij();
		assert!(klant.set_attribute("btwnummer", "0123.456.700").is_err());
		assert!(klant.set_attribute("postcode", "36").is_err());
		assert_eq!(
			klant.set_attribute("geslacht", "M").unwrap_err(),
			ScribeError::unknown("geslacht")
		);
		assert_eq!(klant, bakkerij());
	}

	#[test]
	fn gender_accepts_synonyms() {
		assert_eq!(Gender::parse("Male").unwrap(), Gender::Man);
		assert_eq!(Gender::parse(" v ").unwrap(), Gender::Vrouw);
		assert!(Gender::parse("x").is_err());
		assert_eq!(Gender::Vrouw.to_string(), "Vrouw");
	}
}

use std::fmt;

use chrono::{Datelike, Local};
use hawk_scribe::{Entity, Field, ScribeError, Value};

use crate::ids::Vin;
use crate::parse;

pub const DEFAULT_DAGPRIJS: f64 = 35.99;

/// European vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Categorie {
	M1,
	M2,
	M3,
	N1,
	N2,
	N3,
}

impl Categorie {
	pub const ALL: [Self; 6] = [Self::M1, Self::M2, Self::M3, Self::N1, Self::N2, Self::N3];

	#[must_use]
	pub fn code(self) -> &'static str {
		match self {
			Self::M1 => "M1",
			Self::M2 => "M2",
			Self::M3 => "M3",
			Self::N1 => "N1",
			Self::N2 => "N2",
			Self::N3 => "N3",
		}
	}

	#[must_use]
	pub fn description(self) -> &'static str {
		match self {
			Self::M1 => "Personenwagen",
			Self::M2 => "Minibus",
			Self::M3 => "Bus",
			Self::N1 => "Bestelbus",
			Self::N2 => "Bakwagen",
			Self::N3 => "Vrachtwagen",
		}
	}

	/// Parse a code (`M1`) or a name (`Personenwagen`, `Combi`).
	pub fn parse(raw: &str) -> Result<Self, ScribeError> {
		let data = raw.trim();
		if let Some(categorie) = Self::ALL
			.into_iter()
			.find(|categorie| {
				categorie.code().eq_ignore_ascii_case(data)
					|| categorie.description().eq_ignore_ascii_case(data)
			})
		{
			return Ok(categorie);
		}
		match data.to_lowercase().as_str() {
			"personenauto" | "auto" => Ok(Self::M1),
			"bestelwagen" | "bestelbusje" | "combi" => Ok(Self::N1),
			_ => Err(ScribeError::invalid("categorie", raw, "unknown vehicle category")),
		}
	}
}

impl fmt::Display for Categorie {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.description())
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Voertuig {
	pub chassisnummer: Vin,
	pub merk: String,
	pub model: String,
	pub bouwjaar: i32,
	pub categorie: Categorie,
	pub beschikbaar: bool,
	pub dagprijs: f64,
}

impl Default for Voertuig {
	fn default() -> Self {
		Self {
			chassisnummer: Vin::placeholder(),
			merk: String::new(),
			model: String::new(),
			bouwjaar: Local::now().year(),
			categorie: Categorie::M1,
			beschikbaar: true,
			dagprijs: DEFAULT_DAGPRIJS,
		}
	}
}

impl Voertuig {
	#[must_use]
	pub fn status(&self) -> &'static str {
		if self.beschikbaar { "beschikbaar" } else { "gereserveerd" }
	}

	/// Brand and model, as shown on invoices.
	#[must_use]
	pub fn label(&self) -> String {
		format!("{} {}", self.merk, self.model).trim().to_string()
	}
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	chars
		.next()
		.map(|first| first.to_uppercase().chain(chars).collect())
		.unwrap_or_default()
}

impl Entity for Voertuig {
	fn uid(&self) -> Option<String> {
		(!self.chassisnummer.is_placeholder()).then(|| self.chassisnummer.to_string())
	}

	fn kind(&self) -> &'static str {
		"Voertuig"
	}

	fn searchable(&self) -> Vec<Field> {
		vec![
			Field::new("chassisnummer", self.uid().unwrap_or_default()),
			Field::new("merk", self.merk.clone()),
			Field::new("model", self.model.clone()),
			Field::new("bouwjaar", self.bouwjaar.to_string()),
			Field::new("categorie", self.categorie.description()),
			Field::new("status", self.status()),
		]
	}

	fn fields(&self) -> Vec<Field> {
		vec![
			Field::new("chassisnummer", self.chassisnummer.to_string()),
			Field::new("merk", self.merk.clone()),
			Field::new("model", self.model.clone()),
			Field::new("bouwjaar", self.bouwjaar.to_string()),
			Field::new("categorie", self.categorie.code()),
			Field::new("dagprijs", format!("{:.2}", self.dagprijs)),
			Field::new("beschikbaar", if self.beschikbaar { "ja" } else { "nee" }),
		]
	}

	fn row(&self) -> Vec<String> {
		vec![
			self.uid().unwrap_or_else(|| "None".into()),
			self.merk.clone(),
			self.model.clone(),
			self.bouwjaar.to_string(),
			format!("€{:.2}", self.dagprijs),
			capitalize(self.status()),
		]
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		let value = match name {
			"merk" => self.merk.clone().into(),
			"model" => self.model.clone().into(),
			"bouwjaar" => i64::from(self.bouwjaar).into(),
			"categorie" => self.categorie.code().into(),
			"beschikbaar" => self.beschikbaar.into(),
			"dagprijs" => self.dagprijs.into(),
			"status" => self.status().into(),
			_ => return None,
		};
		Some(value)
	}

	fn set_attribute(&mut self, name: &str, raw: &str) -> Result<(), ScribeError> {
		match name {
			"chassisnummer" => self.chassisnummer = Vin::parse(raw)?,
			"merk" => self.merk = parse::text(name, raw)?,
			"model" => self.model = parse::text(name, raw)?,
			"bouwjaar" => {
				let year: i32 = parse::number(name, raw)?;
				if !(1886..=9999).contains(&year) {
					return Err(ScribeError::invalid(name, raw, "expected a year after 1885"));
				}
				self.bouwjaar = year;
			}
			"categorie" => self.categorie = Categorie::parse(raw)?,
			"dagprijs" => self.dagprijs = parse::amount(name, raw)?,
			"beschikbaar" => self.beschikbaar = parse::flag(name, raw)?,
			_ => return Err(ScribeError::unknown(name)),
		}
		Ok(())
	}

	fn columns() -> &'static [&'static str] {
		&["VIN", "Merk", "Model", "Bouwjaar", "Prijs", "Status"]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn golf() -> Voertuig {
		Voertuig {
			chassisnummer: Vin::parse("WVWZZZ1J93W386752").unwrap(),
			merk: "Volkswagen".into(),
			model: "Golf".into(),
			bouwjaar: 2019,
			categorie: Categorie::M1,
			..Voertuig::default()
		}
	}

	#[test]
	fn rows_format_price_and_status() {
		let mut car = golf();
		car.beschikbaar = false;
		assert_eq!(
			car.row(),
			["WVWZZZ1J93W386752", "Volkswagen", "Golf", "2019", "€35.99", "Gereserveerd"]
		);
	}

	#[test]
	fn categories_parse_codes_names_and_synonyms() {
		assert_eq!(Categorie::parse("n1").unwrap(), Categorie::N1);
		assert_eq!(Categorie::parse("Vrachtwagen").unwrap(), Categorie::N3);
		assert_eq!(Categorie::parse("combi").unwrap(), Categorie::N1);
		assert_eq!(Categorie::parse("Auto").unwrap(), Categorie::M1);
		assert!(Categorie::parse("fiets").is_err());
	}

	#[test]
	fn searchable_strings_use_descriptions() {
		let values: Vec<String> =
			golf().searchable().into_iter().map(|field| field.value).collect();
		assert_eq!(
			values,
			["WVWZZZ1J93W386752", "Volkswagen", "Golf", "2019", "Personenwagen", "beschikbaar"]
		);
	}

	#[test]
	fn updates_validate_each_field() {
		let mut car = golf();
		car.set_attribute("dagprijs", "49.50").unwrap();
		car.set_attribute("beschikbaar", "nee").unwrap();
		car.set_attribute("categorie", "Bestelbus").unwrap();
		assert_eq!(car.dagprijs, 49.5);
		assert!(!car.beschikbaar);
		assert_eq!(car.categorie, Categorie::N1);

		let before = car.clone();
		assert!(car.set_attribute("chassisnummer", "WVWZZZ1J93W386753").is_err());
		assert!(car.set_attribute("bouwjaar", "19").is_err());
		assert!(car.set_attribute("kleur", "rood").is_err());
		assert_eq!(car, before);
	}

	#[test]
	fn placeholder_vehicles_are_unidentified() {
		let car = Voertuig::default();
		assert_eq!(car.uid(), None);
		assert_eq!(car.attribute("dagprijs"), Some(Value::Number(DEFAULT_DAGPRIJS)));
	}
}

//! Serialized form of the record file.
//!
//! Records reference each other by uid here; [`crate::Records`] resolves the
//! references when hydrating and writes them back when saving.

use chrono::NaiveDate;
use hawk_scribe::{Entity, ScribeError};
use serde::{Deserialize, Deserializer, Serialize};

use crate::factuur::Factuur;
use crate::ids::{Btw, Rrn, Vin};
use crate::klant::{Gender, Klant, Profiel};
use crate::reservering::{Ingeleverd, Reservering};
use crate::voertuig::{Categorie, DEFAULT_DAGPRIJS, Voertuig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
	pub particulier: Vec<ParticulierRecord>,
	pub professioneel: Vec<ProfessioneelRecord>,
	pub voertuigen: Vec<VoertuigRecord>,
	pub reserveringen: Vec<ReserveringRecord>,
	pub facturen: Vec<FactuurRecord>,
}

impl Document {
	pub fn from_json(text: &str) -> serde_json::Result<Self> {
		serde_json::from_str(text)
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.particulier.is_empty()
			&& self.professioneel.is_empty()
			&& self.voertuigen.is_empty()
			&& self.reserveringen.is_empty()
			&& self.facturen.is_empty()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticulierRecord {
	pub naam: String,
	pub straat: String,
	pub huisnummer: u32,
	pub postcode: u32,
	pub gemeente: String,
	pub geboortedatum: NaiveDate,
	pub geslacht: String,
	pub rijksregisternummer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessioneelRecord {
	pub naam: String,
	pub straat: String,
	pub huisnummer: u32,
	pub postcode: u32,
	pub gemeente: String,
	pub btwnummer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoertuigRecord {
	pub chassisnummer: String,
	#[serde(default)]
	pub merk: String,
	#[serde(default)]
	pub model: String,
	#[serde(deserialize_with = "year_text")]
	pub bouwjaar: String,
	#[serde(default = "default_categorie")]
	pub categorie: String,
	#[serde(default = "available")]
	pub beschikbaar: bool,
	#[serde(default = "default_dagprijs")]
	pub dagprijs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReserveringRecord {
	pub nummer: String,
	pub klant: String,
	pub voertuig: String,
	pub van: NaiveDate,
	pub tot: NaiveDate,
	#[serde(default)]
	pub ingeleverd: Returned,
}

/// Stored return state: a flag, or the day of a late return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Returned {
	Flag(bool),
	Date(NaiveDate),
}

impl Default for Returned {
	fn default() -> Self {
		Self::Flag(false)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactuurRecord {
	pub reservering: String,
	pub bedrag: f64,
}

fn default_categorie() -> String {
	Categorie::M1.code().to_string()
}

fn available() -> bool {
	true
}

fn default_dagprijs() -> f64 {
	DEFAULT_DAGPRIJS
}

/// Build years were written both as numbers and as strings.
fn year_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Year {
		Number(i64),
		Text(String),
	}

	Ok(match Year::deserialize(deserializer)? {
		Year::Number(year) => year.to_string(),
		Year::Text(text) => text,
	})
}

impl TryFrom<ParticulierRecord> for Klant {
	type Error = ScribeError;

	fn try_from(record: ParticulierRecord) -> Result<Self, Self::Error> {
		Ok(Self {
			naam: record.naam,
			straat: record.straat,
			huisnummer: record.huisnummer,
			postcode: record.postcode,
			gemeente: record.gemeente,
			profiel: Profiel::Particulier {
				geboortedatum: record.geboortedatum,
				geslacht: Gender::parse(&record.geslacht)?,
				rijksregisternummer: Rrn::parse(&record.rijksregisternummer)?,
			},
		})
	}
}

impl TryFrom<ProfessioneelRecord> for Klant {
	type Error = ScribeError;

	fn try_from(record: ProfessioneelRecord) -> Result<Self, Self::Error> {
		Ok(Self {
			naam: record.naam,
			straat: record.straat,
			huisnummer: record.huisnummer,
			postcode: record.postcode,
			gemeente: record.gemeente,
			profiel: Profiel::Professioneel {
				btwnummer: Btw::parse(&record.btwnummer)?,
			},
		})
	}
}

impl TryFrom<VoertuigRecord> for Voertuig {
	type Error = ScribeError;

	fn try_from(record: VoertuigRecord) -> Result<Self, Self::Error> {
		let mut voertuig = Self {
			chassisnummer: Vin::parse(&record.chassisnummer)?,
			merk: record.merk,
			model: record.model,
			categorie: Categorie::parse(&record.categorie)?,
			beschikbaar: record.beschikbaar,
			dagprijs: record.dagprijs,
			..Self::default()
		};
		voertuig.set_attribute("bouwjaar", &record.bouwjaar)?;
		Ok(voertuig)
	}
}

/// Customer as stored, split by profile.
pub enum KlantRecord {
	Particulier(ParticulierRecord),
	Professioneel(ProfessioneelRecord),
}

impl From<&Klant> for KlantRecord {
	fn from(klant: &Klant) -> Self {
		match &klant.profiel {
			Profiel::Particulier {
				geboortedatum,
				geslacht,
				rijksregisternummer,
			} => Self::Particulier(ParticulierRecord {
				naam: klant.naam.clone(),
				straat: klant.straat.clone(),
				huisnummer: klant.huisnummer,
				postcode: klant.postcode,
				gemeente: klant.gemeente.clone(),
				geboortedatum: *geboortedatum,
				geslacht: geslacht.code().to_string(),
				rijksregisternummer: rijksregisternummer.to_string(),
			}),
			Profiel::Professioneel { btwnummer } => Self::Professioneel(ProfessioneelRecord {
				naam: klant.naam.clone(),
				straat: klant.straat.clone(),
				huisnummer: klant.huisnummer,
				postcode: klant.postcode,
				gemeente: klant.gemeente.clone(),
				btwnummer: btwnummer.to_string(),
			}),
		}
	}
}

impl From<&Voertuig> for VoertuigRecord {
	fn from(voertuig: &Voertuig) -> Self {
		Self {
			chassisnummer: voertuig.chassisnummer.to_string(),
			merk: voertuig.merk.clone(),
			model: voertuig.model.clone(),
			bouwjaar: voertuig.bouwjaar.to_string(),
			categorie: voertuig.categorie.code().to_string(),
			beschikbaar: voertuig.beschikbaar,
			dagprijs: voertuig.dagprijs,
		}
	}
}

impl From<&Reservering> for ReserveringRecord {
	fn from(reservering: &Reservering) -> Self {
		Self {
			nummer: reservering.nummer().to_string(),
			klant: reservering.klant().borrow().uid().unwrap_or_default(),
			voertuig: reservering.voertuig().borrow().uid().unwrap_or_default(),
			van: reservering.van(),
			tot: reservering.tot(),
			ingeleverd: reservering.ingeleverd().into(),
		}
	}
}

impl From<&Factuur> for FactuurRecord {
	fn from(factuur: &Factuur) -> Self {
		Self {
			reservering: factuur.reservering().borrow().nummer().to_string(),
			bedrag: factuur.bedrag,
		}
	}
}

impl From<Ingeleverd> for Returned {
	fn from(state: Ingeleverd) -> Self {
		match state {
			Ingeleverd::Nee => Self::Flag(false),
			Ingeleverd::Ja => Self::Flag(true),
			Ingeleverd::Op(day) => Self::Date(day),
		}
	}
}

impl From<Returned> for Ingeleverd {
	fn from(state: Returned) -> Self {
		match state {
			Returned::Flag(false) => Self::Nee,
			Returned::Flag(true) => Self::Ja,
			Returned::Date(day) => Self::Op(day),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"{
		"particulier": [{
			"naam": "Jan Peeters", "straat": "Dorpsstraat", "huisnummer": 12,
			"postcode": 3500, "gemeente": "Hasselt", "geboortedatum": "1985-07-30",
			"geslacht": "M", "rijksregisternummer": "85.07.30-033.28"
		}],
		"voertuigen": [{
			"chassisnummer": "WBAXX00090A000001", "merk": "BMW", "model": "X5",
			"bouwjaar": 2019, "categorie": "M1"
		}],
		"reserveringen": [{
			"nummer": "250901-001", "klant": "85.07.30-033.28",
			"voertuig": "WBAXX00090A000001", "van": "2025-09-01", "tot": "2025-09-03",
			"ingeleverd": "2025-09-05"
		}]
	}"#;

	#[test]
	fn missing_sections_and_fields_take_defaults() {
		let document = Document::from_json(SAMPLE).unwrap();
		assert!(document.professioneel.is_empty());
		assert!(document.facturen.is_empty());

		let voertuig = &document.voertuigen[0];
		assert_eq!(voertuig.bouwjaar, "2019");
		assert!(voertuig.beschikbaar);
		assert_eq!(voertuig.dagprijs, DEFAULT_DAGPRIJS);
		assert_eq!(
			document.reserveringen[0].ingeleverd,
			Returned::Date(NaiveDate::from_ymd_opt(2025, 9, 5).unwrap())
		);
	}

	#[test]
	fn return_state_accepts_flags_and_dates() {
		let flag: Returned = serde_json::from_str("true").unwrap();
		assert_eq!(Ingeleverd::from(flag), Ingeleverd::Ja);
		assert_eq!(serde_json::to_string(&Returned::from(Ingeleverd::Nee)).unwrap(), "false");
	}

	#[test]
	fn records_convert_to_entities_with_validation() {
		let document = Document::from_json(SAMPLE).unwrap();
		let klant = Klant::try_from(document.particulier[0].clone()).unwrap();
		assert_eq!(klant.uid().as_deref(), Some("85.07.30-033.28"));

		let mut broken = document.voertuigen[0].clone();
		broken.chassisnummer = "WBAXX00010A000001".into();
		assert!(Voertuig::try_from(broken).is_err());
	}

	#[test]
	fn entities_convert_back_to_records() {
		let document = Document::from_json(SAMPLE).unwrap();
		let voertuig = Voertuig::try_from(document.voertuigen[0].clone()).unwrap();
		assert_eq!(VoertuigRecord::from(&voertuig), document.voertuigen[0]);
	}
}

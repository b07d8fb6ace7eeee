use std::fmt;
use std::str::FromStr;

use hawk_scribe::Filter;
use thiserror::Error;

/// One of the four record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	Klanten,
	Voertuigen,
	Reserveringen,
	Facturen,
}

/// Named filter offered for a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
	pub label: &'static str,
	pub filter: Option<Filter>,
}

impl Preset {
	fn new(label: &'static str, filter: Filter) -> Self {
		Self {
			label,
			filter: Some(filter),
		}
	}

	fn everything() -> Self {
		Self {
			label: "Alle",
			filter: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown collection `{0}` (expected klanten, voertuigen, reserveringen or facturen)")]
pub struct UnknownKind(pub String);

impl Kind {
	pub const ALL: [Self; 4] = [
		Self::Klanten,
		Self::Voertuigen,
		Self::Reserveringen,
		Self::Facturen,
	];

	/// Lowercase name used in configuration and on the command line.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::Klanten => "klanten",
			Self::Voertuigen => "voertuigen",
			Self::Reserveringen => "reserveringen",
			Self::Facturen => "facturen",
		}
	}

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Self::Klanten => "Klanten",
			Self::Voertuigen => "Voertuigen",
			Self::Reserveringen => "Reserveringen",
			Self::Facturen => "Facturen",
		}
	}

	/// Filters the browser cycles through, the unfiltered view first.
	#[must_use]
	pub fn presets(self) -> Vec<Preset> {
		let mut presets = vec![Preset::everything()];
		presets.extend(match self {
			Self::Klanten => vec![
				Preset::new("Particulier", Filter::kind("Particulier")),
				Preset::new("Professioneel", Filter::kind("Professioneel")),
			],
			Self::Voertuigen => vec![
				Preset::new("Beschikbaar", Filter::attribute("beschikbaar", true)),
				Preset::new("Gereserveerd", Filter::attribute("beschikbaar", false)),
				Preset::new("Onder €50", Filter::range("dagprijs", None, Some(50.0))),
			],
			Self::Reserveringen => vec![
				Preset::new("Lopend", Filter::attribute("ingeleverd", false)),
				Preset::new("Ingeleverd", Filter::attribute("ingeleverd", true)),
				Preset::new("Professioneel", Filter::inner_kind("klant", "Professioneel")),
			],
			Self::Facturen => vec![
				Preset::new("Particulier", Filter::inner_kind("klant", "Particulier")),
				Preset::new("Professioneel", Filter::inner_kind("klant", "Professioneel")),
			],
		});
		presets
	}

	/// Record variants that can be created empty and edited in place.
	///
	/// Reservations come from picking a customer and a vehicle, invoices from
	/// returning a reservation.
	#[must_use]
	pub fn variants(self) -> &'static [&'static str] {
		match self {
			Self::Klanten => &["Particulier", "Professioneel"],
			Self::Voertuigen => &["Voertuig"],
			Self::Reserveringen | Self::Facturen => &[],
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Kind {
	type Err = UnknownKind;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		Self::ALL
			.into_iter()
			.find(|kind| kind.name().eq_ignore_ascii_case(value))
			.ok_or_else(|| UnknownKind(value.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_parse_case_insensitively() {
		assert_eq!("Voertuigen".parse::<Kind>().unwrap(), Kind::Voertuigen);
		assert_eq!(" facturen ".parse::<Kind>().unwrap(), Kind::Facturen);
		assert_eq!("fietsen".parse::<Kind>().unwrap_err(), UnknownKind("fietsen".into()));
	}

	#[test]
	fn every_kind_starts_unfiltered() {
		for kind in Kind::ALL {
			let presets = kind.presets();
			assert_eq!(presets[0].filter, None, "{kind}");
			assert!(presets.len() > 1);
		}
	}
}

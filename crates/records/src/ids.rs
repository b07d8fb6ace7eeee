//! Checksummed Belgian and vehicle identifiers.
//!
//! Each identifier validates on parse and keeps its canonical text. The
//! all-zero placeholder of each kind parses too, but never counts as an
//! identity: records carrying it report no uid until a real value is set.

use std::fmt;

use chrono::{Datelike, Local};
use hawk_scribe::ScribeError;

/// Belgian national register number, `YY.MM.DD-SSS.CC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rrn(String);

/// Belgian VAT number, `DDDD.DDD.DDD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Btw(String);

/// Vehicle identification number with its position-9 check character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vin(String);

impl Rrn {
	pub const PLACEHOLDER: &'static str = "00.00.00-000.29";
	const FIELD: &'static str = "rijksregisternummer";

	pub fn parse(raw: &str) -> Result<Self, ScribeError> {
		Self::parse_in(raw, Local::now().year())
	}

	/// Parse against an explicit current year, which decides the century.
	pub fn parse_in(raw: &str, year: i32) -> Result<Self, ScribeError> {
		let data = raw.trim();
		if data == Self::PLACEHOLDER {
			return Ok(Self::placeholder());
		}
		let invalid = |reason: &str| ScribeError::invalid(Self::FIELD, raw, reason);

		let bytes = data.as_bytes();
		if bytes.len() != 15 {
			return Err(invalid("expected 15 characters (YY.MM.DD-SSS.CC)"));
		}
		let separators_ok = bytes[2] == b'.'
			&& bytes[5] == b'.'
			&& bytes[8] == b'-'
			&& bytes[12] == b'.';
		let digits: String = data.chars().filter(char::is_ascii_digit).collect();
		if !separators_ok || digits.len() != 11 {
			return Err(invalid("expected the layout YY.MM.DD-SSS.CC"));
		}

		let born: u64 = digits[..2].parse().map_err(|_| invalid("bad birth year"))?;
		let base: u64 = digits[..9].parse().map_err(|_| invalid("bad serial"))?;
		let century = u64::from(born <= u64::from((year % 100).unsigned_abs()));
		let number = century * 1_000_000_000 + base;
		if format!("{:02}", 97 - number % 97) != digits[9..] {
			return Err(invalid("checksum mismatch"));
		}
		Ok(Self(data.to_string()))
	}

	#[must_use]
	pub fn placeholder() -> Self {
		Self(Self::PLACEHOLDER.to_string())
	}

	#[must_use]
	pub fn is_placeholder(&self) -> bool {
		self.0 == Self::PLACEHOLDER
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Btw {
	pub const PLACEHOLDER: &'static str = "00000.000.000";
	const FIELD: &'static str = "btwnummer";

	pub fn parse(raw: &str) -> Result<Self, ScribeError> {
		let data = raw.trim();
		if data == Self::PLACEHOLDER {
			return Ok(Self::placeholder());
		}
		let invalid = |reason: &str| ScribeError::invalid(Self::FIELD, raw, reason);

		let bytes = data.as_bytes();
		if bytes.len() != 12 || bytes[4] != b'.' || bytes[8] != b'.' {
			return Err(invalid("expected the layout DDDD.DDD.DDD"));
		}
		let digits: String = data.chars().filter(|ch| *ch != '.').collect();
		if digits.len() != 10 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
			return Err(invalid("expected ten digits"));
		}

		let number: u64 = digits[..8].parse().map_err(|_| invalid("bad number"))?;
		if format!("{:02}", 97 - number % 97) != digits[8..] {
			return Err(invalid("checksum mismatch"));
		}
		Ok(Self(data.to_string()))
	}

	#[must_use]
	pub fn placeholder() -> Self {
		Self(Self::PLACEHOLDER.to_string())
	}

	#[must_use]
	pub fn is_placeholder(&self) -> bool {
		self.0 == Self::PLACEHOLDER
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

const VIN_WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];
const VIN_CHECK: &[u8; 11] = b"0123456789X";

/// Transliterated value of a legal VIN character. I, O and Q are illegal.
fn vin_value(ch: u8) -> Option<u32> {
	let value = match ch {
		b'0'..=b'9' => ch - b'0',
		b'A'..=b'H' => ch - b'A' + 1,
		b'J'..=b'N' => ch - b'J' + 1,
		b'P' => 7,
		b'R' => 9,
		b'S'..=b'Z' => ch - b'S' + 2,
		_ => return None,
	};
	Some(u32::from(value))
}

impl Vin {
	pub const PLACEHOLDER: &'static str = "00000000000000000";
	const FIELD: &'static str = "chassisnummer";

	pub fn parse(raw: &str) -> Result<Self, ScribeError> {
		let data = raw.trim().to_ascii_uppercase();
		if data == Self::PLACEHOLDER {
			return Ok(Self::placeholder());
		}
		let invalid = |reason: &str| ScribeError::invalid(Self::FIELD, raw, reason);

		if data.len() != 17 {
			return Err(invalid("expected 17 characters"));
		}
		let values = data
			.bytes()
			.map(vin_value)
			.collect::<Option<Vec<u32>>>()
			.ok_or_else(|| invalid("only 0-9 and A-Z without I, O and Q are allowed"))?;

		let sum: u32 = values.iter().zip(VIN_WEIGHTS).map(|(value, weight)| value * weight).sum();
		let check = VIN_CHECK[(sum % 11) as usize];
		if data.as_bytes()[8] != check {
			return Err(invalid("check character mismatch"));
		}
		Ok(Self(data))
	}

	#[must_use]
	pub fn placeholder() -> Self {
		Self(Self::PLACEHOLDER.to_string())
	}

	#[must_use]
	pub fn is_placeholder(&self) -> bool {
		self.0 == Self::PLACEHOLDER
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

macro_rules! display_as_str {
	($($id:ty),*) => {
		$(impl fmt::Display for $id {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		})*
	};
}

display_as_str!(Rrn, Btw, Vin);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn national_numbers_validate_their_checksum() {
		for valid in ["85.07.30-033.28", "90.02.01-997.04", "75.12.24-001.65"] {
			assert_eq!(Rrn::parse_in(valid, 2025).unwrap().as_str(), valid);
		}
		assert!(Rrn::parse_in("85.07.30-033.29", 2025).is_err());
		assert!(Rrn::parse_in("85.07.30/033.28", 2025).is_err());
		assert!(Rrn::parse_in("850730033", 2025).is_err());
	}

	#[test]
	fn national_numbers_after_2000_use_the_century_digit() {
		assert!(Rrn::parse_in("01.03.15-123.80", 2025).is_ok());
		// Read as a 1901 birth once the two-digit year is in the future.
		assert!(Rrn::parse_in("01.03.15-123.80", 2000).is_err());
	}

	#[test]
	fn vat_numbers_validate_their_checksum() {
		for valid in ["0123.456.749", "0456.789.133", "0999.111.282"] {
			assert!(Btw::parse(valid).is_ok(), "{valid}");
		}
		let err = Btw::parse("0412.345.600").unwrap_err();
		assert!(matches!(err, ScribeError::Validation { ref field, .. } if field == "btwnummer"));
		assert!(Btw::parse("0412-345-614").is_err());
		assert!(Btw::parse(" 0123.456.749 ").is_ok());
	}

	#[test]
	fn vins_validate_their_check_character() {
		for valid in [
			"1M8GDM9AXKP042788",
			"WBAXX00090A000001",
			"WVWZZZ1J93W386752",
			"VF1RFB00756000002",
		] {
			assert!(Vin::parse(valid).is_ok(), "{valid}");
		}
		assert_eq!(Vin::parse("wbaxx00090a000001").unwrap().as_str(), "WBAXX00090A000001");
		assert!(Vin::parse("1M8GDM9A1KP042788").is_err());
		assert!(Vin::parse("1M8GDM9AXKP04278").is_err());
		assert!(Vin::parse("IM8GDM9AXKP042788").is_err());
	}

	#[test]
	fn placeholders_parse_and_say_so() {
		assert!(Rrn::parse(Rrn::PLACEHOLDER).unwrap().is_placeholder());
		assert!(Btw::parse(Btw::PLACEHOLDER).unwrap().is_placeholder());
		assert!(Vin::parse(Vin::PLACEHOLDER).unwrap().is_placeholder());
		assert!(!Vin::parse("WBAXX00090A000001").unwrap().is_placeholder());
	}
}

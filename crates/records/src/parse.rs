//! Parsers for raw attribute text typed into the editor.

use std::str::FromStr;

use chrono::NaiveDate;
use hawk_scribe::ScribeError;

pub(crate) fn flag(field: &str, raw: &str) -> Result<bool, ScribeError> {
	match raw.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "ja" => Ok(true),
		"false" | "0" | "no" | "nee" | "neen" => Ok(false),
		_ => Err(ScribeError::invalid(field, raw, "expected ja or nee")),
	}
}

pub(crate) fn date(field: &str, raw: &str) -> Result<NaiveDate, ScribeError> {
	NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
		.map_err(|err| ScribeError::invalid(field, raw, format!("expected YYYY-MM-DD ({err})")))
}

pub(crate) fn number<N: FromStr>(field: &str, raw: &str) -> Result<N, ScribeError> {
	raw.trim()
		.parse()
		.map_err(|_| ScribeError::invalid(field, raw, "expected a number"))
}

/// Non-negative, finite amount of money.
pub(crate) fn amount(field: &str, raw: &str) -> Result<f64, ScribeError> {
	let value: f64 = number(field, raw.trim().trim_start_matches('€'))?;
	if !value.is_finite() || value < 0.0 {
		return Err(ScribeError::invalid(field, raw, "expected a positive amount"));
	}
	Ok(value)
}

pub(crate) fn text(field: &str, raw: &str) -> Result<String, ScribeError> {
	let value = raw.trim();
	if value.chars().any(char::is_control) {
		return Err(ScribeError::invalid(field, raw, "control characters are not allowed"));
	}
	Ok(value.to_string())
}

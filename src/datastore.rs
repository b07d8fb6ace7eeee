//! JSON persistence of the record collections.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use hawk_records::{Document, Records};
use log::info;

/// Read the record file at `path`.
///
/// A missing file yields empty collections. Records the file holds but that
/// fail validation are skipped by the hydration.
pub fn load(path: &Path, today: NaiveDate) -> Result<Records> {
	if !path.exists() {
		info!("no record file at {}, starting empty", path.display());
		return Ok(Records::new(today));
	}

	let text = fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	let document =
		Document::from_json(&text)
			.with_context(|| format!("{} is not a valid record file", path.display()))?;
	Ok(Records::from_document(document, today))
}

/// Write `records` to `path`, replacing the previous file.
///
/// The document is written next to the target first and then renamed over it.
pub fn save(path: &Path, records: &Records) -> Result<()> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create {}", parent.display()))?;
	}

	let text = records.to_document().to_json().context("failed to serialize the records")?;
	let staging = path.with_extension("json.tmp");
	fs::write(&staging, text).with_context(|| format!("failed to write {}", staging.display()))?;
	fs::rename(&staging, path).with_context(|| format!("failed to replace {}", path.display()))?;
	info!("saved records to {}", path.display());
	Ok(())
}

#[cfg(test)]
mod tests {
	use hawk_records::Kind;
	use tempfile::tempdir;

	use super::*;

	const DATA: &str = r#"{
		"professioneel": [
			{
				"naam": "Claes Logistics", "straat": "Industrieweg", "huisnummer": 80,
				"postcode": 3500, "gemeente": "Hasselt", "btwnummer": "0123.456.749"
			}
		],
		"voertuigen": [
			{
				"chassisnummer": "WVWZZZ1J93W386752", "merk": "Volkswagen", "model": "Golf",
				"bouwjaar": 2019, "categorie": "M1", "beschikbaar": true, "dagprijs": 35.99
			}
		]
	}"#;

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
	}

	#[test]
	fn missing_file_means_empty_records() {
		let dir = tempdir().unwrap();
		let records = load(&dir.path().join("data.json"), today()).unwrap();
		for kind in Kind::ALL {
			assert!(records.collection(kind).is_empty());
		}
	}

	#[test]
	fn saved_records_load_back() {
		let dir = tempdir().unwrap();
		let source = dir.path().join("source.json");
		fs::write(&source, DATA).unwrap();
		let records = load(&source, today()).unwrap();
		assert_eq!(records.collection(Kind::Klanten).len(), 1);
		assert_eq!(records.collection(Kind::Voertuigen).len(), 1);

		let target = dir.path().join("nested").join("data.json");
		save(&target, &records).unwrap();
		assert!(!target.with_extension("json.tmp").exists());

		let reloaded = load(&target, today()).unwrap();
		assert_eq!(reloaded.to_document(), records.to_document());
	}

	#[test]
	fn malformed_files_are_reported() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("data.json");
		fs::write(&path, "{ not json").unwrap();
		let err = load(&path, today()).unwrap_err();
		assert!(err.to_string().contains("not a valid record file"));
	}
}

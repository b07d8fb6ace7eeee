use anyhow::Result;
use hawk_scribe::Collection;
use serde_json::{Map, Value, json};

/// Ranked view of one collection, ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Listing {
	pub(crate) collection: &'static str,
	pub(crate) query: String,
	pub(crate) columns: Vec<&'static str>,
	pub(crate) rows: Vec<Vec<String>>,
}

impl Listing {
	/// Capture every row of the current view of `collection`.
	pub(crate) fn capture(name: &'static str, collection: &dyn Collection) -> Self {
		Self {
			collection: name,
			query: collection.last_query().to_string(),
			columns: collection.columns().to_vec(),
			rows: collection.rows(0..collection.count()),
		}
	}
}

/// Print the listing as tab separated lines, the header first.
pub(crate) fn print_plain(listing: &Listing) {
	print!("{}", format_plain(listing));
}

pub(crate) fn format_plain(listing: &Listing) -> String {
	let mut text = listing.columns.join("\t");
	text.push('\n');
	for row in &listing.rows {
		text.push_str(&row.join("\t"));
		text.push('\n');
	}
	text
}

/// Format the listing as a JSON document keyed by column name.
pub(crate) fn format_listing_json(listing: &Listing) -> Result<String> {
	let rows = listing
		.rows
		.iter()
		.map(|row| {
			let record = listing
				.columns
				.iter()
				.zip(row)
				.map(|(column, value)| ((*column).to_string(), Value::String(value.clone())))
				.collect::<Map<_, _>>();
			Value::Object(record)
		})
		.collect::<Vec<_>>();

	let payload = json!({
		"collection": listing.collection,
		"query": listing.query,
		"count": listing.rows.len(),
		"rows": rows,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(listing: &Listing) -> Result<()> {
	println!("{}", format_listing_json(listing)?);
	Ok(())
}

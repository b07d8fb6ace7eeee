use std::path::Path;

use anyhow::Result;
use chrono::Local;
use hawk::datastore;
use hawk::{Outcome, Records, UiOptions};
use log::info;

use crate::cli::Listing;
use crate::settings::ResolvedConfig;

/// Loads the records named by the configuration and hands them to the UI or
/// the lister.
pub(crate) struct Workflow {
	config: ResolvedConfig,
}

impl Workflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	fn data_file(&self) -> &Path {
		&self.config.data_file
	}

	fn load_records(&self) -> Result<Records> {
		datastore::load(self.data_file(), Local::now().date_naive())
	}

	fn ui_options(&self) -> UiOptions {
		UiOptions {
			kind: self.config.kind,
			initial_query: self.config.initial_query.clone(),
			theme: self.config.theme,
			viewport: self.config.viewport,
		}
	}

	/// Run the interactive UI and save the records when the user asks to.
	pub(crate) fn run(self) -> Result<Outcome> {
		let records = self.load_records()?;
		let (outcome, records) = hawk::run(records, self.ui_options())?;
		match outcome {
			Outcome::Save => datastore::save(self.data_file(), &records)?,
			Outcome::Discard => info!("left without saving"),
		}
		Ok(outcome)
	}

	/// Rank the configured collection against the initial query.
	pub(crate) fn list(self) -> Result<Listing> {
		let mut records = self.load_records()?;
		let kind = self.config.kind;
		records.collection_mut(kind).run_query(&self.config.initial_query);
		Ok(Listing::capture(kind.name(), records.collection(kind)))
	}
}

use std::path::PathBuf;

use hawk_records::Kind;
use hawk_tui::Theme;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::InvalidSetting;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub data_file: PathBuf,
	pub kind: Kind,
	pub initial_query: String,
	pub theme_name: String,
	pub theme: Theme,
	pub viewport: usize,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), InvalidSetting> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

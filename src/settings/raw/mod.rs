use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use hawk::app_dirs;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, validation};
use crate::cli::CliArgs;

mod ui;

use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	ui: UiSection,
	logging: LoggingSection,
}

/// Where the records live.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.data.clone() {
			self.data.file = Some(file);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			collection: detect_source(
				cli.collection.is_some(),
				self.ui.collection.is_some(),
				"HAWK__UI__COLLECTION",
				"--collection",
				"ui.collection",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"HAWK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			viewport: detect_source(
				cli.viewport.is_some(),
				self.ui.viewport.is_some(),
				"HAWK__UI__VIEWPORT",
				"--viewport",
				"ui.viewport",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"HAWK__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let data_file = match self.data.file {
			Some(file) => file,
			None => app_dirs::default_data_file()?,
		};
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;
		let log_level =
			validation::log_level(self.logging.level.as_deref(), &sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			data_file,
			kind: ui.kind,
			initial_query: ui.initial_query,
			theme_name: ui.theme_name,
			theme: ui.theme,
			viewport: ui.viewport,
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;

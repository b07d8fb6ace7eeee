use hawk_records::Kind;
use hawk_tui::{DEFAULT_VIEWPORT, Theme};
use serde::Deserialize;

use super::super::resolved::{ConfigSources, InvalidSetting, validation};
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) collection: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) viewport: Option<usize>,
}

pub(super) struct UiResolution {
	pub(super) kind: Kind,
	pub(super) initial_query: String,
	pub(super) theme_name: String,
	pub(super) theme: Theme,
	pub(super) viewport: usize,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(collection) = cli.collection.clone() {
			self.collection = Some(collection);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(viewport) = cli.viewport {
			self.viewport = Some(viewport);
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, InvalidSetting> {
		let kind = match self.collection {
			Some(name) => validation::collection(&name, sources)?,
			None => Kind::Klanten,
		};
		let theme_name = self.theme.unwrap_or_else(|| "default".to_string());
		let theme = validation::theme(&theme_name, sources)?;

		Ok(UiResolution {
			kind,
			initial_query: self.initial_query.unwrap_or_default(),
			theme_name,
			theme,
			viewport: self.viewport.unwrap_or(DEFAULT_VIEWPORT),
		})
	}
}

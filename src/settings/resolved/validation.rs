use hawk::logging;
use hawk_records::Kind;
use hawk_tui::{Theme, theme_by_name, theme_names};
use log::LevelFilter;

use super::{ConfigSources, InvalidSetting, ResolvedConfig};

/// Fewest table rows the pager can work with: a row between two ellipses.
const MIN_VIEWPORT: usize = 3;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), InvalidSetting> {
	if config.viewport < MIN_VIEWPORT {
		return Err(InvalidSetting::new(
			"ui.viewport",
			config.viewport.to_string(),
			sources.source_for_viewport(),
			format!("must be at least {MIN_VIEWPORT}"),
		));
	}

	Ok(())
}

pub(in crate::settings) fn collection(
	name: &str,
	sources: &ConfigSources,
) -> Result<Kind, InvalidSetting> {
	name.parse::<Kind>()
		.map_err(|err| {
			InvalidSetting::new(
				"ui.collection",
				name,
				sources.source_for_collection(),
				err.to_string(),
			)
		})
}

pub(in crate::settings) fn theme(
	name: &str,
	sources: &ConfigSources,
) -> Result<Theme, InvalidSetting> {
	theme_by_name(name).ok_or_else(|| {
		InvalidSetting::new(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("expected one of {}", theme_names().join(", ")),
		)
	})
}

pub(in crate::settings) fn log_level(
	name: Option<&str>,
	sources: &ConfigSources,
) -> Result<LevelFilter, InvalidSetting> {
	let Some(name) = name else {
		return Ok(LevelFilter::Info);
	};
	logging::parse_level(name).ok_or_else(|| {
		InvalidSetting::new(
			"logging.level",
			name,
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		)
	})
}

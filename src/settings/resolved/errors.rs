use thiserror::Error;

use super::SettingSource;

/// A setting that parsed but cannot be used, with where it came from.
#[derive(Debug, Error)]
#[error("{key} = {value:?} ({origin}) is not usable: {reason}")]
pub(crate) struct InvalidSetting {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl InvalidSetting {
	pub(crate) fn new(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

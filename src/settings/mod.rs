//! Configuration loading and resolution.
//!
//! `load` layers the configuration files, the environment and the CLI flags
//! and returns the [`ResolvedConfig`] the workflow runs with.

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};

pub use resolved::ResolvedConfig;

use crate::cli::CliArgs;
use raw::RawConfig;

/// Resolve the settings for one run. Flags win over `HAWK__*` variables,
/// which win over the config files.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources::build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the expected layout")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

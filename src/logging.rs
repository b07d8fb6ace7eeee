//! Logging bootstrap.
//!
//! Records go to the `tui-logger` buffer, which the interactive UI drains
//! into its activity panel every frame.

use anyhow::{Context, Result};
use log::LevelFilter;

/// Install the logger backend and cap it at `level`.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level).context("failed to install the logger")?;
	tui_logger::set_default_level(level);
	Ok(())
}

/// Parse a level name such as `info` or `WARN`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
	name.trim().parse().ok()
}

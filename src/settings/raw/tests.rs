use std::path::PathBuf;

use clap::Parser;
use hawk_records::Kind;
use log::LevelFilter;

use super::RawConfig;
use crate::cli::CliArgs;

fn cli(args: &[&str]) -> CliArgs {
	CliArgs::parse_from(std::iter::once("hawk").chain(args.iter().copied()))
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--data",
		"/tmp/records.json",
		"--collection",
		"voertuigen",
		"--query",
		"golf",
		"--theme",
		"light",
		"--viewport",
		"7",
		"--log-level",
		"debug",
	]);

	let mut config = RawConfig::default();
	config.ui.theme = Some("default".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.data.file, Some(PathBuf::from("/tmp/records.json")));
	assert_eq!(config.ui.collection.as_deref(), Some("voertuigen"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("golf"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.viewport, Some(7));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn defaults_resolve() {
	let cli = cli(&["--data", "records.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.data_file, PathBuf::from("records.json"));
	assert_eq!(resolved.kind, Kind::Klanten);
	assert_eq!(resolved.theme_name, "default");
	assert_eq!(resolved.viewport, hawk_tui::DEFAULT_VIEWPORT);
	assert_eq!(resolved.log_level, LevelFilter::Info);
}

#[test]
fn unknown_collections_name_their_origin() {
	let cli = cli(&["--data", "records.json", "--collection", "boten"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.collection"));
	assert!(message.contains("--collection"));
	assert!(message.contains("boten"));
}

#[test]
fn small_viewports_are_rejected() {
	let cli = cli(&["--data", "records.json"]);
	let mut config = RawConfig::default();
	config.ui.viewport = Some(2);
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.viewport"));
	assert!(message.contains("configuration key"));
}

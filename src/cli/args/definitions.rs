use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `hawk` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hawk",
	version,
	long_version = long_version(),
	about = "Front office for a small rental fleet, with incremental fuzzy search",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HAWK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Record file to open (default: data.json in the data directory)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'k',
		long = "collection",
		value_name = "NAME",
		help = "Collection shown first: klanten, voertuigen, reserveringen or facturen"
	)]
	pub(crate) collection: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "viewport",
		value_name = "ROWS",
		help = "Minimum number of table rows (default: 5)"
	)]
	pub(crate) viewport: Option<usize>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Lowest level shown in the activity panel (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'l',
		long = "list",
		help = "Print the ranked collection instead of starting the UI (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how --list prints the collection"
	)]
	pub(crate) output: OutputFormat,
}

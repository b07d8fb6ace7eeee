mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use hawk::{Outcome, logging};
use settings::ResolvedConfig;
use workflow::Workflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in hawk_tui::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::initialize(resolved.log_level)?;

	if cli.list {
		return list(cli.output, resolved);
	}

	if Workflow::from_config(resolved).run()? == Outcome::Discard {
		println!("Changes discarded");
	}
	Ok(())
}

/// Print the ranked collection in the chosen format.
fn list(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let listing = Workflow::from_config(settings).list()?;

	match format {
		OutputFormat::Plain => print_plain(&listing),
		OutputFormat::Json => print_json(&listing)?,
	}

	Ok(())
}

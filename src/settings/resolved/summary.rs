use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", summary(config));
}

fn summary(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Record file: {}", config.data_file.display()),
		format!("  Collection: {}", config.kind.name()),
		format!("  UI theme: {}", config.theme_name),
		format!("  Viewport: {} rows", config.viewport),
		format!("  Log level: {}", config.log_level.as_str().to_lowercase()),
	];
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(String::new());
	lines.join("\n")
}

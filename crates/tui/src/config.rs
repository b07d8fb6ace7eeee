use hawk_records::Kind;

use crate::style::Theme;

/// Minimum number of table rows the layout reserves.
pub const DEFAULT_VIEWPORT: usize = 5;

/// Startup options for the interactive UI.
#[derive(Debug, Clone)]
pub struct UiOptions {
	/// Collection shown first.
	pub kind: Kind,
	/// Query applied to that collection before the first frame.
	pub initial_query: String,
	pub theme: Theme,
	/// Minimum number of table rows, ellipsis rows included.
	pub viewport: usize,
}

impl Default for UiOptions {
	fn default() -> Self {
		Self {
			kind: Kind::Klanten,
			initial_query: String::new(),
			theme: Theme::default(),
			viewport: DEFAULT_VIEWPORT,
		}
	}
}

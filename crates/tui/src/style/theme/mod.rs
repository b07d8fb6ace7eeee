mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtin_themes()
		.into_iter()
		.find(|registration| registration.matches(name))
		.map(|registration| registration.theme)
}

/// Names of the built-in themes, default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes().iter().map(|registration| registration.name).collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

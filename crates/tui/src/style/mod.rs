//! Visual styling utilities.
//!
//! Themes are the color schemes applied to the terminal UI. Only built-in
//! themes exist; they are selected by name from configuration.

/// Theme definitions and lookup by name.
pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

//! Interactive terminal front-end for `hawk`.
//!
//! The [`App`] shows one record collection at a time in a paged table and
//! routes everything typed into the command input through a list of
//! [`Listeners`]. The bundled listeners narrow the table as the query
//! changes and commit field values typed in the editor.

mod app;
pub mod components;
mod config;
pub mod events;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, Editor, Mode, Outcome, Selection, Session, Step};
pub use config::{DEFAULT_VIEWPORT, UiOptions};
pub use events::{ListenerId, Listeners};
pub use input::{CommandInput, InputEvent};
pub use runtime::run;
pub use style::{Theme, by_name as theme_by_name, names as theme_names};

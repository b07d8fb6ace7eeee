//! Library side of the `hawk` binary.
//!
//! Directory lookup, the logging bootstrap and the JSON datastore live here
//! so the binary's workflow stays a thin layer over them.

pub mod app_dirs;
pub mod datastore;
pub mod logging;

pub use hawk_records::{Kind, Records};
pub use hawk_tui::{Outcome, UiOptions, run};

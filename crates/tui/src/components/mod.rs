//! UI building blocks shared by the render pass.

/// Log records captured by the logger backend.
pub mod activity;
/// Per-mode key hints.
pub mod footer;
mod highlight;
/// Menu and field editor.
pub mod panel;
/// Table row construction and highlighting.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use activity::render_activity;
pub use footer::render_footer;
pub use panel::{render_editor, render_menu};
pub use scrollbar::render_scrollbar;
pub use tables::{render_empty, render_table};

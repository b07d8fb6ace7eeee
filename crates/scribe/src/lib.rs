//! Incremental fuzzy-search collections for small in-memory record sets.
//!
//! A [`Scribe`] owns every entity of one kind and keeps a ranked, filtered
//! view over them. The view narrows as the user types and is restored from a
//! LIFO stack when characters are deleted, so each keystroke only touches the
//! candidates it can affect. The [`Pager`] turns that view into a visible
//! slice for a fixed viewport.

mod collection;
mod entity;
mod error;
mod filter;
mod fuzzable;
mod pager;
pub mod score;
mod scribe;
mod store;

pub use collection::Collection;
pub use entity::{Entity, Field, Value};
pub use error::ScribeError;
pub use filter::Filter;
pub use pager::{Page, Pager};
pub use scribe::Scribe;
pub use store::Handle;

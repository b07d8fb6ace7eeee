use thiserror::Error;

/// Failures reported by collection operations and entity mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScribeError {
	#[error("index {index} is out of range for a view of {len} entries")]
	IndexOutOfRange { index: usize, len: usize },
	#[error("unknown attribute `{name}`")]
	UnknownAttribute { name: String },
	#[error("invalid value for {field}: {reason} (value: {value})")]
	Validation {
		field: String,
		value: String,
		reason: String,
	},
	#[error("an entry with uid `{uid}` already exists")]
	DuplicateUid { uid: String },
	#[error("no entry with uid `{uid}`")]
	UnknownUid { uid: String },
	#[error("entry handle no longer refers to a live entry")]
	StaleHandle,
}

impl ScribeError {
	/// Build a validation error for `field`.
	pub fn invalid<F, V, R>(field: F, value: V, reason: R) -> Self
	where
		F: Into<String>,
		V: Into<String>,
		R: Into<String>,
	{
		Self::Validation {
			field: field.into(),
			value: value.into(),
			reason: reason.into(),
		}
	}

	/// Build an unknown attribute error for `name`.
	pub fn unknown(name: impl Into<String>) -> Self {
		Self::UnknownAttribute { name: name.into() }
	}
}

use thiserror::Error;

/// Errors produced by the geometry codecs and container accessors.
#[derive(Debug, Error)]
pub enum GeometryError {
	/// A WKT grammar violation, with the character offset at which it was detected.
	#[error("{message} at position {offset}")]
	Parse { message: String, offset: usize },

	/// A WKB payload with an unknown type code or a mismatched container element.
	#[error("invalid format: {0}")]
	InvalidFormat(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error("index {index} out of range, child count is {count}")]
	IndexOutOfRange { index: usize, count: usize },
}

impl GeometryError {
	pub fn parse(message: impl Into<String>, offset: usize) -> Self {
		GeometryError::Parse {
			message: message.into(),
			offset,
		}
	}

	pub fn invalid_format(message: impl Into<String>) -> Self {
		GeometryError::InvalidFormat(message.into())
	}

	/// The message of a parse error without its position, if this is one.
	pub fn parse_message(&self) -> Option<&str> {
		match self {
			GeometryError::Parse { message, .. } => Some(message),
			_ => None,
		}
	}
}

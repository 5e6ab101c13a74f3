use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors produced while reading values and types from a stopped debuggee.
#[derive(Debug, Error)]
pub enum InspectError {
	/// Declared type name could not be read.
	#[error("type name unavailable")]
	TypeNameUnavailable,
	/// Named field does not exist on a struct-like value.
	#[error("missing field {field} on {type_name}")]
	MissingField {
		/// Declared type of the value the lookup ran against.
		type_name: String,
		/// Requested field name.
		field: String,
	},
	/// Value is not a pointer or its target cannot be read.
	#[error("cannot dereference {type_name}")]
	DerefUnsupported {
		/// Declared type of the value.
		type_name: String,
	},
	/// Dereference attempted through a null pointer.
	#[error("null pointer dereference")]
	NullDeref,
	/// Native text rendering failed.
	#[error("value text unreadable")]
	TextUnreadable,
	/// Floating-point conversion requested on a non-float value.
	#[error("not a floating-point value: {type_name}")]
	NotAFloat {
		/// Declared type of the value.
		type_name: String,
	},
	/// Nullness query on a value with no pointer representation.
	#[error("not a pointer-like value: {type_name}")]
	NotAPointer {
		/// Declared type of the value.
		type_name: String,
	},
	/// Debuggee memory read failed inside the debugger.
	#[error("debuggee read failed: {what}")]
	ReadFailed {
		/// Description of the failed read.
		what: String,
	},
}

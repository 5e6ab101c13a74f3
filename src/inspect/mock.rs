use std::cell::RefCell;
use std::sync::Arc;

use crate::inspect::{Debugger, DisplayModel, InspectError, Result, Value, ValueHandle, ValueKind};

/// Deterministic in-memory stand-in for one debuggee value.
///
/// Tests assemble trees of these instead of attaching to a live process;
/// every accessor returns the same answer on every call.
pub struct MockValue {
	type_name: String,
	node: Node,
}

enum Node {
	Scalar {
		kind: ValueKind,
		text: String,
		float: Option<f64>,
	},
	Struct {
		fields: Vec<(String, ValueHandle)>,
	},
	Pointer {
		target: Option<ValueHandle>,
	},
	Unreadable,
}

impl MockValue {
	/// Non-float scalar with a fixed native rendering.
	pub fn scalar(type_name: &str, text: &str) -> ValueHandle {
		Arc::new(Self {
			type_name: type_name.to_owned(),
			node: Node::Scalar {
				kind: ValueKind::Other,
				text: text.to_owned(),
				float: None,
			},
		})
	}

	/// Floating-point scalar.
	pub fn float(type_name: &str, value: f64) -> ValueHandle {
		Arc::new(Self {
			type_name: type_name.to_owned(),
			node: Node::Scalar {
				kind: ValueKind::Float,
				text: format!("{value}"),
				float: Some(value),
			},
		})
	}

	/// String scalar rendered the way debuggers quote strings.
	///
	/// `contents` is stored verbatim between quotes, so escape sequences
	/// stay literal the way a debugger prints them.
	pub fn string(type_name: &str, contents: &str) -> ValueHandle {
		Self::scalar(type_name, &format!("\"{contents}\""))
	}

	/// Struct-like value with named fields.
	pub fn struct_value(type_name: &str, fields: Vec<(&str, ValueHandle)>) -> ValueHandle {
		Arc::new(Self {
			type_name: type_name.to_owned(),
			node: Node::Struct {
				fields: fields.into_iter().map(|(name, value)| (name.to_owned(), value)).collect(),
			},
		})
	}

	/// Pointer value; a `None` target models a null pointer.
	pub fn pointer(type_name: &str, target: Option<ValueHandle>) -> ValueHandle {
		Arc::new(Self {
			type_name: type_name.to_owned(),
			node: Node::Pointer { target },
		})
	}

	/// Value whose every memory read fails, for failure-path tests.
	pub fn unreadable(type_name: &str) -> ValueHandle {
		Arc::new(Self {
			type_name: type_name.to_owned(),
			node: Node::Unreadable,
		})
	}

	fn read_failed(&self) -> InspectError {
		InspectError::ReadFailed {
			what: self.type_name.clone(),
		}
	}
}

impl Value for MockValue {
	fn type_name(&self) -> Result<String> {
		Ok(self.type_name.clone())
	}

	fn kind(&self) -> ValueKind {
		match &self.node {
			Node::Scalar { kind, .. } => *kind,
			Node::Pointer { .. } => ValueKind::Pointer,
			Node::Struct { .. } | Node::Unreadable => ValueKind::Other,
		}
	}

	fn field(&self, name: &str) -> Result<ValueHandle> {
		match &self.node {
			Node::Struct { fields } => fields
				.iter()
				.find(|(field, _)| field == name)
				.map(|(_, value)| value.clone())
				.ok_or_else(|| InspectError::MissingField {
					type_name: self.type_name.clone(),
					field: name.to_owned(),
				}),
			Node::Unreadable => Err(self.read_failed()),
			_ => Err(InspectError::MissingField {
				type_name: self.type_name.clone(),
				field: name.to_owned(),
			}),
		}
	}

	fn deref(&self) -> Result<ValueHandle> {
		match &self.node {
			Node::Pointer { target: Some(target) } => Ok(target.clone()),
			Node::Pointer { target: None } => Err(InspectError::NullDeref),
			Node::Unreadable => Err(self.read_failed()),
			_ => Err(InspectError::DerefUnsupported {
				type_name: self.type_name.clone(),
			}),
		}
	}

	fn text(&self) -> Result<String> {
		match &self.node {
			Node::Scalar { text, .. } => Ok(text.clone()),
			Node::Pointer { target } => Ok(if target.is_some() {
				"0x00005555aaaa0000".to_owned()
			} else {
				"0x0".to_owned()
			}),
			Node::Struct { .. } => Ok("{...}".to_owned()),
			Node::Unreadable => Err(self.read_failed()),
		}
	}

	fn as_f64(&self) -> Result<f64> {
		match &self.node {
			Node::Scalar { float: Some(value), .. } => Ok(*value),
			Node::Unreadable => Err(self.read_failed()),
			_ => Err(InspectError::NotAFloat {
				type_name: self.type_name.clone(),
			}),
		}
	}

	fn is_null(&self) -> Result<bool> {
		match &self.node {
			Node::Pointer { target } => Ok(target.is_none()),
			Node::Unreadable => Err(self.read_failed()),
			_ => Err(InspectError::NotAPointer {
				type_name: self.type_name.clone(),
			}),
		}
	}
}

/// Debugger double that records console output.
///
/// Native display is the plain one a frontend shows without printers: the
/// value's own text, single line, no expansion.
#[derive(Default)]
pub struct MockDebugger {
	console: RefCell<Vec<String>>,
}

impl MockDebugger {
	/// Create a debugger double with an empty console.
	pub fn new() -> Self {
		Self::default()
	}

	/// Console lines captured so far, in emission order.
	pub fn console_lines(&self) -> Vec<String> {
		self.console.borrow().clone()
	}
}

impl Debugger for MockDebugger {
	fn console(&self, line: &str) {
		self.console.borrow_mut().push(line.to_owned());
	}

	fn native_display(&self, value: &ValueHandle) -> DisplayModel {
		DisplayModel::scalar(value.text().unwrap_or_else(|_| "<unreadable>".to_owned()))
	}
}

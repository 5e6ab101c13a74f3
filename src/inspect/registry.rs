use std::sync::OnceLock;

use crate::inspect::json::decode_json;
use crate::inspect::yaml::decode_document;
use crate::inspect::{Debugger, DisplayModel, ValueHandle};

/// One registered display-model factory.
///
/// Returns `None` when the value is not of a type the factory handles;
/// declining is not an error.
pub type LookupFn = fn(&dyn Debugger, &ValueHandle) -> Option<DisplayModel>;

/// Ordered list of display-model factories consulted per inspected value.
#[derive(Default)]
pub struct Registry {
	lookups: Vec<LookupFn>,
}

impl Registry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self { lookups: Vec::new() }
	}

	/// Append a factory; earlier registrations win.
	pub fn register(&mut self, lookup: LookupFn) {
		self.lookups.push(lookup);
	}

	/// Consult factories in registration order; the first claim wins.
	pub fn lookup(&self, dbg: &dyn Debugger, value: &ValueHandle) -> Option<DisplayModel> {
		self.lookups.iter().find_map(|lookup| lookup(dbg, value))
	}

	/// Produce a display model, deferring to native display when all decline.
	pub fn display(&self, dbg: &dyn Debugger, value: &ValueHandle) -> DisplayModel {
		self.lookup(dbg, value).unwrap_or_else(|| dbg.native_display(value))
	}
}

/// Composite factory: YAML document first, generic tagged JSON second.
///
/// The document check must run first and decline definitively on type-name
/// mismatch, so a document value is never misclassified by the JSON path.
pub fn document_or_json_lookup(dbg: &dyn Debugger, value: &ValueHandle) -> Option<DisplayModel> {
	if let Some(model) = decode_document(dbg, value) {
		return Some(model);
	}
	decode_json(dbg, value)
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Process-wide registry, populated once on first use and read-only after.
pub fn global_registry() -> &'static Registry {
	REGISTRY.get_or_init(|| {
		let mut registry = Registry::new();
		registry.register(document_or_json_lookup);
		registry
	})
}

/// Display one value through the global registry.
///
/// Entry point for all recursion into nested values.
pub fn display_value(dbg: &dyn Debugger, value: &ValueHandle) -> DisplayModel {
	global_registry().display(dbg, value)
}

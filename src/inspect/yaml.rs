use crate::inspect::display::{ChildSlot, DisplayChild, KeyedDisplay, SequenceDisplay};
use crate::inspect::{Debugger, DisplayModel, Result, ValueHandle, ValueKind};

/// Stripped-type-name marker identifying the YAML document wrapper.
const DOCUMENT_TYPE_NAME: &str = "nlohmann::yaml::document";
/// Internal raw-pointer member of the shared-ownership document handle.
const SHARED_PTR_RAW: &str = "_M_ptr";
/// Label prefixed to every document decode diagnostic on the console.
const CONSOLE_LABEL: &str = "yaml document decode";

/// Partial state captured while resolving a document value.
///
/// Every field is best-effort: a failed step leaves its field empty and
/// never blocks the remaining steps, so a document always produces at
/// least a minimal display.
pub struct DocumentParts {
	/// Live handle of the file-path field.
	pub file_path: Option<ValueHandle>,
	/// File path text with surrounding quotes removed; never empty.
	pub file_path_text: Option<String>,
	/// Live handle of the embedded structured data.
	pub data: Option<ValueHandle>,
	/// Flat key-value mapping derived from the original source text.
	///
	/// Resilience path only; the structured `data` handle is the source of
	/// truth and the primary display does not consult this mapping.
	pub fallback: Vec<(String, String)>,
	/// Comment lines found in the original source text, in order.
	pub comments: Vec<String>,
}

impl DocumentParts {
	/// Build the primary keyed display: file path first, then data.
	pub fn into_display(self) -> DisplayModel {
		let summary = match &self.file_path_text {
			Some(path) => format!("YAML document (file: {path})"),
			None => "YAML document".to_owned(),
		};

		let mut children = Vec::new();
		if let Some(handle) = self.file_path {
			children.push(DisplayChild {
				label: "FilePath".to_owned(),
				slot: ChildSlot::Live(handle),
			});
		}
		if let Some(data) = self.data {
			children.push(DisplayChild {
				label: "data".to_owned(),
				slot: ChildSlot::Live(data),
			});
		}

		DisplayModel::Keyed(KeyedDisplay { summary, children })
	}

	/// Keyed view of the flat fallback mapping.
	///
	/// Best-effort secondary rendering for hosts that want the raw entries
	/// when the structured data is unusable.
	pub fn fallback_display(&self) -> DisplayModel {
		let children = self
			.fallback
			.iter()
			.map(|(key, value)| DisplayChild {
				label: key.clone(),
				slot: ChildSlot::Text(value.clone()),
			})
			.collect();

		DisplayModel::Keyed(KeyedDisplay {
			summary: format!("YAML content ({} entries)", self.fallback.len()),
			children,
		})
	}

	/// Sequence view of the comment lines kept from the source text.
	pub fn comments_display(&self) -> DisplayModel {
		let children = self
			.comments
			.iter()
			.enumerate()
			.map(|(index, line)| DisplayChild {
				label: format!("[{index}]"),
				slot: ChildSlot::Text(line.clone()),
			})
			.collect();

		DisplayModel::Sequence(SequenceDisplay {
			summary: format!("comments ({} lines)", self.comments.len()),
			children,
		})
	}
}

/// Decode a YAML document wrapper into a display model.
///
/// Declines with `None` unless the stripped type name marks the wrapper
/// type; past that point decoding always yields a model, however partial.
pub fn decode_document(dbg: &dyn Debugger, value: &ValueHandle) -> Option<DisplayModel> {
	let type_name = value.type_name().ok()?;
	if !type_name.contains(DOCUMENT_TYPE_NAME) {
		return None;
	}

	Some(read_document(dbg, value).into_display())
}

/// Capture best-effort partial state from a document wrapper value.
///
/// Each resolution step reports its own failure; failures are logged one
/// line each to the debugger console and decoding continues with whatever
/// was captured so far.
pub fn read_document(dbg: &dyn Debugger, value: &ValueHandle) -> DocumentParts {
	let mut parts = DocumentParts {
		file_path: None,
		file_path_text: None,
		data: None,
		fallback: Vec::new(),
		comments: Vec::new(),
	};

	match value.field("file_path_") {
		Ok(handle) => match handle.text() {
			Ok(text) => {
				let stripped = text.trim_matches('"');
				if !stripped.is_empty() {
					parts.file_path_text = Some(stripped.to_owned());
					parts.file_path = Some(handle);
				}
			}
			Err(err) => dbg.console(&format!("{CONSOLE_LABEL}: {err}")),
		},
		Err(err) => dbg.console(&format!("{CONSOLE_LABEL}: {err}")),
	}

	let doc = match value.field("doc_") {
		Ok(doc) => doc,
		Err(err) => {
			dbg.console(&format!("{CONSOLE_LABEL}: {err}"));
			return parts;
		}
	};

	let target = match resolve_document_handle(&doc) {
		Ok(Some(target)) => target,
		// A null owning pointer aborts resolution without diagnostics.
		Ok(None) => return parts,
		Err(err) => {
			dbg.console(&format!("{CONSOLE_LABEL}: {err}"));
			return parts;
		}
	};

	match target.field("json_data_") {
		Ok(data) => parts.data = Some(data),
		Err(err) => dbg.console(&format!("{CONSOLE_LABEL}: {err}")),
	}

	match target.field("original_yaml_").and_then(|source| source.text()) {
		Ok(text) => {
			let source = unescape_source(text.trim_matches('"'));
			parts.fallback = parse_flat_entries(&source);
			parts.comments = collect_comments(&source);
		}
		Err(err) => dbg.console(&format!("{CONSOLE_LABEL}: {err}")),
	}

	parts
}

/// Resolve the document handle through direct or shared-ownership indirection.
///
/// `Ok(None)` means the owning pointer is null: resolution aborts and the
/// caller produces a path-only model.
fn resolve_document_handle(handle: &ValueHandle) -> Result<Option<ValueHandle>> {
	if handle.kind() == ValueKind::Pointer {
		return handle.deref().map(Some);
	}

	let raw = handle.field(SHARED_PTR_RAW)?;
	if raw.is_null()? {
		return Ok(None);
	}
	raw.deref().map(Some)
}

/// Turn literal `\n`, `\t`, and `\"` sequences into real characters.
fn unescape_source(raw: &str) -> String {
	raw.replace("\\n", "\n").replace("\\t", "\t").replace("\\\"", "\"")
}

/// Best-effort flat key-value extraction from YAML-ish source text.
///
/// One entry per non-blank, non-comment line containing a colon; keys and
/// values are whitespace-trimmed and the last occurrence of a key wins.
/// Nested structures, multi-line values, and quoted colons are out of
/// contract for this path.
fn parse_flat_entries(source: &str) -> Vec<(String, String)> {
	let mut entries: Vec<(String, String)> = Vec::new();

	for line in source.lines() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		let Some((key, value)) = line.split_once(':') else {
			continue;
		};

		let key = key.trim();
		let value = value.trim();
		match entries.iter_mut().find(|entry| entry.0 == key) {
			Some(entry) => entry.1 = value.to_owned(),
			None => entries.push((key.to_owned(), value.to_owned())),
		}
	}

	entries
}

/// Keep the comment lines the flat extraction skips.
fn collect_comments(source: &str) -> Vec<String> {
	source
		.lines()
		.map(str::trim)
		.filter(|line| line.starts_with('#'))
		.map(str::to_owned)
		.collect()
}

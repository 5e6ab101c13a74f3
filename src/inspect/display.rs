use crate::inspect::ValueHandle;

/// Structural hint passed to the debugger's rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayHint {
	/// Children are named entries.
	Map,
	/// Children are an indexed sequence.
	Array,
}

impl DisplayHint {
	/// Wire spelling understood by debugger frontends.
	pub fn as_str(self) -> &'static str {
		match self {
			DisplayHint::Map => "map",
			DisplayHint::Array => "array",
		}
	}
}

/// Payload of one display child.
#[derive(Clone)]
pub enum ChildSlot {
	/// Live debuggee value; the debugger recurses into it via the registry.
	Live(ValueHandle),
	/// Pre-rendered text with no further expansion.
	Text(String),
}

impl std::fmt::Debug for ChildSlot {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ChildSlot::Live(_) => f.write_str("Live(..)"),
			ChildSlot::Text(text) => f.debug_tuple("Text").field(text).finish(),
		}
	}
}

/// One child entry of an expandable display model.
#[derive(Debug, Clone)]
pub struct DisplayChild {
	/// Label shown next to the entry.
	pub label: String,
	/// Entry payload.
	pub slot: ChildSlot,
}

/// Flat single-line display with no children.
#[derive(Debug, Clone)]
pub struct ScalarDisplay {
	/// Summary line.
	pub summary: String,
}

/// Map-like display with named children.
#[derive(Debug, Clone)]
pub struct KeyedDisplay {
	/// Summary line for the collapsed rendering.
	pub summary: String,
	/// Named child entries in display order.
	pub children: Vec<DisplayChild>,
}

/// Array-like display with indexed children.
#[derive(Debug, Clone)]
pub struct SequenceDisplay {
	/// Summary line for the collapsed rendering.
	pub summary: String,
	/// Child entries in index order.
	pub children: Vec<DisplayChild>,
}

/// Display model handed to the debugger's rendering layer.
///
/// Built fresh for every inspection request and discarded once rendered;
/// models are never cached or shared across requests.
#[derive(Debug, Clone)]
pub enum DisplayModel {
	/// Single-line value.
	Scalar(ScalarDisplay),
	/// Named-children container.
	Keyed(KeyedDisplay),
	/// Indexed-children container.
	Sequence(SequenceDisplay),
}

impl DisplayModel {
	/// Build a flat scalar model from summary text.
	pub fn scalar(summary: impl Into<String>) -> Self {
		DisplayModel::Scalar(ScalarDisplay { summary: summary.into() })
	}

	/// Summary line for the collapsed rendering.
	pub fn summary(&self) -> &str {
		match self {
			DisplayModel::Scalar(scalar) => &scalar.summary,
			DisplayModel::Keyed(keyed) => &keyed.summary,
			DisplayModel::Sequence(sequence) => &sequence.summary,
		}
	}

	/// Child entries for the expanded rendering.
	pub fn children(&self) -> &[DisplayChild] {
		match self {
			DisplayModel::Scalar(_) => &[],
			DisplayModel::Keyed(keyed) => &keyed.children,
			DisplayModel::Sequence(sequence) => &sequence.children,
		}
	}

	/// Structural hint, when the model is expandable.
	pub fn hint(&self) -> Option<DisplayHint> {
		match self {
			DisplayModel::Scalar(_) => None,
			DisplayModel::Keyed(_) => Some(DisplayHint::Map),
			DisplayModel::Sequence(_) => Some(DisplayHint::Array),
		}
	}
}

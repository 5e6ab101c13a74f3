use crate::inspect::display::{ChildSlot, DisplayHint};
use crate::inspect::registry::global_registry;
use crate::inspect::{Debugger, ValueHandle};

/// Expansion limits for recursive rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
	/// Maximum recursive expansion depth for live children.
	pub max_depth: u32,
	/// Maximum rendered children per node.
	pub max_children: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_depth: 6,
			max_children: 64,
		}
	}
}

/// One fully rendered display node.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderedNode {
	/// Summary line.
	pub summary: String,
	/// Structural hint wire spelling, when expandable.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hint: Option<&'static str>,
	/// Rendered children.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<RenderedChild>,
	/// Whether depth or child-count limits cut the expansion short.
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub truncated: bool,
}

/// One labeled rendered child.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RenderedChild {
	/// Child label.
	pub label: String,
	/// Rendered subtree.
	pub node: RenderedNode,
}

/// Render one value and its expansion through the global registry.
///
/// Stand-in for the debugger's rendering layer: live children re-enter the
/// registry exactly the way the debugger recurses into expanded entries.
pub fn render_value(dbg: &dyn Debugger, value: &ValueHandle, options: &RenderOptions) -> RenderedNode {
	render_at(dbg, value, options, 0)
}

/// Render one value as a JSON tree for frontend transport.
pub fn render_json(dbg: &dyn Debugger, value: &ValueHandle, options: &RenderOptions) -> serde_json::Value {
	serde_json::to_value(render_value(dbg, value, options)).unwrap_or_default()
}

fn render_at(dbg: &dyn Debugger, value: &ValueHandle, options: &RenderOptions, depth: u32) -> RenderedNode {
	let model = global_registry().display(dbg, value);

	let mut node = RenderedNode {
		summary: model.summary().to_owned(),
		hint: model.hint().map(DisplayHint::as_str),
		children: Vec::new(),
		truncated: false,
	};

	let children = model.children();
	if children.is_empty() {
		return node;
	}
	if depth >= options.max_depth {
		node.truncated = true;
		return node;
	}

	for child in children.iter().take(options.max_children) {
		let rendered = match &child.slot {
			ChildSlot::Live(handle) => render_at(dbg, handle, options, depth + 1),
			ChildSlot::Text(text) => RenderedNode {
				summary: text.clone(),
				hint: None,
				children: Vec::new(),
				truncated: false,
			},
		};
		node.children.push(RenderedChild {
			label: child.label.clone(),
			node: rendered,
		});
	}
	if children.len() > options.max_children {
		node.truncated = true;
	}

	node
}

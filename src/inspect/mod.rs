mod api;
mod display;
mod error;
mod json;
mod mock;
mod registry;
mod render;
mod scalar;
mod typename;
mod yaml;

/// Debugger value and console seam.
pub use api::{Debugger, Value, ValueHandle, ValueKind};
/// Display model variants, children, and structural hints.
pub use display::{ChildSlot, DisplayChild, DisplayHint, DisplayModel, KeyedDisplay, ScalarDisplay, SequenceDisplay};
/// Error and result aliases.
pub use error::{InspectError, Result};
/// Generic tagged JSON decoding entry points.
pub use json::{StorageKind, decode_json};
/// Deterministic debugger test doubles.
pub use mock::{MockDebugger, MockValue};
/// Printer dispatch registry and global entry points.
pub use registry::{LookupFn, Registry, display_value, document_or_json_lookup, global_registry};
/// Host-side recursive rendering of display models.
pub use render::{RenderOptions, RenderedChild, RenderedNode, render_json, render_value};
/// Scalar formatting helpers.
pub use scalar::{format_float, format_scalar};
/// Type-name pattern matching.
pub use typename::{TypeNameMatch, match_type_name};
/// YAML document decoding entry points.
pub use yaml::{DocumentParts, decode_document, read_document};

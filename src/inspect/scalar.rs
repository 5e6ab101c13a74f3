use crate::inspect::{Result, Value, ValueKind};

/// Literal rendering of the null storage kind.
const NULL_TEXT: &str = "null";

/// Canonicalize a floating-point value for display.
///
/// Fixed-point at six fractional digits with trailing zeros removed, always
/// keeping at least one fractional digit so integral floats stay visibly
/// floating-point (`3.0`, never `3`).
pub fn format_float(value: f64) -> String {
	let formatted = format!("{value:.6}");
	let Some((integer, fraction)) = formatted.split_once('.') else {
		return formatted;
	};

	let fraction = fraction.trim_end_matches('0');
	if fraction.is_empty() {
		format!("{integer}.0")
	} else {
		format!("{integer}.{fraction}")
	}
}

/// Render one primitive value as display text.
///
/// `is_null` renders the null marker without reading the value at all;
/// floats go through [`format_float`]; everything else keeps the value's
/// native rendering unmodified.
pub fn format_scalar(value: &dyn Value, is_null: bool) -> Result<String> {
	if is_null {
		return Ok(NULL_TEXT.to_owned());
	}

	if value.kind() == ValueKind::Float {
		return Ok(format_float(value.as_f64()?));
	}

	value.text()
}

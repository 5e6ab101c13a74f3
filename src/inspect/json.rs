use crate::inspect::registry::display_value;
use crate::inspect::scalar::format_scalar;
use crate::inspect::typename::match_type_name;
use crate::inspect::{Debugger, DisplayModel, Result, ValueHandle, ValueKind};

/// Qualified prefix every storage-kind enumerator carries.
const VALUE_T_PREFIX: &str = "detail::value_t::";
/// Inner-name prefix of the generic JSON value type.
const BASIC_JSON_PREFIX: &str = "basic_json<";

/// Closed set of storage kinds a generic JSON value can hold.
///
/// The discriminant selects exactly one live union member; [`StorageKind`]
/// is the total mapping from discriminant to member, so decoding is an
/// exhaustive match instead of string re-derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
	/// No live union member.
	Null,
	/// Boolean member.
	Boolean,
	/// Signed integer member.
	NumberInteger,
	/// Unsigned integer member.
	NumberUnsigned,
	/// Floating-point member.
	NumberFloat,
	/// Owned string member.
	String,
	/// Array container member.
	Array,
	/// Object container member.
	Object,
	/// Binary blob member.
	Binary,
}

impl StorageKind {
	/// Map a qualified enumerator inner name to its storage kind.
	///
	/// Requires the fixed `detail::value_t::` prefix; anything outside the
	/// closed enumerator set is `None`, no fuzzy matching.
	pub fn from_qualified(inner: &str) -> Option<StorageKind> {
		let name = inner.strip_prefix(VALUE_T_PREFIX)?;
		let kind = match name {
			"null" => StorageKind::Null,
			"boolean" => StorageKind::Boolean,
			"number_integer" => StorageKind::NumberInteger,
			"number_unsigned" => StorageKind::NumberUnsigned,
			"number_float" => StorageKind::NumberFloat,
			"string" => StorageKind::String,
			"array" => StorageKind::Array,
			"object" => StorageKind::Object,
			"binary" => StorageKind::Binary,
			_ => return None,
		};
		Some(kind)
	}

	/// Union member field holding the live value for this kind.
	///
	/// `Null` carries no live member; reading the union for it would be
	/// undefined, so it maps to `None`.
	pub fn member_name(self) -> Option<&'static str> {
		match self {
			StorageKind::Null => None,
			StorageKind::Boolean => Some("boolean"),
			StorageKind::NumberInteger => Some("number_integer"),
			StorageKind::NumberUnsigned => Some("number_unsigned"),
			StorageKind::NumberFloat => Some("number_float"),
			StorageKind::String => Some("string"),
			StorageKind::Array => Some("array"),
			StorageKind::Object => Some("object"),
			StorageKind::Binary => Some("binary"),
		}
	}
}

/// Decode a generic tagged JSON value into a display model.
///
/// Declines with `None` when the value is not a `basic_json` instance or
/// its discriminant falls outside the closed storage-kind set. Failures
/// reading the selected union member fall back to a scalar display of the
/// discriminant's own text; nothing here errors out of the inspection.
pub fn decode_json(dbg: &dyn Debugger, value: &ValueHandle) -> Option<DisplayModel> {
	let type_name = value.type_name().ok()?;
	let matched = match_type_name(&type_name)?;
	if !matched.inner.starts_with(BASIC_JSON_PREFIX) || !matched.inner.ends_with('>') {
		return None;
	}

	let m_data = value.field("m_data").ok()?;
	let m_type = m_data.field("m_type").ok()?;
	let tag_text = m_type.text().ok()?;
	let kind = match_type_name(&tag_text).and_then(|tag| StorageKind::from_qualified(tag.inner))?;

	let Some(member_name) = kind.member_name() else {
		return format_scalar(m_type.as_ref(), true).ok().map(DisplayModel::scalar);
	};

	match decode_member(dbg, &m_data, member_name) {
		Ok(model) => Some(model),
		Err(_) => Some(DisplayModel::scalar(tag_text)),
	}
}

/// Read the live union member and turn it into a display model.
///
/// Pointer members hold container payloads; those dereference and
/// re-dispatch so the pointee displays via its own layout.
fn decode_member(dbg: &dyn Debugger, m_data: &ValueHandle, member_name: &'static str) -> Result<DisplayModel> {
	let member = m_data.field("m_value")?.field(member_name)?;

	if member.kind() == ValueKind::Pointer {
		let target = member.deref()?;
		return Ok(display_value(dbg, &target));
	}

	Ok(DisplayModel::scalar(format_scalar(member.as_ref(), false)?))
}

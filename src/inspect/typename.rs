/// Library namespace every decorated type name starts with.
const NAMESPACE_ROOT: &str = "nlohmann";
/// Marker opening the optional ABI namespace segment.
const ABI_MARKER: &str = "json_abi";
/// Opens the version suffix inside the ABI segment.
const VERSION_MARKER: &str = "_v";

/// Parsed components of an ABI/version-decorated library type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeNameMatch<'a> {
	/// ABI tag characters following the marker, when present.
	pub tags: Option<&'a str>,
	/// Inline namespace version triple, when present.
	pub version: Option<(u32, u32, u32)>,
	/// Logical type name with namespace decoration removed.
	pub inner: &'a str,
}

/// Match a full type name against the decorated library naming scheme.
///
/// Accepts `nlohmann::<inner>`, `nlohmann::json_abi<tags>::<inner>`, and
/// `nlohmann::json_abi<tags>_v<major>_<minor>_<patch>::<inner>`. The
/// optional segments never change what `inner` captures.
pub fn match_type_name(raw: &str) -> Option<TypeNameMatch<'_>> {
	let rest = raw.strip_prefix(NAMESPACE_ROOT)?.strip_prefix("::")?;
	if rest.is_empty() {
		return None;
	}

	if let Some(decorated) = split_abi_segment(rest) {
		return Some(decorated);
	}

	Some(TypeNameMatch {
		tags: None,
		version: None,
		inner: rest,
	})
}

/// Recognize a leading ABI namespace segment and split it off `rest`.
///
/// The segment only counts as ABI decoration when everything between the
/// marker and the next `::` is word characters; otherwise the caller keeps
/// the whole remainder as the inner name.
fn split_abi_segment(rest: &str) -> Option<TypeNameMatch<'_>> {
	let tail = rest.strip_prefix(ABI_MARKER)?;
	let (segment, inner) = tail.split_once("::")?;
	if inner.is_empty() || !segment.chars().all(|c| c.is_alphanumeric() || c == '_') {
		return None;
	}

	let (tags, version) = match split_version_suffix(segment) {
		Some((head, version)) => (head, Some(version)),
		None => (segment, None),
	};

	Some(TypeNameMatch {
		tags: (!tags.is_empty()).then_some(tags),
		version,
		inner,
	})
}

/// Split a trailing `_v<major>_<minor>_<patch>` suffix off an ABI segment.
fn split_version_suffix(segment: &str) -> Option<(&str, (u32, u32, u32))> {
	let at = segment.rfind(VERSION_MARKER)?;
	let (head, tail) = segment.split_at(at);

	let mut digits = tail.strip_prefix(VERSION_MARKER)?.splitn(3, '_');
	let major = digits.next()?.parse().ok()?;
	let minor = digits.next()?.parse().ok()?;
	let patch = digits.next()?.parse().ok()?;

	Some((head, (major, minor, patch)))
}

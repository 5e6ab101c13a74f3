use jsonlens::inspect::{DisplayHint, MockDebugger, MockValue, ValueHandle, document_or_json_lookup};

const JSON_TYPE: &str = "nlohmann::json_abi_v3_11_3::basic_json<std::map, std::vector, std::__cxx11::basic_string<char, std::char_traits<char>, std::allocator<char> >, bool, long, unsigned long, double, std::allocator, nlohmann::adl_serializer, std::vector<unsigned char, std::allocator<unsigned char> >, void>";
const DATA_TYPE: &str = "nlohmann::json_abi_v3_11_3::basic_json<std::map, std::vector>::data";
const UNION_TYPE: &str = "nlohmann::json_abi_v3_11_3::basic_json<std::map, std::vector>::json_value";
const VALUE_T_TYPE: &str = "nlohmann::json_abi_v3_11_3::detail::value_t";

fn storage_tag(enumerant: &str) -> ValueHandle {
	MockValue::scalar(VALUE_T_TYPE, &format!("nlohmann::json_abi_v3_11_3::detail::value_t::{enumerant}"))
}

fn basic_json(enumerant: &str, member: Option<ValueHandle>) -> ValueHandle {
	let mut union_fields = Vec::new();
	if let Some(member) = member {
		union_fields.push((enumerant, member));
	}

	MockValue::struct_value(
		JSON_TYPE,
		vec![(
			"m_data",
			MockValue::struct_value(
				DATA_TYPE,
				vec![
					("m_type", storage_tag(enumerant)),
					("m_value", MockValue::struct_value(UNION_TYPE, union_fields)),
				],
			),
		)],
	)
}

#[test]
fn null_kind_always_displays_null() {
	let dbg = MockDebugger::new();
	let value = basic_json("null", None);

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(model.summary(), "null");
	assert!(model.children().is_empty());
	assert_eq!(model.hint(), None);
}

#[test]
fn integer_member_keeps_native_text() {
	let dbg = MockDebugger::new();
	let value = basic_json("number_integer", Some(MockValue::scalar("long", "42")));

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(model.summary(), "42");
}

#[test]
fn unsigned_member_keeps_native_text() {
	let dbg = MockDebugger::new();
	let value = basic_json("number_unsigned", Some(MockValue::scalar("unsigned long", "18446744073709551615")));

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(model.summary(), "18446744073709551615");
}

#[test]
fn boolean_member_keeps_native_text() {
	let dbg = MockDebugger::new();
	let value = basic_json("boolean", Some(MockValue::scalar("bool", "true")));

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(model.summary(), "true");
}

#[test]
fn float_member_is_canonicalized() {
	let dbg = MockDebugger::new();

	let pi = basic_json("number_float", Some(MockValue::float("double", 3.14)));
	let model = document_or_json_lookup(&dbg, &pi).expect("json value is claimed");
	assert_eq!(model.summary(), "3.14");

	let whole = basic_json("number_float", Some(MockValue::float("double", 3.0)));
	let model = document_or_json_lookup(&dbg, &whole).expect("json value is claimed");
	assert_eq!(model.summary(), "3.0");
}

#[test]
fn string_member_derefs_to_pointee_display() {
	let dbg = MockDebugger::new();
	let pointee = MockValue::scalar("std::__cxx11::basic_string<char>", "\"hello\"");
	let value = basic_json("string", Some(MockValue::pointer("std::__cxx11::basic_string<char> *", Some(pointee))));

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(model.summary(), "\"hello\"");
}

#[test]
fn object_member_derefs_to_container_display() {
	let dbg = MockDebugger::new();
	let pointee = MockValue::scalar("std::map<std::__cxx11::basic_string<char>, nlohmann::json>", "std::map with 2 elements");
	let value = basic_json("object", Some(MockValue::pointer("std::map<std::__cxx11::basic_string<char>, nlohmann::json> *", Some(pointee))));

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(model.summary(), "std::map with 2 elements");
}

#[test]
fn undecorated_type_name_is_recognized() {
	let dbg = MockDebugger::new();
	let plain = MockValue::struct_value(
		"nlohmann::basic_json<std::map, std::vector>",
		vec![(
			"m_data",
			MockValue::struct_value(
				DATA_TYPE,
				vec![
					("m_type", storage_tag("null")),
					("m_value", MockValue::struct_value(UNION_TYPE, Vec::new())),
				],
			),
		)],
	);

	let model = document_or_json_lookup(&dbg, &plain).expect("json value is claimed");
	assert_eq!(model.summary(), "null");
}

#[test]
fn missing_member_falls_back_to_discriminant_text() {
	let dbg = MockDebugger::new();
	let value = basic_json("boolean", None);

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(model.summary(), "nlohmann::json_abi_v3_11_3::detail::value_t::boolean");
}

#[test]
fn unknown_enumerant_declines() {
	let dbg = MockDebugger::new();
	let value = basic_json("widget", Some(MockValue::scalar("int", "1")));

	assert!(document_or_json_lookup(&dbg, &value).is_none());
}

#[test]
fn foreign_types_decline() {
	let dbg = MockDebugger::new();

	assert!(document_or_json_lookup(&dbg, &MockValue::scalar("int", "7")).is_none());
	assert!(document_or_json_lookup(&dbg, &MockValue::scalar("std::vector<int>", "{1, 2}")).is_none());
	assert!(document_or_json_lookup(&dbg, &MockValue::scalar("nlohmann::json_pointer<std::string>", "/a/b")).is_none());
}

#[test]
fn repeated_lookup_is_idempotent() {
	let dbg = MockDebugger::new();
	let value = basic_json("number_integer", Some(MockValue::scalar("long", "42")));

	let first = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	let second = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_eq!(first.summary(), second.summary());
	assert_eq!(first.children().len(), second.children().len());
	assert_eq!(first.hint(), second.hint());
}

#[test]
fn json_display_is_map_free_for_scalars() {
	let dbg = MockDebugger::new();
	let value = basic_json("number_integer", Some(MockValue::scalar("long", "0")));

	let model = document_or_json_lookup(&dbg, &value).expect("json value is claimed");
	assert_ne!(model.hint(), Some(DisplayHint::Map));
	assert!(model.children().is_empty());
}

use super::KeywordResult;
use crate::{
    ecma262,
    error::SchemaError,
    state::ValidationState,
    validator::{validate_value, Scope},
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    scope: &Scope<'_>,
    parent: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult {
    if !(value.is_object() || value.is_boolean()) {
        return Err(SchemaError::malformed("additionalProperties", "6.20"));
    }
    let item = match instance.as_object() {
        Some(item) => item,
        None => return Ok(()),
    };
    // "Additional" is relative to the schema object this keyword lives in:
    // its own `properties` names and `patternProperties` regexes, never the
    // root schema's.
    let properties = parent.get("properties").and_then(Value::as_object);
    let mut patterns = Vec::new();
    if let Some(Value::Object(pattern_properties)) = parent.get("patternProperties") {
        for pattern in pattern_properties.keys() {
            match ecma262::convert_regex(pattern) {
                Ok(pattern) => patterns.push(pattern),
                Err(_) => return Err(SchemaError::malformed("patternProperties", "6.19")),
            }
        }
    }
    for (property, property_value) in item {
        if properties.map_or(false, |properties| properties.contains_key(property)) {
            continue;
        }
        if patterns
            .iter()
            .any(|pattern| ecma262::is_match(pattern, property))
        {
            continue;
        }
        let mark = state.descend(property);
        let result = validate_value(scope, value, property_value, state);
        state.ascend(mark);
        result?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, ErrorTag};
    use serde_json::json;

    #[test]
    fn covers_properties_not_otherwise_addressed() {
        let schema = json!({
            "properties": {"a": {}},
            "additionalProperties": {"type": "integer"}
        });
        tests_util::is_valid(&schema, &json!({"a": "anything", "b": 3}));
        tests_util::expect_tag(&schema, &json!({"b": "x"}), "$.b", ErrorTag::Type);
    }

    #[test]
    fn pattern_matched_properties_are_not_additional() {
        let schema = json!({
            "patternProperties": {"^a": {"type": "integer"}},
            "additionalProperties": false
        });
        tests_util::is_valid(&schema, &json!({"a1": 1, "a2": 2}));
        tests_util::expect_tag(&schema, &json!({"a1": 1, "b": 2}), "$.b", ErrorTag::FalseSchema);
    }

    #[test]
    fn adjacency_is_per_schema_object_not_per_root() {
        // The nested schema's `additionalProperties` must consult the
        // nested `properties`, not the root's.
        let schema = json!({
            "properties": {
                "outer": {
                    "properties": {"inner": {}},
                    "additionalProperties": false
                }
            }
        });
        tests_util::is_valid(&schema, &json!({"outer": {"inner": 1}}));
        tests_util::expect_tag(
            &schema,
            &json!({"outer": {"outer": 1}}),
            "$.outer.outer",
            ErrorTag::FalseSchema,
        );
    }

    #[test]
    fn ignores_non_objects() {
        let schema = json!({"additionalProperties": false});
        tests_util::is_valid(&schema, &json!([1, 2]));
    }

    #[test]
    fn non_schema_value_is_fatal() {
        tests_util::is_schema_error(&json!({"additionalProperties": "no"}), &json!({}));
    }
}

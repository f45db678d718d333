use super::KeywordResult;
use crate::{
    error::SchemaError,
    state::ValidationState,
    validator::{validate_value, Scope},
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    scope: &Scope<'_>,
    _: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult {
    let properties = match value.as_object() {
        Some(properties) => properties,
        None => return Err(SchemaError::malformed("properties", "6.18")),
    };
    let item = match instance.as_object() {
        Some(item) => item,
        None => return Ok(()),
    };
    // The object map is sorted by key, so sub-errors come out in a
    // reproducible order
    for (property, subschema) in properties {
        if let Some(property_value) = item.get(property) {
            let mark = state.descend(property);
            let result = validate_value(scope, subschema, property_value, state);
            state.ascend(mark);
            result?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, ErrorTag};
    use serde_json::json;

    #[test]
    fn listed_properties_validate_against_their_schemas() {
        let schema = json!({"properties": {"a": {"type": "string"}, "b": {"type": "number"}}});
        tests_util::is_valid(&schema, &json!({"a": "x", "b": 3}));
        tests_util::expect_tag(&schema, &json!({"a": 1, "b": 3}), "$.a", ErrorTag::Type);
    }

    #[test]
    fn absent_properties_are_unconstrained() {
        let schema = json!({"properties": {"a": {"type": "string"}}});
        tests_util::is_valid(&schema, &json!({}));
        tests_util::is_valid(&schema, &json!({"b": 1}));
    }

    #[test]
    fn paths_nest() {
        let schema = json!({
            "properties": {"a": {"properties": {"b": {"type": "integer"}}}}
        });
        tests_util::expect_tag(&schema, &json!({"a": {"b": "x"}}), "$.a.b", ErrorTag::Type);
    }

    #[test]
    fn ignores_non_objects() {
        let schema = json!({"properties": {"a": {"type": "string"}}});
        tests_util::is_valid(&schema, &json!([1, 2]));
    }

    #[test]
    fn non_object_value_is_fatal() {
        tests_util::is_schema_error(&json!({"properties": ["a"]}), &json!({}));
    }
}

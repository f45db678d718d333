use super::KeywordResult;
use crate::{
    error::{ErrorTag, SchemaError},
    state::ValidationState,
    validator::Scope,
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    _: &Scope<'_>,
    _: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult {
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(SchemaError::malformed("required", "6.17")),
    };
    let mut required = Vec::with_capacity(items.len());
    for item in items {
        match item {
            // unique strings only
            Value::String(name) if !required.contains(&name) => required.push(name),
            _ => return Err(SchemaError::malformed("required", "6.17")),
        }
    }
    if let Value::Object(item) = instance {
        for property in required {
            if !item.contains_key(property) {
                // One error per missing property, at the property's own path
                let mark = state.descend(property);
                state.add_error(ErrorTag::Required);
                state.ascend(mark);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, ErrorTag};
    use serde_json::json;

    #[test]
    fn every_listed_property_must_be_present() {
        let schema = json!({"required": ["a", "b"]});
        tests_util::is_valid(&schema, &json!({"a": 1, "b": 2, "c": 3}));
        tests_util::expect_tag(&schema, &json!({"a": 1}), "$.b", ErrorTag::Required);
    }

    #[test]
    fn reports_each_missing_property_separately() {
        let schema = json!({"required": ["a", "b"]});
        let validation = crate::validate(&schema, &json!({})).unwrap();
        assert_eq!(validation.errors()["$.a"], vec![ErrorTag::Required]);
        assert_eq!(validation.errors()["$.b"], vec![ErrorTag::Required]);
    }

    #[test]
    fn ignores_non_objects() {
        tests_util::is_valid(&json!({"required": ["a"]}), &json!([1]));
    }

    #[test]
    fn duplicates_and_non_strings_are_fatal() {
        tests_util::is_schema_error(&json!({"required": ["a", "a"]}), &json!({}));
        tests_util::is_schema_error(&json!({"required": [1]}), &json!({}));
        tests_util::is_schema_error(&json!({"required": "a"}), &json!({}));
    }
}

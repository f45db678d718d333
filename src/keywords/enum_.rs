use super::KeywordResult;
use crate::{
    error::{ErrorTag, SchemaError},
    helpers,
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
    let options = match value {
        Value::Array(options) if !options.is_empty() => options,
        _ => return Err(SchemaError::malformed("enum", "6.23")),
    };
    if !options.iter().any(|option| helpers::equal(option, instance)) {
        state.add_error(ErrorTag::Enum);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn membership_is_canonical_equality() {
        let schema = json!({"enum": [1, "two", {"three": 3}]});
        tests_util::is_valid(&schema, &json!(1));
        tests_util::is_valid(&schema, &json!(1.0));
        tests_util::is_valid(&schema, &json!({"three": 3}));
        tests_util::is_not_valid(&schema, &json!(true));
        tests_util::is_not_valid(&schema, &json!("three"));
    }

    #[test]
    fn empty_enum_is_fatal() {
        tests_util::is_schema_error(&json!({"enum": []}), &json!(1));
        tests_util::is_schema_error(&json!({"enum": "one"}), &json!(1));
    }
}

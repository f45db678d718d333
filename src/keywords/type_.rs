use super::KeywordResult;
use crate::{
    error::{ErrorTag, SchemaError},
    primitive_type::PrimitiveType,
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
    match value {
        Value::String(name) => {
            let expected = parse_type(name)?;
            if !expected.contains(instance) {
                state.add_error(ErrorTag::Type);
            }
            Ok(())
        }
        Value::Array(names) if !names.is_empty() => {
            let mut types = Vec::with_capacity(names.len());
            for name in names {
                match name {
                    // unique type names only
                    Value::String(name) => {
                        let expected = parse_type(name)?;
                        if types.contains(&expected) {
                            return Err(SchemaError::malformed("type", "6.25"));
                        }
                        types.push(expected);
                    }
                    _ => return Err(SchemaError::malformed("type", "6.25")),
                }
            }
            if !types.iter().any(|expected| expected.contains(instance)) {
                state.add_error(ErrorTag::Type);
            }
            Ok(())
        }
        _ => Err(SchemaError::malformed("type", "6.25")),
    }
}

fn parse_type(name: &str) -> Result<PrimitiveType, SchemaError> {
    PrimitiveType::try_from(name).map_err(|_| SchemaError::malformed("type", "6.25"))
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, ErrorTag};
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!("integer"), json!(1), true)]
    #[test_case(json!("integer"), json!(1.0), true; "a zero fraction float is an integer")]
    #[test_case(json!("integer"), json!(1.5), false)]
    #[test_case(json!("number"), json!(1), true; "every integer is a number")]
    #[test_case(json!("number"), json!(1.5), true)]
    #[test_case(json!("boolean"), json!(1), false)]
    #[test_case(json!("null"), json!(null), true)]
    #[test_case(json!("string"), json!("x"), true)]
    #[test_case(json!(["integer", "string"]), json!("x"), true)]
    #[test_case(json!(["integer", "string"]), json!(1), true)]
    #[test_case(json!(["integer", "string"]), json!(null), false)]
    fn type_assertions(type_value: serde_json::Value, instance: serde_json::Value, expected: bool) {
        let schema = json!({ "type": type_value });
        if expected {
            tests_util::is_valid(&schema, &instance);
        } else {
            tests_util::is_not_valid(&schema, &instance);
        }
    }

    #[test]
    fn failure_is_tagged_at_the_current_path() {
        tests_util::expect_tag(&json!({"type": "integer"}), &json!("x"), "$", ErrorTag::Type);
    }

    #[test]
    fn malformed_type_values_are_fatal() {
        tests_util::is_schema_error(&json!({"type": "decimal"}), &json!(1));
        tests_util::is_schema_error(&json!({"type": []}), &json!(1));
        tests_util::is_schema_error(&json!({"type": ["integer", "integer"]}), &json!(1));
        tests_util::is_schema_error(&json!({"type": [1]}), &json!(1));
        tests_util::is_schema_error(&json!({"type": 12}), &json!(1));
    }
}

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
    let limit = match helpers::non_negative_integer(value) {
        Some(limit) => limit,
        None => return Err(SchemaError::malformed("maxLength", "6.6")),
    };
    if let Value::String(item) = instance {
        // Length is in Unicode code points, not bytes
        if (item.chars().count() as u64) > limit {
            state.add_error(ErrorTag::MaxLength);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn counts_code_points() {
        tests_util::is_valid(&json!({"maxLength": 2}), &json!("\u{1f4a9}\u{1f4a9}"));
        tests_util::is_not_valid(&json!({"maxLength": 2}), &json!("foo"));
    }

    #[test]
    fn ignores_non_strings() {
        tests_util::is_valid(&json!({"maxLength": 2}), &json!(100));
    }

    #[test]
    fn negative_or_fractional_limit_is_fatal() {
        tests_util::is_schema_error(&json!({"maxLength": -1}), &json!("x"));
        tests_util::is_schema_error(&json!({"maxLength": 1.5}), &json!("x"));
    }
}

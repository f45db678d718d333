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
    let limit = match value.as_f64() {
        Some(limit) => limit,
        None => return Err(SchemaError::malformed("maximum", "6.2")),
    };
    if let Some(item) = instance.as_f64() {
        if item > limit {
            state.add_error(ErrorTag::Maximum);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn bound_is_inclusive() {
        tests_util::is_valid(&json!({"maximum": 3.0}), &json!(3.0));
        tests_util::is_valid(&json!({"maximum": 3.0}), &json!(2.6));
        tests_util::is_not_valid(&json!({"maximum": 3.0}), &json!(3.5));
    }

    #[test]
    fn ignores_non_numbers() {
        tests_util::is_valid(&json!({"maximum": 3.0}), &json!("x"));
    }

    #[test]
    fn non_numeric_limit_is_fatal() {
        tests_util::is_schema_error(&json!({"maximum": "3"}), &json!(1));
    }
}

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
        None => return Err(SchemaError::malformed("minimum", "6.4")),
    };
    if let Some(item) = instance.as_f64() {
        if item < limit {
            state.add_error(ErrorTag::Minimum);
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
        tests_util::is_valid(&json!({"minimum": 1.1}), &json!(1.1));
        tests_util::is_valid(&json!({"minimum": 1.1}), &json!(2));
        tests_util::is_not_valid(&json!({"minimum": 1.1}), &json!(0.6));
    }

    #[test]
    fn ignores_non_numbers() {
        tests_util::is_valid(&json!({"minimum": 1.1}), &json!("x"));
    }

    #[test]
    fn non_numeric_limit_is_fatal() {
        tests_util::is_schema_error(&json!({"minimum": [1]}), &json!(1));
    }
}

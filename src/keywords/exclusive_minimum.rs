use super::KeywordResult;
use crate::{
    error::{ErrorTag, SchemaError},
    state::ValidationState,
    validator::Scope,
};
use serde_json::{Map, Value};

// Draft-6 form: a number, not the Draft-4 boolean modifier.
pub(crate) fn validate(
    _: &Scope<'_>,
    _: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult {
    let limit = match value.as_f64() {
        Some(limit) => limit,
        None => return Err(SchemaError::malformed("exclusiveMinimum", "6.5")),
    };
    if let Some(item) = instance.as_f64() {
        if item <= limit {
            state.add_error(ErrorTag::ExclusiveMinimum);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn bound_is_exclusive() {
        tests_util::is_valid(&json!({"exclusiveMinimum": 1.1}), &json!(1.2));
        tests_util::is_not_valid(&json!({"exclusiveMinimum": 1.1}), &json!(1.1));
        tests_util::is_not_valid(&json!({"exclusiveMinimum": 1.1}), &json!(0.6));
    }

    #[test]
    fn draft_4_boolean_form_is_fatal() {
        tests_util::is_schema_error(&json!({"exclusiveMinimum": false}), &json!(1));
    }
}

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
        None => return Err(SchemaError::malformed("minProperties", "6.16")),
    };
    if let Value::Object(item) = instance {
        if (item.len() as u64) < limit {
            state.add_error(ErrorTag::MinProperties);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn bounds_the_property_count() {
        tests_util::is_valid(&json!({"minProperties": 1}), &json!({"a": 1}));
        tests_util::is_not_valid(&json!({"minProperties": 1}), &json!({}));
    }

    #[test]
    fn ignores_non_objects() {
        tests_util::is_valid(&json!({"minProperties": 1}), &json!(""));
    }
}

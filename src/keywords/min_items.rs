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
        None => return Err(SchemaError::malformed("minItems", "6.12")),
    };
    if let Value::Array(items) = instance {
        if (items.len() as u64) < limit {
            state.add_error(ErrorTag::MinItems);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn bounds_the_element_count() {
        tests_util::is_valid(&json!({"minItems": 1}), &json!([1]));
        tests_util::is_not_valid(&json!({"minItems": 1}), &json!([]));
    }

    #[test]
    fn ignores_non_arrays() {
        tests_util::is_valid(&json!({"minItems": 1}), &json!(""));
    }
}

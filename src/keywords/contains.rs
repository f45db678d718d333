use super::KeywordResult;
use crate::{
    error::{ErrorTag, SchemaError},
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
    if !(value.is_object() || value.is_boolean()) {
        return Err(SchemaError::malformed("contains", "6.14"));
    }
    let items = match instance.as_array() {
        Some(items) => items,
        None => return Ok(()),
    };
    for item in items {
        // Probe in a fork: element failures are not this keyword's errors
        let mut probe = state.fork();
        validate_value(scope, value, item, &mut probe)?;
        if probe.is_valid() {
            return Ok(());
        }
    }
    state.add_error(ErrorTag::Contains);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, ErrorTag};
    use serde_json::json;

    #[test]
    fn at_least_one_element_must_match() {
        let schema = json!({"contains": {"minimum": 5}});
        tests_util::is_valid(&schema, &json!([1, 2, 6]));
        tests_util::expect_tag(&schema, &json!([1, 2, 3]), "$", ErrorTag::Contains);
    }

    #[test]
    fn an_empty_array_contains_nothing() {
        tests_util::is_not_valid(&json!({"contains": true}), &json!([]));
    }

    #[test]
    fn failing_probes_leave_no_trace() {
        let schema = json!({"contains": {"type": "integer"}});
        let validation = crate::validate(&schema, &json!(["a", 1])).unwrap();
        assert!(validation.is_valid());
        assert!(validation.errors().is_empty());
    }

    #[test]
    fn ignores_non_arrays() {
        tests_util::is_valid(&json!({"contains": {"minimum": 5}}), &json!("no"));
    }
}

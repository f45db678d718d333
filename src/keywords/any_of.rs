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
    let subschemas = match value {
        Value::Array(subschemas) if !subschemas.is_empty() => subschemas,
        _ => return Err(SchemaError::malformed("anyOf", "6.27")),
    };
    for subschema in subschemas {
        // Branch failures are discarded; only total failure is an error
        let mut branch = state.fork();
        validate_value(scope, subschema, instance, &mut branch)?;
        if branch.is_valid() {
            return Ok(());
        }
    }
    state.add_error(ErrorTag::AnyOf);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, ErrorTag};
    use serde_json::json;

    #[test]
    fn one_holding_branch_suffices() {
        let schema = json!({"anyOf": [{"type": "integer"}, {"minimum": 2}]});
        tests_util::is_valid(&schema, &json!(1));
        tests_util::is_valid(&schema, &json!(2.5));
        tests_util::is_not_valid(&schema, &json!(1.5));
    }

    #[test]
    fn total_failure_records_a_single_tag() {
        let schema = json!({"anyOf": [{"type": "integer"}, {"type": "string"}]});
        let validation = crate::validate(&schema, &json!(null)).unwrap();
        assert_eq!(validation.errors()["$"], vec![ErrorTag::AnyOf]);
        assert_eq!(validation.errors().len(), 1);
    }

    #[test]
    fn empty_array_is_fatal() {
        tests_util::is_schema_error(&json!({"anyOf": []}), &json!(1));
    }
}

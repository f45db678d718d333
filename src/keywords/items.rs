use super::KeywordResult;
use crate::{
    error::SchemaError,
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
    match value {
        // Array form: element at index i validates against items[i];
        // surplus elements are left to `additionalItems`.
        Value::Array(subschemas) => {
            let items = match instance.as_array() {
                Some(items) => items,
                None => return Ok(()),
            };
            for (index, (item, subschema)) in items.iter().zip(subschemas.iter()).enumerate() {
                if subschema.is_null() {
                    // A missing position constrains nothing
                    continue;
                }
                let mark = state.descend_index(index);
                let result = validate_value(scope, subschema, item, state);
                state.ascend(mark);
                result?;
            }
            Ok(())
        }
        // Schema form: every element validates against it.
        Value::Object(_) | Value::Bool(_) => {
            let items = match instance.as_array() {
                Some(items) => items,
                None => return Ok(()),
            };
            for (index, item) in items.iter().enumerate() {
                let mark = state.descend_index(index);
                let result = validate_value(scope, value, item, state);
                state.ascend(mark);
                result?;
            }
            Ok(())
        }
        _ => Err(SchemaError::malformed("items", "6.9")),
    }
}

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
    let subschemas = match value {
        Value::Array(subschemas) if !subschemas.is_empty() => subschemas,
        _ => return Err(SchemaError::malformed("allOf", "6.26")),
    };
    // Every branch must hold, so branch errors propagate directly
    for subschema in subschemas {
        validate_value(scope, subschema, instance, state)?;
    }
    Ok(())
}

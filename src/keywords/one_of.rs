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
        _ => return Err(SchemaError::malformed("oneOf", "6.28")),
    };
    let mut valid = 0;
    for subschema in subschemas {
        let mut branch = state.fork();
        validate_value(scope, subschema, instance, &mut branch)?;
        if branch.is_valid() {
            valid += 1;
            if valid > 1 {
                // A second valid branch already settles the outcome
                break;
            }
        }
    }
    if valid != 1 {
        state.add_error(ErrorTag::OneOf);
    }
    Ok(())
}

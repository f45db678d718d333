use super::KeywordResult;
use crate::{
    ecma262,
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
    let patterns = match value.as_object() {
        Some(patterns) => patterns,
        None => return Err(SchemaError::malformed("patternProperties", "6.19")),
    };
    let item = match instance.as_object() {
        Some(item) => item,
        None => return Ok(()),
    };
    for (pattern, subschema) in patterns {
        let pattern = match ecma262::convert_regex(pattern) {
            Ok(pattern) => pattern,
            Err(_) => return Err(SchemaError::malformed("patternProperties", "6.19")),
        };
        for (property, property_value) in item {
            if ecma262::is_match(&pattern, property) {
                let mark = state.descend(property);
                let result = validate_value(scope, subschema, property_value, state);
                state.ascend(mark);
                result?;
            }
        }
    }
    Ok(())
}

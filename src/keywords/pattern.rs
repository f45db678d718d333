use super::KeywordResult;
use crate::{
    ecma262,
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
    let pattern = match value {
        Value::String(pattern) => match ecma262::convert_regex(pattern) {
            Ok(pattern) => pattern,
            Err(_) => return Err(SchemaError::malformed("pattern", "6.8")),
        },
        _ => return Err(SchemaError::malformed("pattern", "6.8")),
    };
    if let Value::String(item) = instance {
        if !ecma262::is_match(&pattern, item) {
            state.add_error(ErrorTag::Pattern);
        }
    }
    Ok(())
}

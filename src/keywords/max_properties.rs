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
        None => return Err(SchemaError::malformed("maxProperties", "6.15")),
    };
    if let Value::Object(item) = instance {
        if (item.len() as u64) > limit {
            state.add_error(ErrorTag::MaxProperties);
        }
    }
    Ok(())
}

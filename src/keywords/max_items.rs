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
        None => return Err(SchemaError::malformed("maxItems", "6.11")),
    };
    if let Value::Array(items) = instance {
        if (items.len() as u64) > limit {
            state.add_error(ErrorTag::MaxItems);
        }
    }
    Ok(())
}

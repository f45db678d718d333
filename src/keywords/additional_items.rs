use super::KeywordResult;
use crate::{
    error::SchemaError,
    state::ValidationState,
    validator::{validate_value, Scope},
};
use serde_json::{Map, Value};

pub(crate) fn validate(
    scope: &Scope<'_>,
    parent: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult {
    if !(value.is_object() || value.is_boolean()) {
        return Err(SchemaError::malformed("additionalItems", "6.10"));
    }
    let items = match instance.as_array() {
        Some(items) => items,
        None => return Ok(()),
    };
    // Only meaningful when the adjacent `items` is an array of schemas;
    // with the schema form every element is already covered by `items`.
    let prefix = match parent.get("items") {
        Some(Value::Array(subschemas)) => subschemas.len(),
        _ => return Ok(()),
    };
    for (index, item) in items.iter().enumerate().skip(prefix) {
        let mark = state.descend_index(index);
        let result = validate_value(scope, value, item, state);
        state.ascend(mark);
        result?;
    }
    Ok(())
}

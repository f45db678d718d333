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
        return Err(SchemaError::malformed("propertyNames", "6.22"));
    }
    let item = match instance.as_object() {
        Some(item) => item,
        None => return Ok(()),
    };
    for property in item.keys() {
        // Each property name validates as a string instance; the probe's
        // own errors are discarded and replaced with a single tag at the
        // property's path
        let name = Value::String(property.clone());
        let mut probe = state.fork();
        validate_value(scope, value, &name, &mut probe)?;
        if !probe.is_valid() {
            let mark = state.descend(property);
            state.add_error(ErrorTag::PropertyNames);
            state.ascend(mark);
        }
    }
    Ok(())
}

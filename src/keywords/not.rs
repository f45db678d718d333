use super::KeywordResult;
use crate::{
    error::ErrorTag,
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
    // The negated schema's shape is checked by the recursive dispatch
    let mut negated = state.fork();
    validate_value(scope, value, instance, &mut negated)?;
    if negated.is_valid() {
        state.add_error(ErrorTag::Not);
    }
    Ok(())
}

use super::KeywordResult;
use crate::{
    error::ErrorTag,
    helpers,
    state::ValidationState,
    validator::Scope,
};
use serde_json::{Map, Value};

// Any JSON value is a legal `const`, so there is no shape to check.
pub(crate) fn validate(
    _: &Scope<'_>,
    _: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult {
    if !helpers::equal(value, instance) {
        state.add_error(ErrorTag::Const);
    }
    Ok(())
}

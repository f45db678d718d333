use super::KeywordResult;
use crate::{error::SchemaError, state::ValidationState, validator::Scope};
use serde_json::{Map, Value};

// Structural only: `definitions` holds schemas for `$ref` to point at and
// never validates the instance itself.
pub(crate) fn validate(
    _: &Scope<'_>,
    _: &Map<String, Value>,
    value: &Value,
    _: &Value,
    _: &mut ValidationState,
) -> KeywordResult {
    if value.is_object() {
        Ok(())
    } else {
        Err(SchemaError::malformed("definitions", "7.1"))
    }
}

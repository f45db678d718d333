use super::KeywordResult;
use crate::{
    error::{ErrorTag, SchemaError},
    state::ValidationState,
    validator::Scope,
};
use fraction::{BigFraction, BigUint};
use serde_json::{Map, Value};

pub(crate) fn validate(
    _: &Scope<'_>,
    _: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult {
    let multiple_of = match value.as_f64() {
        Some(multiple_of) if multiple_of > 0. => multiple_of,
        _ => return Err(SchemaError::malformed("multipleOf", "6.1")),
    };
    let item = match instance.as_f64() {
        Some(item) => item,
        None => return Ok(()),
    };
    let is_multiple = if multiple_of.fract() == 0. {
        // As the divisor has its fractional part as zero, then any value with a non-zero
        // fractional part can't be a multiple of this divisor, therefore it is short-circuited
        item.fract() == 0. && (item % multiple_of) == 0.
    } else {
        let remainder = (item / multiple_of) % 1.;
        if remainder.is_nan() {
            // The quotient is not finite; fall back to exact arithmetic.
            // Involves heap allocations via the underlying `BigUint` type
            let fraction = BigFraction::from(item) / BigFraction::from(multiple_of);
            fraction
                .denom()
                .map_or(true, |denom| denom == &BigUint::from(1_u8))
        } else {
            remainder < f64::EPSILON
        }
    };
    if !is_multiple {
        state.add_error(ErrorTag::MultipleOf);
    }
    Ok(())
}

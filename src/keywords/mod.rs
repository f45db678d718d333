pub(crate) mod additional_items;
pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod definitions;
pub(crate) mod dependencies;
pub(crate) mod enum_;
pub(crate) mod exclusive_maximum;
pub(crate) mod exclusive_minimum;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod required;
pub(crate) mod type_;
pub(crate) mod unique_items;

use crate::{error::SchemaError, state::ValidationState, validator::Scope};
use serde_json::{Map, Value};

pub(crate) type KeywordResult = Result<(), SchemaError>;

/// A keyword handler. Every handler follows the same template: shape-check
/// its keyword value (fatal on violation), succeed silently when the
/// instance's runtime type is outside the keyword's domain, and otherwise
/// assert, recording a tag at the current path on failure.
///
/// `parent` is the schema object the keyword was found in; the
/// adjacency-sensitive keywords read their siblings from it.
pub(crate) type Handler = fn(
    scope: &Scope<'_>,
    parent: &Map<String, Value>,
    value: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> KeywordResult;

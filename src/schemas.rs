use crate::keywords::{self, Handler};

/// The Draft-6 keyword table: maps a keyword present in a schema object to
/// its handler. Built once at compile time as a plain match; unknown
/// keywords get `None` and are ignored by the dispatcher.
pub(crate) fn handler_for(keyword: &str) -> Option<Handler> {
    match keyword {
        "additionalItems" => Some(keywords::additional_items::validate),
        "additionalProperties" => Some(keywords::additional_properties::validate),
        "allOf" => Some(keywords::all_of::validate),
        "anyOf" => Some(keywords::any_of::validate),
        "const" => Some(keywords::const_::validate),
        "contains" => Some(keywords::contains::validate),
        "definitions" => Some(keywords::definitions::validate),
        "dependencies" => Some(keywords::dependencies::validate),
        "enum" => Some(keywords::enum_::validate),
        "exclusiveMaximum" => Some(keywords::exclusive_maximum::validate),
        "exclusiveMinimum" => Some(keywords::exclusive_minimum::validate),
        "items" => Some(keywords::items::validate),
        "maximum" => Some(keywords::maximum::validate),
        "maxItems" => Some(keywords::max_items::validate),
        "maxLength" => Some(keywords::max_length::validate),
        "maxProperties" => Some(keywords::max_properties::validate),
        "minimum" => Some(keywords::minimum::validate),
        "minItems" => Some(keywords::min_items::validate),
        "minLength" => Some(keywords::min_length::validate),
        "minProperties" => Some(keywords::min_properties::validate),
        "multipleOf" => Some(keywords::multiple_of::validate),
        "not" => Some(keywords::not::validate),
        "oneOf" => Some(keywords::one_of::validate),
        "pattern" => Some(keywords::pattern::validate),
        "patternProperties" => Some(keywords::pattern_properties::validate),
        "properties" => Some(keywords::properties::validate),
        "propertyNames" => Some(keywords::property_names::validate),
        "required" => Some(keywords::required::validate),
        "type" => Some(keywords::type_::validate),
        "uniqueItems" => Some(keywords::unique_items::validate),
        // Annotations: recognized, never validating.
        // "$id" | "$schema" | "title" | "description" | "default" | "examples"
        _ => None,
    }
}

use std::{error, fmt};

/// Assertion keyword that rejected a part of the instance.
///
/// Tags display as the exact Draft-6 keyword name; the boolean `false`
/// schema displays as `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorTag {
    /// The value is not valid under any of the given schemas.
    AnyOf,
    /// The value does not match the expected constant.
    Const,
    /// The array contains no element conforming to the given schema.
    Contains,
    /// A property named in a dependency is missing.
    Dependencies,
    /// The value does not match any of the specified options.
    Enum,
    /// The number is not strictly below the limit.
    ExclusiveMaximum,
    /// The number is not strictly above the limit.
    ExclusiveMinimum,
    /// Everything is invalid for the `false` schema.
    FalseSchema,
    /// Too many items in an array.
    MaxItems,
    /// The string is too long.
    MaxLength,
    /// Too many properties in an object.
    MaxProperties,
    /// The number is too large.
    Maximum,
    /// Too few items in an array.
    MinItems,
    /// The string is too short.
    MinLength,
    /// Not enough properties in an object.
    MinProperties,
    /// The number is too small.
    Minimum,
    /// The number is not a multiple of the divisor.
    MultipleOf,
    /// The negated schema matched.
    Not,
    /// Zero or more than one of the given schemas matched.
    OneOf,
    /// The string does not match the pattern.
    Pattern,
    /// A property name fails the name schema.
    PropertyNames,
    /// A required property is missing.
    Required,
    /// The value does not have the required type.
    Type,
    /// The array has non-unique elements.
    UniqueItems,
}

impl ErrorTag {
    /// The keyword name as it appears in a schema.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorTag::AnyOf => "anyOf",
            ErrorTag::Const => "const",
            ErrorTag::Contains => "contains",
            ErrorTag::Dependencies => "dependencies",
            ErrorTag::Enum => "enum",
            ErrorTag::ExclusiveMaximum => "exclusiveMaximum",
            ErrorTag::ExclusiveMinimum => "exclusiveMinimum",
            ErrorTag::FalseSchema => "false",
            ErrorTag::MaxItems => "maxItems",
            ErrorTag::MaxLength => "maxLength",
            ErrorTag::MaxProperties => "maxProperties",
            ErrorTag::Maximum => "maximum",
            ErrorTag::MinItems => "minItems",
            ErrorTag::MinLength => "minLength",
            ErrorTag::MinProperties => "minProperties",
            ErrorTag::Minimum => "minimum",
            ErrorTag::MultipleOf => "multipleOf",
            ErrorTag::Not => "not",
            ErrorTag::OneOf => "oneOf",
            ErrorTag::Pattern => "pattern",
            ErrorTag::PropertyNames => "propertyNames",
            ErrorTag::Required => "required",
            ErrorTag::Type => "type",
            ErrorTag::UniqueItems => "uniqueItems",
        }
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fatal problem with the schema itself.
///
/// Unlike validation errors, these abort the whole `validate` call: a
/// malformed schema cannot meaningfully accept or reject anything.
#[derive(Debug)]
pub enum SchemaError {
    /// A keyword value does not have the shape its Draft-6 section requires.
    Malformed {
        /// The offending keyword.
        keyword: &'static str,
        /// Section of the json-schema-validation draft the shape comes from.
        section: &'static str,
    },
    /// The schema is neither an object nor a boolean.
    NotASchema,
    /// `$ref` does not resolve to a schema.
    InvalidReference {
        /// The reference as written in the schema.
        reference: String,
    },
    /// A remote document could not be fetched.
    #[cfg(feature = "reqwest")]
    Fetch {
        /// The reference being resolved.
        reference: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },
    /// A remote document is not valid JSON.
    #[cfg(feature = "reqwest")]
    RemoteParse {
        /// The reference being resolved.
        reference: String,
        /// The underlying parse error.
        source: serde_json::Error,
    },
}

/// Shortcuts for creation of specific error kinds.
impl SchemaError {
    pub(crate) fn malformed(keyword: &'static str, section: &'static str) -> SchemaError {
        SchemaError::Malformed { keyword, section }
    }

    pub(crate) fn invalid_reference(reference: &str) -> SchemaError {
        SchemaError::InvalidReference {
            reference: reference.to_string(),
        }
    }

    #[cfg(feature = "reqwest")]
    pub(crate) fn fetch(reference: &str, source: reqwest::Error) -> SchemaError {
        SchemaError::Fetch {
            reference: reference.to_string(),
            source,
        }
    }

    #[cfg(feature = "reqwest")]
    pub(crate) fn remote_parse(reference: &str, source: serde_json::Error) -> SchemaError {
        SchemaError::RemoteParse {
            reference: reference.to_string(),
            source,
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Malformed { keyword, section } => write!(
                f,
                "invalid '{}' value (json-schema-validation \u{a7}{})",
                keyword, section
            ),
            SchemaError::NotASchema => {
                f.write_str("schema must be an object or a boolean (json-schema-core \u{a7}4.4)")
            }
            SchemaError::InvalidReference { reference } => {
                write!(f, "invalid reference: {}", reference)
            }
            #[cfg(feature = "reqwest")]
            SchemaError::Fetch { reference, source } => {
                write!(f, "failed to fetch {}: {}", reference, source)
            }
            #[cfg(feature = "reqwest")]
            SchemaError::RemoteParse { reference, source } => {
                write!(f, "remote document {} is not valid JSON: {}", reference, source)
            }
        }
    }
}

impl error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            #[cfg(feature = "reqwest")]
            SchemaError::Fetch { source, .. } => Some(source),
            #[cfg(feature = "reqwest")]
            SchemaError::RemoteParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

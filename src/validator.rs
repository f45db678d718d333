//! The recursive keyword dispatcher. A schema is interpreted directly:
//! boolean schemas short-circuit, `$ref` restarts dispatch at its target,
//! and every other recognized keyword is handed to its handler from the
//! dispatch table, in lexicographic key order.
use crate::{
    error::{ErrorTag, SchemaError},
    resolver::{self, Resolved, Resolver},
    schemas,
    state::ValidationState,
};
use serde_json::Value;

/// Everything immutable a `validate` call needs: the schema root used to
/// resolve `#`-rooted references, and the resolver with its `$id` index.
/// The mutable counterpart is `ValidationState`.
pub(crate) struct Scope<'a> {
    pub(crate) root: &'a Value,
    pub(crate) resolver: Resolver<'a>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(root: &'a Value) -> Scope<'a> {
        Scope {
            root,
            resolver: Resolver::new(root),
        }
    }
}

/// Validate `instance` against `schema`, recording violations in `state`.
///
/// Handlers receive the schema object containing their keyword, so the
/// adjacency-sensitive keywords (`additionalProperties`, `additionalItems`)
/// see their sibling keywords rather than the root.
pub(crate) fn validate_value(
    scope: &Scope<'_>,
    schema: &Value,
    instance: &Value,
    state: &mut ValidationState,
) -> Result<(), SchemaError> {
    match schema {
        Value::Bool(true) => Ok(()),
        Value::Bool(false) => {
            state.add_error(ErrorTag::FalseSchema);
            Ok(())
        }
        Value::Object(object) => {
            if let Some(reference) = object.get("$ref") {
                // Draft-6 semantics: a schema object containing `$ref`
                // ignores its sibling keywords entirely.
                return match reference {
                    Value::String(reference) => {
                        match scope.resolver.resolve(reference, scope.root)? {
                            Resolved::Local(resolved) => {
                                validate_value(scope, resolved, instance, state)
                            }
                            Resolved::Remote { document, fragment } => {
                                // The fetched document is the schema root for
                                // everything beneath it.
                                let remote = Scope::new(&document);
                                let target = resolver::pointer(&document, &fragment)
                                    .ok_or_else(|| SchemaError::invalid_reference(reference))?;
                                validate_value(&remote, target, instance, state)
                            }
                        }
                    }
                    _ => Err(SchemaError::invalid_reference("$ref value is not a string")),
                };
            }
            // serde_json's default object representation is sorted by key,
            // which makes the dispatch order (and the error report) stable.
            for (keyword, value) in object {
                if let Some(handler) = schemas::handler_for(keyword) {
                    handler(scope, object, value, instance, state)?;
                }
            }
            Ok(())
        }
        _ => Err(SchemaError::NotASchema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(schema: &Value, instance: &Value) -> Result<bool, SchemaError> {
        let scope = Scope::new(schema);
        let mut state = ValidationState::new();
        validate_value(&scope, schema, instance, &mut state)?;
        Ok(state.is_valid())
    }

    #[test]
    fn boolean_schemas() {
        assert!(run(&json!(true), &json!(42)).unwrap());
        assert!(!run(&json!(false), &json!(42)).unwrap());
    }

    #[test]
    fn non_schema_is_fatal() {
        let schema = json!([1]);
        assert!(matches!(
            run(&schema, &json!(1)),
            Err(SchemaError::NotASchema)
        ));
    }

    #[test]
    fn ref_short_circuits_siblings() {
        // The sibling `type` must be ignored once `$ref` is present.
        let schema = json!({
            "definitions": {"any": true},
            "properties": {
                "a": {"$ref": "#/definitions/any", "type": "string"}
            }
        });
        assert!(run(&schema, &json!({"a": 42})).unwrap());
    }

    #[test]
    fn ref_resolves_through_chains() {
        let schema = json!({
            "$ref": "#/definitions/c",
            "definitions": {
                "a": {"type": "integer"},
                "b": {"$ref": "#/definitions/a"},
                "c": {"$ref": "#/definitions/b"}
            }
        });
        assert!(run(&schema, &json!(3)).unwrap());
        assert!(!run(&schema, &json!("3")).unwrap());
    }

    #[test]
    fn unresolvable_ref_is_fatal() {
        let schema = json!({"$ref": "#/definitions/nope"});
        assert!(matches!(
            run(&schema, &json!(1)),
            Err(SchemaError::InvalidReference { .. })
        ));
    }

    #[test]
    fn non_string_ref_is_fatal() {
        let schema = json!({"$ref": 17});
        assert!(matches!(
            run(&schema, &json!(1)),
            Err(SchemaError::InvalidReference { .. })
        ));
    }

    #[test]
    fn unknown_keywords_are_ignored() {
        let schema = json!({"x-note": {"type": "string"}, "minimum": 2});
        assert!(run(&schema, &json!(5)).unwrap());
        assert!(!run(&schema, &json!(1)).unwrap());
    }
}

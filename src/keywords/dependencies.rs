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
    let dependencies = match value.as_object() {
        Some(dependencies) => dependencies,
        None => return Err(SchemaError::malformed("dependencies", "6.21")),
    };
    // Every entry must be a property list of strings or a schema,
    // regardless of what the instance looks like
    for dependency in dependencies.values() {
        match dependency {
            Value::Array(required) => {
                if !required.iter().all(Value::is_string) {
                    return Err(SchemaError::malformed("dependencies", "6.21"));
                }
            }
            Value::Object(_) | Value::Bool(_) => {}
            _ => return Err(SchemaError::malformed("dependencies", "6.21")),
        }
    }
    let item = match instance.as_object() {
        Some(item) => item,
        None => return Ok(()),
    };
    for (property, dependency) in dependencies {
        if !item.contains_key(property) {
            continue;
        }
        match dependency {
            // Property-list form: every named property must also be present
            Value::Array(required) => {
                for requirement in required {
                    if let Value::String(name) = requirement {
                        if !item.contains_key(name) {
                            let mark = state.descend(name);
                            state.add_error(ErrorTag::Dependencies);
                            state.ascend(mark);
                        }
                    }
                }
            }
            // Schema form: the whole instance revalidates against it
            _ => validate_value(scope, dependency, instance, state)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, ErrorTag};
    use serde_json::json;

    #[test]
    fn property_list_form() {
        let schema = json!({"dependencies": {"bar": ["foo"]}});
        tests_util::is_valid(&schema, &json!({"foo": 1, "bar": 2}));
        tests_util::is_valid(&schema, &json!({"foo": 1}));
        tests_util::is_valid(&schema, &json!({}));
        tests_util::expect_tag(&schema, &json!({"bar": 2}), "$.foo", ErrorTag::Dependencies);
    }

    #[test]
    fn schema_form() {
        let schema = json!({
            "dependencies": {"bar": {"properties": {"foo": {"type": "integer"}}}}
        });
        tests_util::is_valid(&schema, &json!({"foo": 1, "bar": 2}));
        tests_util::is_valid(&schema, &json!({"foo": "quux"}));
        tests_util::expect_tag(
            &schema,
            &json!({"foo": "quux", "bar": 2}),
            "$.foo",
            ErrorTag::Type,
        );
    }

    #[test]
    fn boolean_subschemas() {
        let schema = json!({"dependencies": {"bar": false}});
        tests_util::is_valid(&schema, &json!({"foo": 1}));
        tests_util::expect_tag(&schema, &json!({"bar": 2}), "$", ErrorTag::FalseSchema);
    }

    #[test]
    fn ignores_non_objects() {
        tests_util::is_valid(&json!({"dependencies": {"bar": ["foo"]}}), &json!("bar"));
    }

    #[test]
    fn non_object_value_is_fatal() {
        tests_util::is_schema_error(&json!({"dependencies": ["bar"]}), &json!({}));
        tests_util::is_schema_error(&json!({"dependencies": {"bar": "foo"}}), &json!({}));
    }

    #[test]
    fn entry_shape_is_checked_before_instance_type() {
        // The shape of every entry is wrong with or without "bar" present
        let schema = json!({"dependencies": {"bar": [1]}});
        tests_util::is_schema_error(&schema, &json!({"bar": 2}));
        tests_util::is_schema_error(&schema, &json!({}));
        tests_util::is_schema_error(&schema, &json!("not an object"));
    }
}

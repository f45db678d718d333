//! Reference resolution. Implements the logic required by the `$ref`
//! keyword: fragment pointers into the current root, location-independent
//! `$id` anchors, and remote documents loaded via HTTP(S).
use crate::error::SchemaError;
use ahash::AHashMap;
#[cfg(feature = "reqwest")]
use parking_lot::RwLock;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use url::Url;

/// Where a reference landed.
#[derive(Debug)]
pub(crate) enum Resolved<'a> {
    /// A subschema of the current schema root.
    Local(&'a Value),
    /// A fetched document plus the still-unwalked pointer fragment. The
    /// document becomes the schema root for everything beneath it, so
    /// `#/...` references inside it resolve against the remote document.
    Remote { document: Value, fragment: String },
}

pub(crate) struct Resolver<'a> {
    // $id: sub-schema mapping, filled by a pre-walk of the root document
    // before the first keyword dispatch
    schemas: AHashMap<String, &'a Value>,
    // fetched remote documents, cached for the lifetime of the scope
    #[cfg(feature = "reqwest")]
    store: RwLock<AHashMap<String, Value>>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(schema: &'a Value) -> Resolver<'a> {
        let mut schemas = AHashMap::new();
        collect_ids(schema, &mut schemas);
        Resolver {
            schemas,
            #[cfg(feature = "reqwest")]
            store: RwLock::new(AHashMap::new()),
        }
    }

    /// Resolve `reference` against `root`, in order:
    /// `#` → the root itself; an exact `$id` match → that subschema;
    /// an absolute HTTP(S) URI → the remote document; a `#...` fragment →
    /// a JSON Pointer walk of the root. Anything else is a fatal error.
    pub(crate) fn resolve(
        &self,
        reference: &str,
        root: &'a Value,
    ) -> Result<Resolved<'a>, SchemaError> {
        if reference == "#" {
            return Ok(Resolved::Local(root));
        }
        if let Some(resolved) = self.schemas.get(reference) {
            return Ok(Resolved::Local(resolved));
        }
        if reference.starts_with("http://") || reference.starts_with("https://") {
            let url = Url::parse(reference)
                .map_err(|_| SchemaError::invalid_reference(reference))?;
            let fragment = decode_fragment(url.fragment().unwrap_or(""), reference)?;
            let mut resource = url;
            resource.set_fragment(None);
            let document = self.fetch(resource.as_str(), reference)?;
            return Ok(Resolved::Remote { document, fragment });
        }
        if let Some(fragment) = reference.strip_prefix('#') {
            let decoded = decode_fragment(fragment, reference)?;
            return match pointer(root, &decoded) {
                Some(target) => Ok(Resolved::Local(target)),
                None => Err(SchemaError::invalid_reference(reference)),
            };
        }
        Err(SchemaError::invalid_reference(reference))
    }

    #[cfg(feature = "reqwest")]
    fn fetch(&self, resource: &str, reference: &str) -> Result<Value, SchemaError> {
        if let Some(cached) = self.store.read().get(resource) {
            return Ok(cached.clone());
        }
        let response = reqwest::blocking::get(resource)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|error| SchemaError::fetch(reference, error))?;
        let body = response
            .text()
            .map_err(|error| SchemaError::fetch(reference, error))?;
        let document: Value = serde_json::from_str(&body)
            .map_err(|error| SchemaError::remote_parse(reference, error))?;
        self.store
            .write()
            .insert(resource.to_string(), document.clone());
        Ok(document)
    }

    #[cfg(not(feature = "reqwest"))]
    fn fetch(&self, _resource: &str, _reference: &str) -> Result<Value, SchemaError> {
        panic!("trying to resolve an http(s) reference, but reqwest support has not been included")
    }
}

fn decode_fragment(fragment: &str, reference: &str) -> Result<String, SchemaError> {
    percent_decode_str(fragment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| SchemaError::invalid_reference(reference))
}

/// JSON Pointer walk (RFC 6901): `~1` unescapes to `/` and `~0` to `~`;
/// array tokens must be plain decimal indices.
pub(crate) fn pointer<'a>(document: &'a Value, pointer: &str) -> Option<&'a Value> {
    if pointer.is_empty() {
        return Some(document);
    }
    if !pointer.starts_with('/') {
        return None;
    }
    let tokens = pointer
        .split('/')
        .skip(1)
        .map(|token| token.replace("~1", "/").replace("~0", "~"));
    let mut target = document;
    for token in tokens {
        let next = match *target {
            Value::Object(ref map) => map.get(&token),
            Value::Array(ref list) => parse_index(&token).and_then(|index| list.get(index)),
            _ => return None,
        };
        match next {
            Some(value) => target = value,
            None => return None,
        }
    }
    Some(target)
}

fn parse_index(token: &str) -> Option<usize> {
    if token.starts_with('+') || (token.starts_with('0') && token.len() != 1) {
        None
    } else {
        token.parse().ok()
    }
}

/// Find all `$id`-labelled sub-schemas in the document. `enum` and `const`
/// values are data, not schemas, and are not descended into.
fn collect_ids<'a>(schema: &'a Value, ids: &mut AHashMap<String, &'a Value>) {
    match schema {
        Value::Object(object) => {
            if let Some(Value::String(id)) = object.get("$id") {
                ids.insert(id.clone(), schema);
            }
            for (key, subschema) in object {
                if key == "enum" || key == "const" {
                    continue;
                }
                collect_ids(subschema, ids);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_ids(item, ids);
            }
        }
        _ => {}
    }
}

//! # draft6
//!
//! A crate for validating JSON instances against JSON Schema documents in
//! the Draft-6 dialect. The schema is interpreted directly: a dispatch
//! table maps each keyword to its handler, handlers recurse through the
//! instance, and every violation is recorded with the exact instance path
//! it occurred at.
//!
//! Supports:
//!   - the full Draft-6 assertion vocabulary (`format` and the content-*
//!     annotations excluded);
//!   - loading remote documents via HTTP(S);
//!
//! ## Example:
//!
//! ```rust
//! use draft6::{validate, SchemaError};
//! use serde_json::json;
//!
//! fn main() -> Result<(), SchemaError> {
//!     let schema = json!({"type": "object", "required": ["name"]});
//!     let instance = json!({"age": 30});
//!     let validation = validate(&schema, &instance)?;
//!     if !validation.is_valid() {
//!         for (path, tags) in validation.errors() {
//!             for tag in tags {
//!                 println!("{} violates '{}'", path, tag);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
#![warn(
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::needless_pass_by_value,
    clippy::print_stdout,
    clippy::redundant_closure,
    clippy::trivially_copy_pass_by_ref,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    variant_size_differences
)]
mod ecma262;
mod error;
mod helpers;
mod keywords;
mod primitive_type;
mod resolver;
mod schemas;
mod state;
mod validator;

pub use error::{ErrorTag, SchemaError};
pub use primitive_type::PrimitiveType;
pub use state::Validation;

use serde_json::Value;
use state::ValidationState;
use validator::Scope;

/// Validate `instance` against `schema`.
///
/// The returned [`Validation`] maps each failing instance path to the
/// keyword tags recorded there. A malformed schema (wrong keyword shape,
/// unresolvable `$ref`, non-object/non-boolean schema) aborts the whole
/// call with a [`SchemaError`].
///
/// ```rust
/// use draft6::validate;
/// use serde_json::json;
///
/// let schema = json!({"type": "integer", "maximum": 10});
/// let validation = validate(&schema, &json!(11)).unwrap();
/// assert!(!validation.is_valid());
/// assert_eq!(validation.errors()["$"][0].as_str(), "maximum");
/// ```
pub fn validate(schema: &Value, instance: &Value) -> Result<Validation, SchemaError> {
    let scope = Scope::new(schema);
    let mut state = ValidationState::new();
    validator::validate_value(&scope, schema, instance, &mut state)?;
    Ok(state.into_validation())
}

/// A shortcut for validating `instance` against `schema`.
/// ```rust
/// use draft6::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    validate(schema, instance)
        .expect("Invalid schema")
        .is_valid()
}

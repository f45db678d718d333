//! Mutable per-call validation state and the public validation outcome.
use crate::error::ErrorTag;
use std::collections::BTreeMap;
use std::fmt;

/// The current instance location plus every violation recorded so far.
///
/// The path is a JSON-Path-style string seeded with `$`; object descents
/// append `.<name>`, array descents `.<index>`. Handlers descend before
/// recursing and ascend afterwards, so a state can be threaded through the
/// whole walk instead of being rebuilt per frame.
#[derive(Debug)]
pub(crate) struct ValidationState {
    path: String,
    errors: BTreeMap<String, Vec<ErrorTag>>,
}

impl ValidationState {
    pub(crate) fn new() -> ValidationState {
        ValidationState {
            path: String::from("$"),
            errors: BTreeMap::new(),
        }
    }

    /// Extend the path with an object member name. Returns a mark for
    /// `ascend`.
    pub(crate) fn descend(&mut self, name: &str) -> usize {
        let mark = self.path.len();
        self.path.push('.');
        self.path.push_str(name);
        mark
    }

    /// Extend the path with an array index. Returns a mark for `ascend`.
    pub(crate) fn descend_index(&mut self, index: usize) -> usize {
        let mark = self.path.len();
        let mut buffer = itoa::Buffer::new();
        self.path.push('.');
        self.path.push_str(buffer.format(index));
        mark
    }

    pub(crate) fn ascend(&mut self, mark: usize) {
        self.path.truncate(mark);
    }

    /// Record `tag` at the current path. Recording is monotonic: errors are
    /// never removed from a state, only whole forks are discarded.
    pub(crate) fn add_error(&mut self, tag: ErrorTag) {
        self.errors.entry(self.path.clone()).or_default().push(tag);
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// A sibling state at the same instance location with no errors.
    /// Combinators validate into a fork so branch failures do not leak
    /// into the caller.
    pub(crate) fn fork(&self) -> ValidationState {
        ValidationState {
            path: self.path.clone(),
            errors: BTreeMap::new(),
        }
    }

    pub(crate) fn into_validation(self) -> Validation {
        Validation {
            errors: self.errors,
        }
    }
}

/// The outcome of a `validate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    errors: BTreeMap<String, Vec<ErrorTag>>,
}

impl Validation {
    /// Whether the instance conformed to the schema.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every violation, keyed by the instance path (`$`, `$.name`, `$.0`,
    /// ...) and listing the keyword tags recorded there, in dispatch order.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, Vec<ErrorTag>> {
        &self.errors
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        let mut first = true;
        for (path, tags) in &self.errors {
            for tag in tags {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", path, tag)?;
                first = false;
            }
        }
        Ok(())
    }
}

//! Request execution context: cancellation, field path, request-scoped
//! values and the error list that failed fields report into.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::{Error, Result};

/// One step of a response path: an object field or a list index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// An error reported for a field while encoding a response.
///
/// Serializes as a GraphQL error object: `{"message": ..., "path": [...]}`,
/// with `path` left out when the error was reported at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    pub message: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub path: Vec<PathSegment>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str(&self.message);
        }
        write!(f, "{}: {}", DisplayPath(&self.path), self.message)
    }
}

impl std::error::Error for FieldError {}

#[derive(Default)]
struct Shared {
    cancelled: AtomicBool,
    errors: Mutex<Vec<FieldError>>,
}

type Values = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Execution context for one logical request.
///
/// Clones and derived children (`with_field`, `with_index`, `with_value`)
/// share the cancellation flag and the error list, so errors reported
/// anywhere in the response tree land in the same place.
#[derive(Clone, Default)]
pub struct Context {
    shared: Arc<Shared>,
    values: Arc<Values>,
    path: Vec<PathSegment>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(&self, name: impl Into<String>) -> Self {
        self.child(PathSegment::Field(name.into()))
    }

    pub fn with_index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(segment);
        Self {
            shared: Arc::clone(&self.shared),
            values: Arc::clone(&self.values),
            path,
        }
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Derive a context carrying `value`, replacing any earlier value of the same type.
    pub fn with_value<T: Any + Send + Sync>(&self, value: T) -> Self {
        let mut values = Values::clone(&self.values);
        values.insert(TypeId::of::<T>(), Arc::new(value));
        Self {
            shared: Arc::clone(&self.shared),
            values: Arc::new(values),
            path: self.path.clone(),
        }
    }

    pub fn value<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
    }

    pub fn cancel(&self) {
        if !self.shared.cancelled.swap(true, Ordering::AcqRel) {
            tracing::trace!(path = %DisplayPath(&self.path), "context cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }

    /// `Err(Error::Cancelled)` once [`cancel`](Self::cancel) has been called.
    /// Encoders that honor cancellation call this themselves.
    pub fn err_if_cancelled(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Record `err` against the current path.
    pub fn add_error(&self, err: Error) {
        self.add_field_error(FieldError {
            message: err.to_string(),
            path: self.path.clone(),
        });
    }

    pub fn add_field_error(&self, err: FieldError) {
        self.shared.errors.lock().push(err);
    }

    pub fn has_errors(&self) -> bool {
        !self.shared.errors.lock().is_empty()
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.shared.errors.lock().clone()
    }

    /// Drain the error list.
    pub fn take_errors(&self) -> Vec<FieldError> {
        std::mem::take(&mut *self.shared.errors.lock())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("path", &self.path)
            .field("cancelled", &self.is_cancelled())
            .field("errors", &self.shared.errors.lock().len())
            .field("values", &self.values.len())
            .finish()
    }
}

pub(crate) struct DisplayPath<'a>(pub(crate) &'a [PathSegment]);

impl fmt::Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

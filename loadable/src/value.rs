#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The content of a [`Loadable`](crate::Loadable), without its refreshing flag.
///
/// This is what a view branches on: there is nothing yet, a failure, or a
/// successful payload. Whether a fetch is in flight is tracked separately.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value<E, A> {
    /// No data and no error.
    Empty,
    /// The last fetch failed.
    Failed(E),
    /// The last fetch succeeded.
    Succeeded(A),
}

impl<E, A> Value<E, A> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Value::Succeeded(_))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Value::Failed(_))
    }

    pub fn as_ref(&self) -> Value<&E, &A> {
        match self {
            Value::Empty => Value::Empty,
            Value::Failed(error) => Value::Failed(error),
            Value::Succeeded(value) => Value::Succeeded(value),
        }
    }

    pub fn map<B, F>(self, f: F) -> Value<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Value::Empty => Value::Empty,
            Value::Failed(error) => Value::Failed(error),
            Value::Succeeded(value) => Value::Succeeded(f(value)),
        }
    }

    pub fn map_error<E2, F>(self, f: F) -> Value<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Value::Empty => Value::Empty,
            Value::Failed(error) => Value::Failed(f(error)),
            Value::Succeeded(value) => Value::Succeeded(value),
        }
    }

    /// Returns the payload if the content is `Succeeded`.
    pub fn into_option(self) -> Option<A> {
        match self {
            Value::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error if the content is `Failed`.
    pub fn into_error(self) -> Option<E> {
        match self {
            Value::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<E, A> Default for Value<E, A> {
    fn default() -> Self {
        Value::Empty
    }
}

use crate::{LoadableError, Value};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Data that is fetched, and may be fetched again.
///
/// A `Loadable` is the product of two independent pieces of state: its
/// content ([`Value::Empty`], [`Value::Failed`] or [`Value::Succeeded`]) and
/// a `refreshing` flag telling whether a fetch is currently in flight. All six
/// combinations are meaningful. A view can keep rendering the last success
/// (or the last error) while a refetch runs, by matching on [`Loadable::value`]
/// and separately checking [`Loadable::is_loading`].
///
/// Every operation consumes the loadable and returns a new one.
///
/// ```
/// use loadable::{Loadable, Value};
///
/// let posts: Loadable<String, Vec<&str>> = Loadable::succeed(vec!["hello"]).to_loading();
///
/// match posts.value() {
///     Value::Succeeded(items) => assert_eq!(items.len(), 1),
///     _ => unreachable!(),
/// }
/// assert!(posts.is_loading());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Loadable<E, A> {
    content: Value<E, A>,
    refreshing: bool,
}

/// Both fields of a [`Loadable`], exposed for generic code.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadableParts<E, A> {
    pub content: Value<E, A>,
    pub refreshing: bool,
}

impl<E, A> Loadable<E, A> {
    /// Nothing loaded, nothing in flight.
    pub fn not_asked() -> Self {
        Loadable {
            content: Value::Empty,
            refreshing: false,
        }
    }

    /// Nothing loaded yet, first fetch in flight.
    pub fn loading() -> Self {
        Loadable {
            content: Value::Empty,
            refreshing: true,
        }
    }

    pub fn succeed(value: A) -> Self {
        Loadable {
            content: Value::Succeeded(value),
            refreshing: false,
        }
    }

    pub fn fail(error: E) -> Self {
        Loadable {
            content: Value::Failed(error),
            refreshing: false,
        }
    }

    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Loadable::succeed(value),
            Err(error) => Loadable::fail(error),
        }
    }

    /// `Some` becomes a success, `None` becomes [`Loadable::not_asked`].
    pub fn from_option(option: Option<A>) -> Self {
        match option {
            Some(value) => Loadable::succeed(value),
            None => Loadable::not_asked(),
        }
    }

    pub fn from_parts(parts: LoadableParts<E, A>) -> Self {
        Loadable {
            content: parts.content,
            refreshing: parts.refreshing,
        }
    }

    /// Marks a fetch as in flight. The content is kept.
    pub fn to_loading(self) -> Self {
        Loadable {
            refreshing: true,
            ..self
        }
    }

    /// Marks the fetch as finished. The content is kept.
    pub fn to_not_loading(self) -> Self {
        Loadable {
            refreshing: false,
            ..self
        }
    }

    /// Transforms a successful payload. `Empty` and `Failed` pass through,
    /// and the refreshing flag is never touched.
    pub fn map<B, F>(self, f: F) -> Loadable<E, B>
    where
        F: FnOnce(A) -> B,
    {
        Loadable {
            content: self.content.map(f),
            refreshing: self.refreshing,
        }
    }

    /// Transforms a failure. `Empty` and `Succeeded` pass through.
    pub fn map_error<E2, F>(self, f: F) -> Loadable<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        Loadable {
            content: self.content.map_error(f),
            refreshing: self.refreshing,
        }
    }

    /// Chains a dependent step onto a successful payload.
    ///
    /// On `Succeeded(a)` the result takes the content of `f(a)`, and is
    /// refreshing if either `self` or `f(a)` is. On `Empty` or `Failed`, `f`
    /// is not called and `self` is returned as is, refreshing flag included.
    ///
    /// ```
    /// use loadable::Loadable;
    ///
    /// let user: Loadable<&str, u32> = Loadable::succeed(2).to_loading();
    /// let next = user.and_then(|_| Loadable::<&str, u32>::fail("oop"));
    ///
    /// assert_eq!(next, Loadable::fail("oop").to_loading());
    /// ```
    pub fn and_then<B, F>(self, f: F) -> Loadable<E, B>
    where
        F: FnOnce(A) -> Loadable<E, B>,
    {
        let Loadable {
            content,
            refreshing,
        } = self;
        match content {
            Value::Succeeded(value) => {
                let next = f(value);
                Loadable {
                    content: next.content,
                    refreshing: refreshing || next.refreshing,
                }
            }
            Value::Failed(error) => Loadable {
                content: Value::Failed(error),
                refreshing,
            },
            Value::Empty => Loadable {
                content: Value::Empty,
                refreshing,
            },
        }
    }

    /// Applies the function held by `self` to the payload of `ma`.
    ///
    /// This is `self.and_then(|f| ma.map(f))`: when `self` is not a success
    /// its state wins and `ma` is ignored entirely.
    ///
    /// ```
    /// use loadable::Loadable;
    ///
    /// let sum = Loadable::<(), _>::succeed(|a: i32| move |b: i32| a + b)
    ///     .and_map(Loadable::succeed(1))
    ///     .and_map(Loadable::succeed(2));
    ///
    /// assert_eq!(sum, Loadable::succeed(3));
    /// ```
    pub fn and_map<X, B>(self, ma: Loadable<E, X>) -> Loadable<E, B>
    where
        A: FnOnce(X) -> B,
    {
        self.and_then(|f| ma.map(f))
    }

    /// Like [`Loadable::and_map`], but inspects both sides and merges two
    /// failures with `combine`.
    ///
    /// | `self` | `ma` | content |
    /// |---|---|---|
    /// | `Succeeded(f)` | `Succeeded(a)` | `Succeeded(f(a))` |
    /// | `Failed(e1)` | `Failed(e2)` | `Failed(combine(e1, e2))` |
    /// | `Failed(e)` | otherwise | `Failed(e)` |
    /// | otherwise | `Failed(e)` | `Failed(e)` |
    /// | otherwise | otherwise | `Empty` |
    ///
    /// The result is refreshing if either side is.
    ///
    /// `combine` receives the error accumulated by `self` first, so in a
    /// left to right pipeline errors are combined in the order the steps
    /// appear:
    ///
    /// ```
    /// use loadable::Loadable;
    ///
    /// let join = |a: String, b: String| a + &b;
    /// let triple = Loadable::succeed(|a: i32| move |b: i32| move |c: i32| a + b + c)
    ///     .and_map_with(join, Loadable::<String, i32>::fail("a".to_string()))
    ///     .and_map_with(join, Loadable::succeed(2))
    ///     .and_map_with(join, Loadable::<String, i32>::fail("c".to_string()));
    ///
    /// assert_eq!(triple, Loadable::fail("ac".to_string()));
    /// ```
    pub fn and_map_with<X, B, C>(self, combine: C, ma: Loadable<E, X>) -> Loadable<E, B>
    where
        A: FnOnce(X) -> B,
        C: FnOnce(E, E) -> E,
    {
        let refreshing = self.refreshing || ma.refreshing;
        let content = match (self.content, ma.content) {
            (Value::Succeeded(f), Value::Succeeded(value)) => Value::Succeeded(f(value)),
            (Value::Failed(left), Value::Failed(right)) => Value::Failed(combine(left, right)),
            (Value::Failed(error), _) | (_, Value::Failed(error)) => Value::Failed(error),
            (Value::Empty, _) | (_, Value::Empty) => Value::Empty,
        };
        Loadable {
            content,
            refreshing,
        }
    }

    pub fn as_ref(&self) -> Loadable<&E, &A> {
        Loadable {
            content: self.content.as_ref(),
            refreshing: self.refreshing,
        }
    }

    /// Returns the successful payload, or `default`. Ignores refreshing.
    pub fn with_default(self, default: A) -> A {
        self.content.into_option().unwrap_or(default)
    }

    pub fn to_option(self) -> Option<A> {
        self.content.into_option()
    }

    pub fn to_error(self) -> Option<E> {
        self.content.into_error()
    }

    pub fn success_ref(&self) -> Option<&A> {
        self.content.as_ref().into_option()
    }

    pub fn error_ref(&self) -> Option<&E> {
        self.content.as_ref().into_error()
    }

    /// The content, for pattern matching.
    pub fn value(&self) -> &Value<E, A> {
        &self.content
    }

    pub fn into_value(self) -> Value<E, A> {
        self.content
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.refreshing
    }

    /// True only for the initial state: no content and no fetch in flight.
    pub fn is_not_asked(&self) -> bool {
        self.content.is_empty() && !self.refreshing
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_success(&self) -> bool {
        self.content.is_success()
    }

    pub fn is_fail(&self) -> bool {
        self.content.is_fail()
    }

    pub fn into_parts(self) -> LoadableParts<E, A> {
        LoadableParts {
            content: self.content,
            refreshing: self.refreshing,
        }
    }

    /// Leaves `Loadable` land for `?`-friendly code. The refreshing flag is
    /// dropped.
    pub fn into_result(self) -> Result<A, LoadableError<E>> {
        match self.content {
            Value::Succeeded(value) => Ok(value),
            Value::Failed(error) => Err(LoadableError::Failed(error)),
            Value::Empty => Err(LoadableError::Empty),
        }
    }
}

impl<E, A> Default for Loadable<E, A> {
    fn default() -> Self {
        Loadable::not_asked()
    }
}

impl<E, A> From<Result<A, E>> for Loadable<E, A> {
    fn from(value: Result<A, E>) -> Self {
        Loadable::from_result(value)
    }
}

impl<E, A> From<Option<A>> for Loadable<E, A> {
    fn from(value: Option<A>) -> Self {
        Loadable::from_option(value)
    }
}

impl<E, A> From<LoadableParts<E, A>> for Loadable<E, A> {
    fn from(value: LoadableParts<E, A>) -> Self {
        Loadable::from_parts(value)
    }
}

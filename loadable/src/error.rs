use thiserror::Error;

/// Why a [`Loadable`](crate::Loadable) holds no successful payload.
///
/// Produced by [`Loadable::into_result`](crate::Loadable::into_result) when a
/// host wants to leave loadable land and use `?`.
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
pub enum LoadableError<E> {
    /// Nothing has been loaded yet.
    #[error("no data has been loaded")]
    Empty,

    /// The last fetch failed with this error.
    #[error("{0}")]
    Failed(E),
}

impl<E> LoadableError<E> {
    pub fn is_empty(&self) -> bool {
        matches!(self, LoadableError::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadableError::Failed(_))
    }

    /// The wrapped error, if there is one.
    pub fn into_failure(self) -> Option<E> {
        match self {
            LoadableError::Failed(error) => Some(error),
            LoadableError::Empty => None,
        }
    }
}

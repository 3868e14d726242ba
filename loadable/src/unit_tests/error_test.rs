use super::TestLoadable;
use crate::LoadableError;

#[test]
fn test_into_result() {
    assert_eq!(TestLoadable::succeed(1).to_loading().into_result(), Ok(1));
    assert_eq!(
        TestLoadable::fail("e".to_string()).into_result(),
        Err(LoadableError::Failed("e".to_string()))
    );
    assert_eq!(TestLoadable::loading().into_result(), Err(LoadableError::Empty));
}

#[test]
fn test_error_display() {
    let empty: LoadableError<String> = LoadableError::Empty;
    assert_eq!(empty.to_string(), "no data has been loaded");

    let failed = LoadableError::Failed("connection refused".to_string());
    assert_eq!(failed.to_string(), "connection refused");
}

#[test]
fn test_error_predicates() {
    let empty: LoadableError<String> = LoadableError::Empty;
    assert!(empty.is_empty());
    assert!(!empty.is_failed());
    assert_eq!(empty.into_failure(), None);

    let failed = LoadableError::Failed(42);
    assert!(failed.is_failed());
    assert_eq!(failed.into_failure(), Some(42));
}

#[test]
fn test_error_is_std_error() {
    fn boxed(error: LoadableError<String>) -> Box<dyn std::error::Error> {
        Box::new(error)
    }
    let error = boxed(LoadableError::Failed("boom".to_string()));
    assert_eq!(error.to_string(), "boom");
}

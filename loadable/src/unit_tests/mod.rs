use crate::Loadable;

mod error_test;

#[cfg(feature = "serde")]
mod serde_test;

pub type TestLoadable = Loadable<String, i32>;

/// Every content variant, with and without a fetch in flight.
pub fn all_states() -> Vec<TestLoadable> {
    vec![
        Loadable::not_asked(),
        Loadable::loading(),
        Loadable::succeed(1),
        Loadable::succeed(1).to_loading(),
        Loadable::fail("e".to_string()),
        Loadable::fail("e".to_string()).to_loading(),
    ]
}

pub fn fail_if_odd(n: i32) -> TestLoadable {
    if n % 2 != 0 {
        Loadable::fail(n.to_string())
    } else {
        Loadable::succeed(n)
    }
}

pub fn concat(left: String, right: String) -> String {
    left + &right
}

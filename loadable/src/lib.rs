mod error;
mod keyed;
mod loadable;
mod traverse;
mod value;

pub use error::*;
pub use keyed::*;
pub use loadable::*;
pub use traverse::*;
pub use value::*;

#[cfg(test)]
mod unit_tests;

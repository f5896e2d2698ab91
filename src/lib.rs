//! multo is a broadcasting container: every operation applied to a [`Multo`]
//! is applied to each wrapped value and the results are wrapped again.
//!
//! Plain functions are lifted with [`adapt`] (or a [`Decorator`]) so that any
//! operand carrying a multo is expanded element by element. Two multos are
//! combined as a cross product ([`Mode::Flat`]), by position ([`Mode::Zip`])
//! or grouped by the right operand's elements ([`Mode::Nest`]).
//!
//! The [`multo!`] macro is the single entry point for all three uses: it wraps
//! values, builds a decorator from a mode short-code, or adapts a function
//! (`multo!(fn f)`, `multo!(fn f, mode = "zip")`).
//!
//! ```
//! use multo::{adapt, multo, MultoError, Value};
//!
//! let inc = adapt(|a:&Value| -> Result<Value,MultoError> { a + &Value::from(1) });
//!
//! assert_eq!(Value::from(3),inc.call(&Value::from(2)).unwrap());
//! assert_eq!(Value::from(multo![3, 4, 5]),inc.call(&Value::from(multo![2, 3, 4])).unwrap());
//! ```
#[macro_use]
mod macros;

pub mod error;
pub mod mode;
pub mod ope;
pub mod combinator;
pub mod collection;
pub mod forward;
pub mod value;

pub use crate::collection::Multo;
pub use crate::combinator::{Adapted, Decorator};
pub use crate::error::{ErrorKind, MultoError};
pub use crate::forward::{BoundMethod, Forwarded, Member};
pub use crate::mode::{DEFAULT_MODE, Mode};
pub use crate::ope::{BinaryOp, Element, UnaryOp};
pub use crate::value::{Complex, Object, Slice, Value};

/// Lifts a plain operation so that operands carrying a multo are expanded
/// # Arguments
/// * `f` - operation of one, two or three operands
pub fn adapt<F>(f:F) -> Adapted<F> {
    Adapted::new(f)
}
/// Lifts a plain operation with `mode` forced at every level of the expansion
/// # Arguments
/// * `mode` - combination mode
/// * `f` - operation of one, two or three operands
pub fn adapt_with_mode<F>(mode:Mode,f:F) -> Adapted<F> {
    Adapted::with_mode(f,mode)
}
/// Number of top-level elements
pub fn multo_len<T>(m:&Multo<T>) -> usize {
    m.len()
}
/// Length of every element
pub fn inner_len<T>(m:&Multo<T>) -> Result<Multo<T>,MultoError> where T: Element {
    m.inner_len()
}
/// Truth value of every element
pub fn inner_bool<T>(m:&Multo<T>) -> Result<Multo<T>,MultoError> where T: Element {
    m.inner_bool()
}
/// Integer conversion of every element
pub fn inner_int<T>(m:&Multo<T>) -> Result<Multo<T>,MultoError> where T: Element {
    m.inner_int()
}
/// Bytes conversion of every element
pub fn inner_bytes<T>(m:&Multo<T>) -> Result<Multo<T>,MultoError> where T: Element {
    m.inner_bytes()
}
/// Complex conversion of every element
pub fn inner_complex<T>(m:&Multo<T>) -> Result<Multo<T>,MultoError> where T: Element {
    m.inner_complex()
}

//! Errors raised by the combination engine, the wrapper and the Value element type
use std::{error, fmt};
use crate::mode::Mode;

/// Broad category of a failure.
///
/// Callers that only care about which class of contract was violated
/// (a mode conflict and an unknown attribute are both attribute errors)
/// match on this instead of on the individual variants.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ErrorKind {
    Attribute,
    Index,
    Value,
    Type,
    Assertion,
    ZeroDivision
}
#[derive(Debug,Clone,PartialEq)]
pub enum MultoError {
    /// Two wrappers with differing, explicitly set modes met without an override
    IncompatibleModes(Mode,Mode),
    /// Zip combination of wrappers with unequal lengths (left, right)
    LengthMismatch(usize,usize),
    /// Boolean collapse over elements whose truthiness disagrees
    AmbiguousBool,
    /// Index collapse over elements that do not share a single index
    AmbiguousIndex,
    /// Implicit scalar conversion of a wrapper, which is disabled
    ImplicitConversion { target:&'static str, helper:&'static str },
    /// A wrapper was invoked as a function
    NotCallable,
    UnknownAttribute(String),
    ReservedAttribute(String),
    /// Construction with both positional values and an explicit element list
    MixedConstruction,
    /// The decorator entry point received more than one argument
    InvalidDecoratorArguments(usize),
    InvalidMode(String),
    UnsupportedOperand(String),
    IndexOutOfRange(String),
    InvalidValue(String),
    Overflow(&'static str),
    /// The result of a repetition or a conversion does not fit in memory
    TooLarge(&'static str),
    ZeroDivision
}
impl MultoError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            MultoError::IncompatibleModes(_,_) |
            MultoError::ImplicitConversion { .. } |
            MultoError::UnknownAttribute(_) |
            MultoError::ReservedAttribute(_) => ErrorKind::Attribute,
            MultoError::LengthMismatch(_,_) |
            MultoError::IndexOutOfRange(_) => ErrorKind::Index,
            MultoError::AmbiguousBool |
            MultoError::AmbiguousIndex |
            MultoError::InvalidDecoratorArguments(_) |
            MultoError::InvalidValue(_) |
            MultoError::Overflow(_) |
            MultoError::TooLarge(_) => ErrorKind::Value,
            MultoError::NotCallable |
            MultoError::UnsupportedOperand(_) => ErrorKind::Type,
            MultoError::MixedConstruction |
            MultoError::InvalidMode(_) => ErrorKind::Assertion,
            MultoError::ZeroDivision => ErrorKind::ZeroDivision
        }
    }
}
impl fmt::Display for MultoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MultoError::IncompatibleModes(l,r) => write!(f, "Incompatible multo types {} and {}",l,r),
            MultoError::LengthMismatch(l,r) => write!(f, "Non-equal length of zipped multos ({} and {})",l,r),
            MultoError::AmbiguousBool => {
                write!(f, "Conversion to bool failed: not all multo values evaluate to the same bool")
            },
            MultoError::AmbiguousIndex => {
                write!(f, "Conversion to index failed: not all multo values evaluate to the same index")
            },
            MultoError::ImplicitConversion { target, helper } => {
                write!(f, "Cannot convert a multo to {} implicitly, use multo::{}",target,helper)
            },
            MultoError::NotCallable => write!(f, "Trying to call multo or invalid multo decorator use"),
            MultoError::UnknownAttribute(ref s) => write!(f, "Attribute {} not recognized",s),
            MultoError::ReservedAttribute(ref s) => write!(f, "Attribute {} is reserved by multo",s),
            MultoError::MixedConstruction => {
                write!(f, "A multo is built either from values or from an element list, not both")
            },
            MultoError::InvalidDecoratorArguments(n) => write!(f, "Invalid multo_decor arguments (got {})",n),
            MultoError::InvalidMode(ref s) => write!(f, "Invalid multo mode {:?} (expected flat, nest or zip)",s),
            MultoError::UnsupportedOperand(ref s) => write!(f, "{}",s),
            MultoError::IndexOutOfRange(ref s) => write!(f, "{}",s),
            MultoError::InvalidValue(ref s) => write!(f, "{}",s),
            MultoError::Overflow(op) => write!(f, "Integer overflow in {}",op),
            MultoError::TooLarge(op) => write!(f, "Result of {} is too large",op),
            MultoError::ZeroDivision => write!(f, "division by zero"),
        }
    }
}
impl error::Error for MultoError {
    fn description(&self) -> &str {
        match *self {
            MultoError::IncompatibleModes(_,_) => "Incompatible multo modes.",
            MultoError::LengthMismatch(_,_) => "Non-equal length of zipped multos.",
            MultoError::AmbiguousBool => "Conversion to bool failed.",
            MultoError::AmbiguousIndex => "Conversion to index failed.",
            MultoError::ImplicitConversion { .. } => "Implicit conversion of a multo is disabled.",
            MultoError::NotCallable => "A multo is not callable.",
            MultoError::UnknownAttribute(_) => "Attribute not recognized.",
            MultoError::ReservedAttribute(_) => "Attribute is reserved.",
            MultoError::MixedConstruction => "Mixed multo construction arguments.",
            MultoError::InvalidDecoratorArguments(_) => "Invalid decorator arguments.",
            MultoError::InvalidMode(_) => "Invalid multo mode.",
            MultoError::UnsupportedOperand(_) => "Unsupported operand.",
            MultoError::IndexOutOfRange(_) => "Index out of range.",
            MultoError::InvalidValue(_) => "Invalid value.",
            MultoError::Overflow(_) => "Integer overflow.",
            MultoError::TooLarge(_) => "Result too large.",
            MultoError::ZeroDivision => "Division by zero.",
        }
    }

    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

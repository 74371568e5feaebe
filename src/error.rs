use std::error;
use std::fmt;
use std::result;

/// An enum representing the ways an operation on a set can fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An absent element was passed where an element was required.
    InvalidArgument,
    /// The set has no elements to return.
    EmptyCollection,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "expected an element, found none"),
            Error::EmptyCollection => write!(f, "set is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

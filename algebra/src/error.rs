use std::{error::Error, fmt::Display};

/// A name which is not one of the symbols of D3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidElement(pub String);

impl Error for InvalidElement {}

impl Display for InvalidElement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Error: \"{}\" is not an element of D3", self.0)
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlgebraError {
  InvalidElement(InvalidElement),
  /// An odd value offered as a member of the even integers.
  NotEven(i128),
}

impl Error for AlgebraError {}

impl Display for AlgebraError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::InvalidElement(err) => write!(f, "{err}"),
      Self::NotEven(value) => write!(f, "Error: {value} is not an even integer"),
    }
  }
}

impl From<InvalidElement> for AlgebraError {
  fn from(err: InvalidElement) -> Self {
    Self::InvalidElement(err)
  }
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Result of looking up D3 elements by name.
pub type D3Result<T> = Result<T, InvalidElement>;

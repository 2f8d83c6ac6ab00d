use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub struct DemoError {
  message: String,
}

impl DemoError {
  pub fn new(message: String) -> Self {
    DemoError { message }
  }
}

impl Error for DemoError {}

impl Display for DemoError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Error: {}", self.message)
  }
}

#[macro_export]
macro_rules! make_demo_error {
  ($($args:expr),+) => {
    $crate::error::DemoError::new(format!($($args),+))
  };
}

pub type DemoResult<T = ()> = Result<T, DemoError>;

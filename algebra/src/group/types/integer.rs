use std::{fmt::Display, ops::Mul};

use crate::{
  error::{AlgebraError, AlgebraResult},
  group::Group,
  monoid::Monoid,
  semigroup::Semigroup,
};

/// The integers under addition. Values are held as `i128` so that sums of a
/// handful of `i64` operands cannot overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(pub i128);

impl Integer {
  pub const fn value(&self) -> i128 {
    self.0
  }
}

impl From<i64> for Integer {
  fn from(value: i64) -> Self {
    Self(value as i128)
  }
}

/// Addition.
impl Mul for Integer {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    Self(self.0 + rhs.0)
  }
}

impl Semigroup for Integer {}

impl Monoid for Integer {
  fn identity() -> Self {
    Self(0)
  }
}

impl Group for Integer {
  fn inverse(&self) -> Self {
    Self(-self.0)
  }
}

impl Display for Integer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// The even integers under addition, a subgroup of `Integer`. Construction
/// checks parity, so every value of this type is even.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EvenInteger(i128);

impl EvenInteger {
  pub fn new(value: impl Into<i128>) -> AlgebraResult<Self> {
    let value = value.into();
    if Self::is_even(value) {
      Ok(Self(value))
    } else {
      Err(AlgebraError::NotEven(value))
    }
  }

  pub const fn is_even(value: i128) -> bool {
    value % 2 == 0
  }

  pub const fn value(&self) -> i128 {
    self.0
  }
}

impl From<EvenInteger> for Integer {
  fn from(value: EvenInteger) -> Self {
    Self(value.0)
  }
}

/// Addition. The sum of two even integers is even.
impl Mul for EvenInteger {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    let sum = self.0 + rhs.0;
    debug_assert!(Self::is_even(sum));
    Self(sum)
  }
}

impl Semigroup for EvenInteger {}

impl Monoid for EvenInteger {
  fn identity() -> Self {
    Self(0)
  }
}

impl Group for EvenInteger {
  fn inverse(&self) -> Self {
    Self(-self.0)
  }
}

impl Display for EvenInteger {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

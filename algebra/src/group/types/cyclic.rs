use std::{fmt::Display, ops::Mul};

use crate::{finite::Finite, group::Group, monoid::Monoid, ordinal::Ordinal, semigroup::Semigroup};

/// The integers mod `N` under addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cyclic<const N: u16>(u16);

impl<const N: u16> Cyclic<N> {
  /// Reduces `value` mod `N`.
  pub const fn new(value: u16) -> Self {
    Self(value % N)
  }

  pub const fn value(&self) -> u16 {
    self.0
  }

  pub const fn const_identity() -> Self {
    Self(0)
  }

  pub const fn const_op(&self, rhs: &Self) -> Self {
    Self((self.0 + rhs.0) % N)
  }

  pub const fn const_inverse(&self) -> Self {
    Self((N - self.0) % N)
  }
}

impl<const N: u16> Mul for Cyclic<N> {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    self.const_op(&rhs)
  }
}

impl<const N: u16> Finite for Cyclic<N> {
  const SIZE: usize = N as usize;
}

impl<const N: u16> Ordinal for Cyclic<N> {
  fn ord(&self) -> usize {
    self.0 as usize
  }

  fn from_ord(ord: usize) -> Self {
    debug_assert!(ord < N as usize);
    Self(ord as u16)
  }
}

impl<const N: u16> Semigroup for Cyclic<N> {}

impl<const N: u16> Monoid for Cyclic<N> {
  fn identity() -> Self {
    Self::const_identity()
  }
}

impl<const N: u16> Group for Cyclic<N> {
  fn inverse(&self) -> Self {
    self.const_inverse()
  }
}

impl<const N: u16> Display for Cyclic<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} (mod {N})", self.0)
  }
}

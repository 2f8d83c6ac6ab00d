use std::{fmt::Display, ops::Mul, str::FromStr};

use crate::{
  error::{D3Result, InvalidElement},
  finite::Finite,
  group::{Group, D3},
  monoid::Monoid,
  ordinal::Ordinal,
  semigroup::Semigroup,
};

/// The six symmetries of an equilateral triangle, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum D3Element {
  /// `1`, the identity.
  One,
  /// `r`, rotation by 120 degrees.
  R,
  /// `r2`, rotation by 240 degrees.
  R2,
  /// `f`, reflection through the vertical axis.
  F,
  /// `rf`, reflect then rotate by 120 degrees.
  RF,
  /// `r2f`, reflect then rotate by 240 degrees.
  R2F,
}

impl D3Element {
  /// Every element, in ordinal order. The position of an element in this
  /// array is the ordinal of its `(rotation, reflection)` pair in `D3`.
  pub const ALL: [Self; 6] = [Self::One, Self::R, Self::R2, Self::F, Self::RF, Self::R2F];

  pub const fn name(self) -> &'static str {
    match self {
      Self::One => "1",
      Self::R => "r",
      Self::R2 => "r2",
      Self::F => "f",
      Self::RF => "rf",
      Self::R2F => "r2f",
    }
  }

  /// The plain-text symbol, with a superscript exponent and a dot between
  /// factors.
  pub const fn symbol(self) -> &'static str {
    match self {
      Self::One => "1",
      Self::R => "r",
      Self::R2 => "r²",
      Self::F => "f",
      Self::RF => "r·f",
      Self::R2F => "r²·f",
    }
  }

  pub const fn as_dihedral(self) -> D3 {
    match self {
      Self::One => D3::new(0, false),
      Self::R => D3::new(1, false),
      Self::R2 => D3::new(2, false),
      Self::F => D3::new(0, true),
      Self::RF => D3::new(1, true),
      Self::R2F => D3::new(2, true),
    }
  }

  /// Every `(rotation, reflection)` pair has a name, so this never fails.
  pub const fn from_dihedral(el: D3) -> Self {
    Self::ALL[el.const_ord()]
  }

  pub const fn rotation(self) -> u16 {
    self.as_dihedral().rotation()
  }

  pub const fn reflected(self) -> bool {
    self.as_dihedral().reflected()
  }

  pub const fn compose(self, rhs: Self) -> Self {
    Self::from_dihedral(self.as_dihedral().const_op(&rhs.as_dihedral()))
  }

  /// Finds the inverse by trying each element in turn. The closed form is
  /// `D3::inverse`.
  pub fn find_inverse(self) -> Self {
    Self::ALL
      .into_iter()
      .find(|&candidate| self.compose(candidate) == Self::One)
      .unwrap_or_else(|| unreachable!("every element of D3 has an inverse"))
  }
}

/// Composes two elements given by name.
pub fn compose(a: &str, b: &str) -> D3Result<D3Element> {
  Ok(a.parse::<D3Element>()?.compose(b.parse()?))
}

/// The inverse of an element given by name.
pub fn inverse(a: &str) -> D3Result<D3Element> {
  Ok(a.parse::<D3Element>()?.find_inverse())
}

impl FromStr for D3Element {
  type Err = InvalidElement;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|el| el.name() == s)
      .ok_or_else(|| InvalidElement(s.to_owned()))
  }
}

impl Mul for D3Element {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    self.compose(rhs)
  }
}

impl Finite for D3Element {
  const SIZE: usize = D3::SIZE;
}

impl Ordinal for D3Element {
  fn ord(&self) -> usize {
    self.as_dihedral().ord()
  }

  fn from_ord(ord: usize) -> Self {
    Self::ALL[ord]
  }
}

impl Semigroup for D3Element {}

impl Monoid for D3Element {
  fn identity() -> Self {
    Self::One
  }
}

impl Group for D3Element {
  fn inverse(&self) -> Self {
    self.find_inverse()
  }
}

impl Display for D3Element {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

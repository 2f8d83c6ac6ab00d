use std::{fmt::Display, ops::Mul};

use crate::{
  finite::Finite,
  group::{Cyclic, Group},
  monoid::Monoid,
  ordinal::Ordinal,
  semigroup::Semigroup,
};

/// The symmetries of a regular `N`-gon, as the semidirect product of the
/// rotations `Cyclic<N>` with a single reflection `Cyclic<2>`.
///
/// An element `(k, d)` stands for `r^k f^d`: reflect first if `d` is set, then
/// rotate by `k` steps of `360 / N` degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dihedral<const N: u16> {
  rotation: Cyclic<N>,
  reflection: Cyclic<2>,
}

/// The symmetries of an equilateral triangle.
pub type D3 = Dihedral<3>;

impl<const N: u16> Dihedral<N> {
  pub const fn new(rotation: u16, reflected: bool) -> Self {
    Self {
      rotation: Cyclic::new(rotation),
      reflection: Cyclic::new(reflected as u16),
    }
  }

  /// Number of rotation steps, in `0..N`.
  pub const fn rotation(&self) -> u16 {
    self.rotation.value()
  }

  pub const fn reflected(&self) -> bool {
    self.reflection.value() == 1
  }

  /// While const traits are nightly-only, define const versions of the trait
  /// impls manually.
  pub const fn const_identity() -> Self {
    Self::new(0, false)
  }

  /// `(k1, d1) * (k2, d2) = (k1 + (-1)^d1 k2, d1 + d2)`. Passing a rotation
  /// through a reflection reverses its direction.
  pub const fn const_op(&self, rhs: &Self) -> Self {
    let twisted = if self.reflected() {
      rhs.rotation.const_inverse()
    } else {
      rhs.rotation
    };

    Self {
      rotation: self.rotation.const_op(&twisted),
      reflection: self.reflection.const_op(&rhs.reflection),
    }
  }

  /// Reflections are their own inverse, rotations invert to the opposite
  /// rotation.
  pub const fn const_inverse(&self) -> Self {
    if self.reflected() {
      *self
    } else {
      Self {
        rotation: self.rotation.const_inverse(),
        reflection: self.reflection,
      }
    }
  }

  pub const fn const_ord(&self) -> usize {
    self.rotation() as usize + (N as usize) * (self.reflection.value() as usize)
  }
}

impl<const N: u16> Mul for Dihedral<N> {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self::Output {
    self.const_op(&rhs)
  }
}

impl<const N: u16> Finite for Dihedral<N> {
  const SIZE: usize = 2 * (N as usize);
}

impl<const N: u16> Ordinal for Dihedral<N> {
  fn ord(&self) -> usize {
    self.const_ord()
  }

  fn from_ord(ord: usize) -> Self {
    debug_assert!(ord < Self::SIZE);
    Self::new((ord % N as usize) as u16, ord >= N as usize)
  }
}

impl<const N: u16> Semigroup for Dihedral<N> {}

impl<const N: u16> Monoid for Dihedral<N> {
  fn identity() -> Self {
    Self::const_identity()
  }
}

impl<const N: u16> Group for Dihedral<N> {
  fn inverse(&self) -> Self {
    self.const_inverse()
  }
}

impl<const N: u16> Display for Dihedral<N> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.reflected() {
      write!(f, "r{}f", self.rotation())
    } else {
      write!(f, "r{}", self.rotation())
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn check_ops<const N: u16>() {
    for a in Dihedral::<N>::for_each() {
      for b in Dihedral::<N>::for_each() {
        let (i, j) = (a.rotation(), b.rotation());
        let expected = match (a.reflected(), b.reflected()) {
          // r_i * r_j = r_i+j
          (false, false) => Dihedral::new((i + j) % N, false),
          // r_i * r_j f = r_i+j f
          (false, true) => Dihedral::new((i + j) % N, true),
          // r_i f * r_j = r_i-j f
          (true, false) => Dihedral::new((N + i - j) % N, true),
          // r_i f * r_j f = r_i-j
          (true, true) => Dihedral::new((N + i - j) % N, false),
        };
        assert_eq!(a * b, expected, "{a} * {b}");
      }
    }
  }

  #[test]
  fn test_ops() {
    check_ops::<1>();
    check_ops::<2>();
    check_ops::<3>();
    check_ops::<4>();
    check_ops::<6>();
  }

  #[test]
  fn test_ord_round_trip() {
    let mut seen = [false; 6];
    for el in D3::for_each() {
      assert!(!seen[el.ord()]);
      seen[el.ord()] = true;
      assert_eq!(D3::from_ord(el.ord()), el);
    }
    assert!(seen.iter().all(|seen| *seen));
  }

  #[test]
  fn test_identity() {
    let id = D3::identity();
    for el in D3::for_each() {
      assert_eq!(id * el, el);
      assert_eq!(el * id, el);
    }
  }

  #[test]
  fn test_inv() {
    for el in D3::for_each() {
      assert!((el * el.inverse()).is_identity());
      assert!((el.inverse() * el).is_identity());
    }
  }

  #[test]
  fn test_not_abelian() {
    let r = D3::new(1, false);
    let f = D3::new(0, true);
    assert_ne!(r * f, f * r);
    assert_eq!(f * r, D3::new(2, true));
  }
}

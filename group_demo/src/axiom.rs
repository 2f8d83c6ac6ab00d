use std::{fmt::Display, str::FromStr};

use crate::{error::DemoError, make_demo_error};

/// One of the sections of a demo, each checking a single group axiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axiom {
  Closure,
  Identity,
  Associativity,
  Inverse,
}

impl Axiom {
  pub const ALL: [Self; 4] = [
    Self::Closure,
    Self::Identity,
    Self::Associativity,
    Self::Inverse,
  ];

  /// The operand names read by this section, in order.
  pub const fn operands(self) -> &'static [&'static str] {
    match self {
      Self::Closure => &["a", "b"],
      Self::Identity | Self::Inverse => &["a"],
      Self::Associativity => &["a", "b", "c"],
    }
  }

  pub const fn arity(self) -> usize {
    self.operands().len()
  }

  pub const fn heading(self) -> &'static str {
    match self {
      Self::Closure => "Closure",
      Self::Identity => "Identity",
      Self::Associativity => "Associativity",
      Self::Inverse => "Inverse",
    }
  }
}

impl FromStr for Axiom {
  type Err = DemoError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|axiom| axiom.heading().eq_ignore_ascii_case(s))
      .ok_or_else(|| {
        make_demo_error!(
          "unknown axiom \"{}\", expected one of closure, identity, associativity, inverse",
          s
        )
      })
  }
}

impl Display for Axiom {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.heading())
  }
}

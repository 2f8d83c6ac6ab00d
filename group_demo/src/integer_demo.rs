use std::fmt::Display;

use algebra::{
  error::AlgebraResult,
  group::{EvenInteger, Group, Integer},
  monoid::Monoid,
};
use itertools::Itertools;
use tracing::debug;

use crate::{axiom::Axiom, component::Component, input};

pub const Z_GROUP_TAG: &str = "z-group-demo";
pub const EVEN_GROUP_TAG: &str = "even-group-demo";

/// Which subgroup of the integers under addition a demo shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegerFamily {
  /// ℤ.
  Integers,
  /// 2ℤ. Odd inputs are rejected before anything is computed.
  Evens,
}

#[derive(Clone, Copy, Debug)]
pub struct IntegerDemo {
  family: IntegerFamily,
}

impl IntegerDemo {
  pub const fn new(family: IntegerFamily) -> Self {
    Self { family }
  }

  pub const fn integers() -> Self {
    Self::new(IntegerFamily::Integers)
  }

  pub const fn evens() -> Self {
    Self::new(IntegerFamily::Evens)
  }

  pub const fn family(&self) -> IntegerFamily {
    self.family
  }

  fn invalid_message(axiom: Axiom) -> &'static str {
    match axiom {
      Axiom::Closure => "Please enter valid integers for a and b.",
      Axiom::Identity | Axiom::Inverse => "Please enter a valid integer for a.",
      Axiom::Associativity => "Please enter valid integers for a, b, and c.",
    }
  }

  fn parity_message(axiom: Axiom) -> &'static str {
    match axiom {
      Axiom::Closure => "Both a and b must be even numbers.",
      Axiom::Identity | Axiom::Inverse => "Please enter an even number for a.",
      Axiom::Associativity => "All of a, b, and c must be even numbers.",
    }
  }

  fn evaluate<G>(&self, axiom: Axiom, operands: &[G]) -> String
  where
    G: Group + Copy + Display,
  {
    match (axiom, operands) {
      (Axiom::Closure, &[a, b]) => {
        let reason = match self.family {
          IntegerFamily::Integers => "is an integer",
          IntegerFamily::Evens => "is even",
        };
        format!("Result: {a} + {b} = {}. Closure holds because the sum {reason}.", a * b)
      }
      (Axiom::Identity, &[a]) => {
        let id = G::identity();
        let note = match self.family {
          IntegerFamily::Integers => format!("The identity element in (ℤ, +) is {id}."),
          IntegerFamily::Evens => format!("The identity element is {id}, which is even."),
        };
        format!("Result: {a} + {id} = {}. {note}", a * id)
      }
      (Axiom::Associativity, &[a, b, c]) => {
        let left = (a * b) * c;
        let right = a * (b * c);
        let verdict = if left == right {
          "Associativity holds."
        } else {
          "Associativity does not hold!"
        };
        format!("Result: ( {a} + {b} ) + {c} = {left} and {a} + ( {b} + {c} ) = {right}. {verdict}")
      }
      (Axiom::Inverse, &[a]) => {
        let inverse = a.inverse();
        let note = match self.family {
          IntegerFamily::Integers => "Every integer a has an inverse (–a) such that a + (–a) = 0.",
          IntegerFamily::Evens => "Every even number a has an inverse (-a) such that a + (-a) = 0.",
        };
        format!("Result: {a} + ({inverse}) = {}. {note}", a * inverse)
      }
      _ => unreachable!("operand count is checked against the arity of {axiom}"),
    }
  }
}

impl Component for IntegerDemo {
  fn tag(&self) -> &'static str {
    match self.family {
      IntegerFamily::Integers => Z_GROUP_TAG,
      IntegerFamily::Evens => EVEN_GROUP_TAG,
    }
  }

  fn title(&self) -> &'static str {
    match self.family {
      IntegerFamily::Integers => "Z Group Demonstration",
      IntegerFamily::Evens => "Even Numbers Group Demonstration",
    }
  }

  fn prompt(&self, axiom: Axiom) -> &'static str {
    match (self.family, axiom) {
      (IntegerFamily::Integers, Axiom::Closure) => {
        "Enter two integers to demonstrate closure: a + b is an integer."
      }
      (IntegerFamily::Integers, Axiom::Identity) => {
        "Enter an integer to demonstrate the identity element (0): a + 0 = a."
      }
      (IntegerFamily::Integers, Axiom::Associativity) => {
        "Enter three integers to demonstrate associativity: (a + b) + c = a + (b + c)."
      }
      (IntegerFamily::Integers, Axiom::Inverse) => {
        "Enter an integer to demonstrate the inverse property: a + (–a) = 0."
      }
      (IntegerFamily::Evens, Axiom::Closure) => {
        "Enter two even numbers to demonstrate closure: a + b should be even."
      }
      (IntegerFamily::Evens, Axiom::Identity) => {
        "The identity element is 0. Enter an even number to demonstrate a + 0 = a."
      }
      (IntegerFamily::Evens, Axiom::Associativity) => {
        "Enter three even numbers to demonstrate associativity: (a + b) + c = a + (b + c)."
      }
      (IntegerFamily::Evens, Axiom::Inverse) => {
        "Enter an even number to demonstrate the inverse property: a + (–a) = 0."
      }
    }
  }

  fn check(&self, axiom: Axiom, inputs: &[&str]) -> String {
    let Some(values) = input::parse_ints(inputs, axiom.arity()) else {
      debug!(?inputs, %axiom, "rejected non-integer input");
      return Self::invalid_message(axiom).to_owned();
    };

    match self.family {
      IntegerFamily::Integers => {
        let operands = values.into_iter().map(Integer::from).collect_vec();
        self.evaluate(axiom, &operands)
      }
      IntegerFamily::Evens => {
        match values
          .into_iter()
          .map(EvenInteger::new)
          .collect::<AlgebraResult<Vec<_>>>()
        {
          Ok(operands) => self.evaluate(axiom, &operands),
          Err(err) => {
            debug!(%err, %axiom, "rejected odd input");
            Self::parity_message(axiom).to_owned()
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_tags() {
    assert_eq!(IntegerDemo::integers().tag(), Z_GROUP_TAG);
    assert_eq!(IntegerDemo::evens().tag(), EVEN_GROUP_TAG);
  }

  #[test]
  fn test_extra_inputs_ignored() {
    assert_eq!(
      IntegerDemo::integers().check(Axiom::Identity, &["5", "garbage"]),
      "Result: 5 + 0 = 5. The identity element in (ℤ, +) is 0."
    );
  }

  #[test]
  fn test_validation_before_parity() {
    assert_eq!(
      IntegerDemo::evens().check(Axiom::Closure, &["3", "x"]),
      "Please enter valid integers for a and b."
    );
  }
}

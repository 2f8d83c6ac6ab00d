use algebra::{group::D3Element, monoid::Monoid};
use tracing::debug;

/// One application of a generator: `generator * previous = product`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
  pub generator: D3Element,
  pub previous: D3Element,
  pub product: D3Element,
}

/// The element reached by applying generators one after another, each
/// multiplied on the left. Starts at the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accumulator {
  current: D3Element,
}

impl Accumulator {
  pub fn new() -> Self {
    Self {
      current: D3Element::identity(),
    }
  }

  pub fn current(&self) -> D3Element {
    self.current
  }

  pub fn apply(&mut self, generator: D3Element) -> Step {
    let previous = self.current;
    self.current = generator * previous;
    debug!(
      generator = generator.name(),
      previous = previous.name(),
      product = self.current.name(),
      "applied generator"
    );
    Step {
      generator,
      previous,
      product: self.current,
    }
  }

  pub fn reset(&mut self) {
    self.current = D3Element::identity();
  }
}

impl Default for Accumulator {
  fn default() -> Self {
    Self::new()
  }
}

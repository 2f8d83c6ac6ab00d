use algebra::{
  error::{D3Result, InvalidElement},
  group::{compose, inverse, D3Element},
};
use tracing::warn;

use crate::{
  accumulator::{Accumulator, Step},
  animation::{Animation, AnimationOptions, Animator},
  axiom::Axiom,
  component::Component,
  pose::{self, Transform},
  symbol::{element_mathml, math_row, render_mathml, DOT, EQUALS},
};

pub const TRIANGLE_GROUP_TAG: &str = "triangle-group-demo";

/// The visual target the triangle's animations run on.
pub const TRIANGLE_TARGET: &str = "triangle-group";

/// Drawn in place of a product that could not be computed.
const UNKNOWN: &str = "?";

/// The button caption for each generator.
pub const fn generator_label(el: D3Element) -> &'static str {
  match el {
    D3Element::One => "1 (Identity)",
    D3Element::R => "r (Rotate 120°)",
    D3Element::R2 => "r² (Rotate 240°)",
    D3Element::F => "f (Reflect)",
    D3Element::RF => "r·f",
    D3Element::R2F => "r²·f",
  }
}

/// The dihedral group D3, shown as the symmetries of a triangle. Pressing a
/// generator multiplies it into the accumulated element on the left and
/// animates the triangle to the new element.
#[derive(Debug)]
pub struct TriangleDemo {
  accumulator: Accumulator,
  animator: Animator,
  options: AnimationOptions,
  formula: String,
}

impl TriangleDemo {
  pub fn new(options: AnimationOptions) -> Self {
    Self {
      accumulator: Accumulator::new(),
      animator: Animator::new(),
      options,
      formula: Self::identity_formula(),
    }
  }

  fn identity_formula() -> String {
    let one = element_mathml(D3Element::One);
    format!("Result: {}", math_row(&format!("{one}{EQUALS}{one}")))
  }

  /// The multiplication shown above the triangle, `g ⋅ current = product`
  /// for the most recent press.
  pub fn formula_display(&self) -> &str {
    &self.formula
  }

  pub fn current(&self) -> D3Element {
    self.accumulator.current()
  }

  pub fn options(&self) -> &AnimationOptions {
    &self.options
  }

  pub fn transform(&self) -> Transform {
    self.animator.transform(TRIANGLE_TARGET)
  }

  /// Labels always follow the accumulated element, not the animation.
  pub fn vertex_labels(&self) -> [char; 3] {
    pose::vertex_labels(self.current())
  }

  pub fn is_animating(&self) -> bool {
    self.animator.is_animating(TRIANGLE_TARGET)
  }

  /// Raises the triangle. Any turn or flip still in flight carries on
  /// while it is held.
  pub fn pointer_down(&mut self) {
    let animation = Animation::raise(self.transform(), self.current(), &self.options);
    self.animator.start(TRIANGLE_TARGET, animation);
  }

  /// Releasing a generator button applies it.
  pub fn pointer_up(&mut self, generator: D3Element) -> Step {
    let step = self.accumulator.apply(generator);
    self.formula = format!(
      "Result: {}",
      math_row(&format!(
        "{}{DOT}{}{EQUALS}{}",
        element_mathml(step.generator),
        element_mathml(step.previous),
        element_mathml(step.product)
      ))
    );

    let animation = Animation::toward(self.transform(), step.product, &self.options);
    self.animator.start(TRIANGLE_TARGET, animation);
    step
  }

  /// A cancelled press leaves the group element alone and settles the
  /// triangle on it.
  pub fn pointer_cancel(&mut self) {
    let animation = Animation::toward(self.transform(), self.current(), &self.options);
    self.animator.start(TRIANGLE_TARGET, animation);
  }

  /// A full press and release.
  pub fn press(&mut self, generator: D3Element) -> Step {
    self.pointer_down();
    self.pointer_up(generator)
  }

  pub fn reset(&mut self) {
    self.animator.cancel_all();
    self.accumulator.reset();
    self.formula = Self::identity_formula();
  }

  /// Advances animations to `now`, in milliseconds.
  pub fn tick(&mut self, now: f64) -> Transform {
    self.animator.tick(now);
    self.transform()
  }

  fn field<'a>(inputs: &[&'a str], idx: usize) -> &'a str {
    inputs.get(idx).copied().unwrap_or("")
  }

  fn product_mathml(product: &D3Result<D3Element>) -> String {
    match product {
      Ok(el) => element_mathml(*el).to_owned(),
      Err(_) => render_mathml(UNKNOWN),
    }
  }

  fn verdict(verdict: D3Result<&str>) -> String {
    match verdict {
      Ok(verdict) => verdict.to_owned(),
      Err(InvalidElement(name)) => {
        warn!(element = name.as_str(), "selection is not an element of D3");
        format!("\"{name}\" is not an element of D₃.")
      }
    }
  }

  fn closure(a: &str, b: &str) -> String {
    let product = compose(a, b);
    let row = format!(
      "{}{DOT}{}{EQUALS}{}",
      render_mathml(a),
      render_mathml(b),
      Self::product_mathml(&product)
    );
    let verdict = product.map(|_| "Closure holds because the result is in D₃.");
    format!("Result: {}. {}", math_row(&row), Self::verdict(verdict))
  }

  fn identity(a: &str) -> String {
    let one = D3Element::One.name();
    let product = compose(one, a);
    let row = format!(
      "{}{DOT}{}{EQUALS}{}",
      render_mathml(one),
      render_mathml(a),
      Self::product_mathml(&product)
    );
    let verdict = product.map(|_| "The identity element is 1.");
    format!("Result: {}. {}", math_row(&row), Self::verdict(verdict))
  }

  fn associativity(a: &str, b: &str, c: &str) -> String {
    let left = compose(a, b).and_then(|ab| compose(ab.name(), c));
    let right = compose(b, c).and_then(|bc| compose(a, bc.name()));
    let (ma, mb, mc) = (render_mathml(a), render_mathml(b), render_mathml(c));
    let left_row = format!(
      "( {ma}{DOT}{mb} ){DOT}{mc}{EQUALS}{}",
      Self::product_mathml(&left)
    );
    let right_row = format!(
      "{ma}{DOT}( {mb}{DOT}{mc} ){EQUALS}{}",
      Self::product_mathml(&right)
    );
    let verdict = match (left, right) {
      (Ok(left), Ok(right)) if left == right => Ok("Associativity holds."),
      (Ok(_), Ok(_)) => Ok("Associativity fails!"),
      (Err(err), _) | (_, Err(err)) => Err(err),
    };
    format!(
      "Result: {} and {}. {}",
      math_row(&left_row),
      math_row(&right_row),
      Self::verdict(verdict)
    )
  }

  fn inverse(a: &str) -> String {
    let inv = inverse(a);
    let product = inv
      .clone()
      .and_then(|inv| compose(a, inv.name()));
    let row = format!(
      "{}{DOT}{}{EQUALS}{}",
      render_mathml(a),
      Self::product_mathml(&inv),
      Self::product_mathml(&product)
    );
    let verdict = product.map(|product| {
      if product == D3Element::One {
        "Inverse holds."
      } else {
        "Inverse fails!"
      }
    });
    format!("Result: {}. {}", math_row(&row), Self::verdict(verdict))
  }
}

impl Default for TriangleDemo {
  fn default() -> Self {
    Self::new(AnimationOptions::default())
  }
}

impl Component for TriangleDemo {
  fn tag(&self) -> &'static str {
    TRIANGLE_GROUP_TAG
  }

  fn title(&self) -> &'static str {
    "Triangle Group Demonstration (Dihedral Group D₃)"
  }

  fn prompt(&self, axiom: Axiom) -> &'static str {
    match axiom {
      Axiom::Closure => "Select two elements to demonstrate closure: a · b is an element of D₃.",
      Axiom::Identity => "Select an element to demonstrate the identity element (1): 1 · a = a.",
      Axiom::Associativity => {
        "Select three elements to demonstrate associativity: (a · b) · c = a · (b · c)."
      }
      Axiom::Inverse => "Select an element to demonstrate the inverse property: a · a⁻¹ = 1.",
    }
  }

  fn check(&self, axiom: Axiom, inputs: &[&str]) -> String {
    let field = |idx| Self::field(inputs, idx);
    match axiom {
      Axiom::Closure => Self::closure(field(0), field(1)),
      Axiom::Identity => Self::identity(field(0)),
      Axiom::Associativity => Self::associativity(field(0), field(1), field(2)),
      Axiom::Inverse => Self::inverse(field(0)),
    }
  }
}

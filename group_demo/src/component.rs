use crate::axiom::Axiom;

/// A demo that can be embedded under a tag name. Each component owns one
/// section per axiom; checking a section reads its raw field values and
/// returns the new contents of that section's result panel.
pub trait Component {
  fn tag(&self) -> &'static str;

  fn title(&self) -> &'static str;

  /// Instructions shown above an axiom's input fields.
  fn prompt(&self, axiom: Axiom) -> &'static str;

  /// Runs the check for `axiom`. Missing or malformed inputs never fail; they
  /// produce a message in the panel instead.
  fn check(&self, axiom: Axiom, inputs: &[&str]) -> String;
}

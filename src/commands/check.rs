use anyhow::ensure;
use group_demo::{Axiom, Registry};
use itertools::Itertools;
use tracing::info;

#[derive(clap::Args, Debug)]
pub struct CheckCommand {
  /// Tag of the demo, e.g. `z-group-demo`.
  tag: String,

  /// One of closure, identity, associativity, inverse.
  axiom: Axiom,

  /// Field values, in order.
  #[arg(allow_hyphen_values = true, num_args = 0..)]
  inputs: Vec<String>,
}

impl CheckCommand {
  pub fn run(self) -> anyhow::Result<()> {
    let registry = Registry::with_builtin();
    let component = registry.create(&self.tag)?;
    ensure!(
      self.inputs.len() <= self.axiom.arity(),
      "{} takes at most {} inputs ({}), got {}",
      self.axiom,
      self.axiom.arity(),
      self.axiom.operands().iter().join(", "),
      self.inputs.len()
    );

    info!(tag = self.tag.as_str(), axiom = %self.axiom, inputs = ?self.inputs, "checking");
    let inputs = self.inputs.iter().map(String::as_str).collect_vec();
    println!("{}", component.check(self.axiom, &inputs));
    Ok(())
  }
}

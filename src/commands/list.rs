use group_demo::{Axiom, Registry};

#[derive(clap::Args, Debug)]
pub struct ListCommand {
  /// Also print the instructions for each section.
  #[arg(long)]
  prompts: bool,
}

impl ListCommand {
  pub fn run(self) -> anyhow::Result<()> {
    let registry = Registry::with_builtin();
    for tag in registry.tags() {
      let component = registry.create(tag)?;
      println!("{tag}: {}", component.title());
      if self.prompts {
        for axiom in Axiom::ALL {
          println!("  {axiom}: {}", component.prompt(axiom));
        }
      }
    }
    Ok(())
  }
}

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

use crate::commands::{check::CheckCommand, list::ListCommand, walk::WalkCommand};

#[derive(Parser)]
#[command(about = "Demonstrations of the group axioms")]
struct Cli {
  /// Log more detail. Repeat for per-frame tracing.
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  #[clap(about = r#"List the demos and their sections"#)]
  List(ListCommand),

  #[clap(about = r#"Run one axiom section of a demo"#)]
  Check(CheckCommand),

  #[clap(about = r#"Press triangle generators one after another"#)]
  Walk(WalkCommand),
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let level = match cli.verbose {
    0 => Level::INFO,
    1 => Level::DEBUG,
    _ => Level::TRACE,
  };
  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(std::io::stderr)
    .init();

  match cli.command {
    Command::List(command) => command.run(),
    Command::Check(command) => command.run(),
    Command::Walk(command) => command.run(),
  }
}

#![allow(clippy::print_stdout, reason = "Task runner reports to the terminal")]
use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const BIN_NAME: &str = "navwalker";

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the navwalker CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate manpages.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,

    /// Shells to generate completions for. Defaults to all supported shells.
    #[arg(short, long, value_enum, action = clap::ArgAction::Append)]
    shell: Vec<CompletionShell>,
  },
}

#[derive(Clone, Copy, ValueEnum)]
enum CompletionShell {
  Bash,
  Zsh,
  Fish,
  PowerShell,
}

impl From<CompletionShell> for Shell {
  fn from(shell: CompletionShell) -> Self {
    match shell {
      CompletionShell::Bash => Self::Bash,
      CompletionShell::Zsh => Self::Zsh,
      CompletionShell::Fish => Self::Fish,
      CompletionShell::PowerShell => Self::PowerShell,
    }
  }
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
      shell,
    } => {
      let shells = if shell.is_empty() {
        CompletionShell::value_variants().to_vec()
      } else {
        shell
      };

      if !manpage_only {
        generate_completions(&output_dir, &shells)?;
      }
      if !completions_only {
        generate_manpages(&output_dir)?;
      }
    },
  }

  Ok(())
}

/// Generate shell completions for the requested shells.
fn generate_completions(
  output_dir: &Path,
  shells: &[CompletionShell],
) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;

  let mut cmd = navwalker::cli::Cli::command();
  for shell in shells {
    generate_to(Shell::from(*shell), &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| {
        format!("Failed to generate {} completions", Shell::from(*shell))
      })?;
  }

  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Generate `navwalker.1` plus one page per subcommand.
fn generate_manpages(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;

  let cmd = navwalker::cli::Cli::command().name(BIN_NAME);
  write_manpage(&man_dir, BIN_NAME, cmd.clone())?;

  for sub in cmd.get_subcommands() {
    let name = format!("{BIN_NAME}-{}", sub.get_name());
    write_manpage(&man_dir, &name, sub.clone())?;
  }

  println!("Manpages generated in {}", man_dir.display());
  Ok(())
}

fn write_manpage(man_dir: &Path, name: &str, cmd: Command) -> Result<()> {
  let file_path = man_dir.join(format!("{name}.1"));
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  Man::new(cmd)
    .title(name.to_uppercase())
    .render(&mut file)
    .with_context(|| format!("Failed to render manpage {name}"))?;
  Ok(())
}

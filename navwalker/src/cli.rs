use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command line interface for navwalker
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "navwalker: render navigation menus as Bulma navbars"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(
    short = 'c',
    long = "config-file",
    global = true,
    action = clap::ArgAction::Append
  )]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the navwalker CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new navwalker configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "navwalker.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Render menu files to HTML.
  Render(RenderArgs),
}

/// Arguments of the `render` subcommand. Flags given here take precedence
/// over the configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
  /// Menu files to render (JSON or TOML). Menus are rendered in parallel and
  /// written in the order given.
  #[arg(required = true)]
  pub menus: Vec<PathBuf>,

  /// Write the markup to this file instead of standard output.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Align dropdowns to the right.
  #[arg(long)]
  pub right: bool,

  /// Open dropdowns upwards.
  #[arg(long)]
  pub up: bool,

  /// Do not open dropdowns on hover.
  #[arg(long = "no-hover")]
  pub no_hover: bool,

  /// Use the boxed dropdown style.
  #[arg(long)]
  pub boxed: bool,

  /// Emit no indentation or newlines between items.
  #[arg(long = "discard-spacing")]
  pub discard_spacing: bool,

  /// Levels to render: -1 renders every item flat, 0 renders all levels.
  #[arg(short, long, allow_negative_numbers = true)]
  pub depth: Option<i32>,

  /// Object id of the page being viewed, for active item detection.
  #[arg(long = "current-id")]
  pub current_id: Option<u64>,

  /// Object id of the page listing posts.
  #[arg(long = "posts-page-id")]
  pub posts_page_id: Option<u64>,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

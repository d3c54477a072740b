use std::{
  fs,
  io::{self, Write},
  path::Path,
};

use color_eyre::eyre::{Context, Result};
use log::info;
use navwalker_config::{Config, ItemSpacing};
use navwalker_html::{Menu, MenuRenderer, RenderArguments, render_nav_menu};
use rayon::prelude::*;

use crate::cli::RenderArgs;

/// Apply the flags of the `render` subcommand on top of `config`.
///
/// Flags only ever switch a setting on (or, for `--no-hover`, off), so an
/// absent flag leaves the configured value alone.
pub fn merge_with_cli(config: &mut Config, args: &RenderArgs) {
  if args.right {
    config.walker.dropdown_right = true;
  }
  if args.up {
    config.walker.dropdown_up = true;
  }
  if args.no_hover {
    config.walker.hoverable = false;
  }
  if args.boxed {
    config.walker.boxed = true;
  }
  if args.discard_spacing {
    config.arguments.item_spacing = ItemSpacing::Discard;
  }
  if let Some(depth) = args.depth {
    config.menu.depth = depth;
  }
  if let Some(current_id) = args.current_id {
    config.page.current_id = Some(current_id);
  }
  if let Some(posts_page_id) = args.posts_page_id {
    config.page.posts_page_id = Some(posts_page_id);
  }
}

/// Load and render every menu file, concatenating the results in the order
/// the files were given.
///
/// # Errors
///
/// Returns an error naming the first menu file that could not be loaded.
pub fn render_menus<P>(config: &Config, menus: &[P]) -> Result<String>
where
  P: AsRef<Path> + Sync,
{
  let renderer = MenuRenderer::new(config.walker);
  let args = RenderArguments::from(config);

  let rendered = menus
    .par_iter()
    .map(|path| {
      let path = path.as_ref();
      let menu = Menu::from_file(path).wrap_err_with(|| {
        format!("Failed to load menu from {}", path.display())
      })?;
      Ok(render_nav_menu(&renderer, &menu, &config.menu, &args))
    })
    .collect::<Result<Vec<_>>>()?;

  Ok(rendered.concat())
}

/// Run the `render` subcommand with an already loaded configuration.
///
/// # Errors
///
/// Returns an error if the flags produce an invalid configuration, a menu
/// cannot be loaded or the output cannot be written.
pub fn run(mut config: Config, args: &RenderArgs) -> Result<()> {
  merge_with_cli(&mut config, args);
  config
    .validate()
    .wrap_err("Invalid configuration after applying command line flags")?;

  info!("Rendering {} menu(s)...", args.menus.len());
  let html = render_menus(&config, &args.menus)?;

  if let Some(output) = &args.output {
    if let Some(parent) = output.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
      info!("Created directory: {}", parent.display());
    }

    fs::write(output, &html).wrap_err_with(|| {
      format!("Failed to write menu markup to {}", output.display())
    })?;
    info!("Menu markup written to {}", output.display());
  } else {
    let mut stdout = io::stdout().lock();
    stdout
      .write_all(html.as_bytes())
      .and_then(|()| stdout.flush())
      .wrap_err("Failed to write menu markup to standard output")?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_flags_override_config() {
    let mut config = Config::default();
    config.page.current_id = Some(3);

    merge_with_cli(&mut config, &RenderArgs {
      right: true,
      no_hover: true,
      discard_spacing: true,
      depth: Some(2),
      posts_page_id: Some(9),
      ..Default::default()
    });

    assert!(config.walker.dropdown_right);
    assert!(!config.walker.hoverable);
    assert!(!config.walker.dropdown_up);
    assert_eq!(config.arguments.item_spacing, ItemSpacing::Discard);
    assert_eq!(config.menu.depth, 2);
    assert_eq!(config.page.current_id, Some(3));
    assert_eq!(config.page.posts_page_id, Some(9));
  }

  #[test]
  fn test_absent_flags_keep_config() {
    let mut config = Config::default();
    config.walker.dropdown_up = true;
    config.menu.depth = -1;

    let before = config.clone();
    merge_with_cli(&mut config, &RenderArgs::default());
    assert_eq!(config, before);
  }
}

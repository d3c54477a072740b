use std::{fmt::Write, fs, path::Path};

use navwalker_config::{
  MenuConfig,
  menu::{WRAP_CLASS, WRAP_ID, WRAP_ITEMS},
};
use serde::{Deserialize, Serialize};

use crate::{
  args::RenderArguments,
  error::MenuError,
  escape::escape_attribute,
  item::{HAS_CHILDREN_CLASS, MenuItem},
  tree::{MaxDepth, walk},
  walker::Walker,
};

/// Container elements a menu may be wrapped in.
const ALLOWED_CONTAINERS: &[&str] = &["div", "nav"];

/// A named, ordered list of menu items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
  /// Name of the menu, used for the default element id.
  pub name: String,

  pub items: Vec<MenuItem>,
}

/// Shapes a menu file may take: a bare list of items, or a table with a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum MenuFile {
  Items(Vec<MenuItem>),
  Menu(Menu),
}

impl Menu {
  #[must_use]
  pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
    Self {
      name: name.into(),
      items,
    }
  }

  /// Load a menu from a JSON or TOML file.
  ///
  /// A menu given as a bare list of items, or without a name, is named after
  /// the file stem.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if its
  /// extension is neither `.json` nor `.toml`.
  pub fn from_file(path: &Path) -> Result<Self, MenuError> {
    let content = fs::read_to_string(path)?;

    let file: MenuFile = match path.extension().and_then(|ext| ext.to_str()) {
      Some("json") => serde_json::from_str(&content)?,
      Some("toml") => toml::from_str(&content)?,
      _ => {
        return Err(MenuError::UnsupportedFormat(path.display().to_string()));
      },
    };

    let stem = || {
      path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
    };

    let menu = match file {
      MenuFile::Items(items) => Self::new(stem(), items),
      MenuFile::Menu(menu) if menu.name.is_empty() => Self {
        name: stem(),
        ..menu
      },
      MenuFile::Menu(menu) => menu,
    };

    log::debug!(
      "Loaded menu '{}' with {} item(s) from {}",
      menu.name,
      menu.items.len(),
      path.display()
    );

    Ok(menu)
  }

  /// Id of the element holding the items: the configured id, or
  /// `menu-<name>`.
  #[must_use]
  pub fn menu_id(&self, options: &MenuConfig) -> String {
    options
      .menu_id
      .clone()
      .unwrap_or_else(|| format!("menu-{}", self.name))
  }

  /// Items sorted by `menu_order`, with the has-children marker added to
  /// every item that some other item names as its parent.
  ///
  /// The sort is stable, so items sharing a position keep their list order.
  #[must_use]
  pub fn prepared_items(&self) -> Vec<MenuItem> {
    let mut items = self.items.clone();
    items.sort_by_key(|item| item.menu_order);

    let parents: Vec<u64> =
      items.iter().filter_map(MenuItem::parent_id).collect();

    for item in &mut items {
      let is_parent = item
        .node_id
        .is_some_and(|id| id != 0 && parents.contains(&id));
      if is_parent && !item.has_children() {
        item.classes.push(HAS_CHILDREN_CLASS.to_string());
      }
    }

    items
  }
}

/// Render `menu` with `walker` and wrap the result as `options` describe.
///
/// Returns an empty string when nothing is rendered, so an empty menu leaves
/// no wrapper markup behind.
pub fn render_nav_menu<W>(
  walker: &W,
  menu: &Menu,
  options: &MenuConfig,
  args: &RenderArguments,
) -> String
where
  W: Walker + ?Sized,
{
  let Some(max_depth) = MaxDepth::from_level(options.depth) else {
    log::warn!(
      "Not rendering menu '{}': invalid depth {}",
      menu.name,
      options.depth
    );
    return String::new();
  };

  let items = walk(walker, &menu.prepared_items(), max_depth, args);
  if items.is_empty() {
    log::debug!("Menu '{}' rendered no items", menu.name);
    return String::new();
  }

  let wrapped = fill_items_wrap(
    &options.items_wrap,
    &escape_attribute(&menu.menu_id(options)),
    &escape_attribute(&options.menu_class),
    &items,
  );

  let container = options.container.as_str();
  if container.is_empty() {
    return wrapped;
  }
  if !ALLOWED_CONTAINERS.contains(&container) {
    log::warn!(
      "Ignoring unsupported menu container '{container}', expected one of: {}",
      ALLOWED_CONTAINERS.join(", ")
    );
    return wrapped;
  }

  // Writing to String is infallible
  let mut html = format!("<{container}");
  if let Some(id) = options.container_id.as_deref().filter(|id| !id.is_empty())
  {
    let _ = write!(html, " id=\"{}\"", escape_attribute(id));
  }
  if !options.container_class.is_empty() {
    let _ = write!(
      html,
      " class=\"{}\"",
      escape_attribute(&options.container_class)
    );
  }
  let _ = write!(html, ">{wrapped}</{container}>");
  html
}

/// Substitute the `items_wrap` placeholders in a single pass over `format`.
///
/// Substituted values are never scanned again, so a menu id or item markup
/// containing a placeholder is emitted as is.
fn fill_items_wrap(format: &str, id: &str, class: &str, items: &str) -> String {
  let placeholders = [(WRAP_ID, id), (WRAP_CLASS, class), (WRAP_ITEMS, items)];
  let mut out = String::with_capacity(format.len() + items.len());
  let mut rest = format;

  while let Some(at) = rest.find('%') {
    let (before, from) = rest.split_at(at);
    out.push_str(before);

    if let Some((value, after)) =
      placeholders.iter().find_map(|(placeholder, value)| {
        from.strip_prefix(placeholder).map(|after| (value, after))
      })
    {
      out.push_str(value);
      rest = after;
    } else {
      out.push('%');
      rest = from.strip_prefix('%').unwrap_or_default();
    }
  }

  out.push_str(rest);
  out
}

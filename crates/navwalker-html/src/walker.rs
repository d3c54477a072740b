use std::{borrow::Cow, fmt::Write};

use navwalker_config::{ItemSpacing, RenderConfig};

use crate::{
  args::RenderArguments,
  escape::{escape_attribute, escape_html, escape_url},
  hooks::{Attributes, Hooks},
  item::MenuItem,
};

const NAVBAR_DROPDOWN: &str = "navbar-dropdown";
const NAVBAR_DIVIDER: &str = "<hr class=\"navbar-divider\">";
const NAVBAR_ITEM: &str = "navbar-item";
const NAVBAR_LINK: &str = "navbar-link";
const HAS_DROPDOWN: &str = "has-dropdown";
const HAS_DROPDOWN_UP: &str = "has-dropdown-up";
const IS_HOVERABLE: &str = "is-hoverable";
const IS_RIGHT: &str = "is-right";
const IS_BOXED: &str = "is-boxed";
const IS_ACTIVE: &str = "is-active";

/// Callbacks a traversal driver invokes while walking a menu tree.
///
/// The driver owns the tree and the depth bookkeeping: it calls
/// [`Walker::open_level`] with the parent's depth before the first child of
/// an item, [`Walker::close_level`] after the last one, and
/// [`Walker::close_item`] once an item and all of its children are done.
pub trait Walker {
  /// Markup opening the children of an item at `depth`.
  fn open_level(&self, depth: usize, args: &RenderArguments) -> String;

  /// Markup closing what [`Walker::open_level`] opened at `depth`.
  fn close_level(&self, depth: usize, args: &RenderArguments) -> String;

  /// Render one item, or `None` if it cannot be rendered. A skipped item
  /// must not be closed.
  fn render_item(
    &self,
    item: &MenuItem,
    depth: usize,
    args: &RenderArguments,
  ) -> Option<RenderedItem>;

  /// Markup closing an item returned by [`Walker::render_item`].
  fn close_item(
    &self,
    item: &RenderedItem,
    depth: usize,
    args: &RenderArguments,
  ) -> String;
}

/// An item rendered by [`MenuRenderer::render_item`], carrying what its
/// closing markup depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
  /// Opening markup of the item.
  pub markup: String,

  /// Whether the item opened a `has-dropdown` wrapper that must be closed.
  pub dropdown: bool,

  /// Spacing in effect for the item after the item arguments hook ran.
  pub item_spacing: ItemSpacing,
}

/// Renders menu items as Bulma navbar markup.
///
/// Top-level items with children become `navbar-link` headers wrapped in a
/// `has-dropdown` element, and their children are listed in a
/// `navbar-dropdown`. Bulma cannot nest dropdowns, so every level past the
/// first is flattened into the same dropdown behind a `navbar-divider`.
///
/// The renderer only holds its configuration and hooks, so a single instance
/// can be shared by any number of renders.
#[derive(Debug, Default)]
pub struct MenuRenderer {
  config: RenderConfig,
  hooks:  Hooks,
}

impl MenuRenderer {
  #[must_use]
  pub fn new(config: RenderConfig) -> Self {
    Self {
      config,
      hooks: Hooks::default(),
    }
  }

  /// Use `hooks` for every item this renderer renders.
  #[must_use]
  pub fn with_hooks(mut self, hooks: Hooks) -> Self {
    self.hooks = hooks;
    self
  }

  #[must_use]
  pub const fn config(&self) -> &RenderConfig {
    &self.config
  }

  #[must_use]
  pub const fn hooks(&self) -> &Hooks {
    &self.hooks
  }

  /// Classes of the `navbar-dropdown` container.
  fn dropdown_classes(&self) -> Vec<&'static str> {
    let mut classes = vec![NAVBAR_DROPDOWN];
    if self.config.dropdown_right {
      classes.push(IS_RIGHT);
    }
    if self.config.boxed {
      classes.push(IS_BOXED);
    }
    classes
  }

  /// Classes of the `has-dropdown` wrapper around a dropdown header.
  fn dropdown_header_classes(&self) -> Vec<&'static str> {
    let mut classes = vec![NAVBAR_ITEM, HAS_DROPDOWN];
    if self.config.dropdown_up {
      classes.push(HAS_DROPDOWN_UP);
    }
    if self.config.hoverable {
      classes.push(IS_HOVERABLE);
    }
    classes
  }

  fn item_classes(
    &self,
    item: &MenuItem,
    target_id: u64,
    header: bool,
    depth: usize,
    args: &RenderArguments,
  ) -> String {
    let mut classes = item.classes.clone();

    let entry_id = item.entry_id();
    if entry_id != 0 {
      classes.push(format!("menu-item-{entry_id}"));
    }

    // Dropdown headers open the dropdown instead of navigating
    classes.push(if header { NAVBAR_LINK } else { NAVBAR_ITEM }.to_string());

    if args.page.is_active(item, target_id) {
      classes.push(IS_ACTIVE.to_string());
    }

    self
      .hooks
      .apply_css_class(classes, item, args, depth)
      .join(" ")
  }

  fn link_attributes(
    &self,
    item: &MenuItem,
    classes: String,
    depth: usize,
    args: &RenderArguments,
  ) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("class".to_string(), classes);

    for (name, value) in [
      ("href", &item.url),
      ("title", &item.attr_title),
      ("target", &item.target),
      ("rel", &item.relationship),
    ] {
      if !value.is_empty() {
        attributes.insert(name.to_string(), value.clone());
      }
    }

    let entry_id = item.entry_id();
    if entry_id != 0 {
      let element_id = self.hooks.apply_item_id(
        format!("menu-item-{entry_id}"),
        item,
        args,
        depth,
      );
      if !element_id.is_empty() {
        attributes.insert("id".to_string(), element_id);
      }
    }

    self
      .hooks
      .apply_link_attributes(attributes, item, args, depth)
  }
}

impl Walker for MenuRenderer {
  fn open_level(&self, depth: usize, _args: &RenderArguments) -> String {
    if depth == 0 {
      format!(
        "<div class=\"{}\">",
        escape_attribute(&self.dropdown_classes().join(" "))
      )
    } else {
      NAVBAR_DIVIDER.to_string()
    }
  }

  fn close_level(&self, depth: usize, _args: &RenderArguments) -> String {
    if depth == 0 {
      "</div>".to_string()
    } else {
      String::new()
    }
  }

  fn render_item(
    &self,
    item: &MenuItem,
    depth: usize,
    args: &RenderArguments,
  ) -> Option<RenderedItem> {
    let Some(title) = item.title() else {
      log::debug!(
        "Skipping menu item {} at depth {depth}: no title",
        item.entry_id()
      );
      return None;
    };

    let args = self.hooks.apply_item_args(args.clone(), item, depth);
    let target_id = item.target_id();
    let header = item.has_children() && depth == 0;

    let classes = self.item_classes(item, target_id, header, depth, &args);
    let attributes = self.link_attributes(item, classes, depth, &args);

    let title = self.hooks.apply_the_title(title.to_string(), target_id);
    let title = self.hooks.apply_item_title(title, item, &args, depth);

    let element = if attributes.get("href").is_some_and(|href| !href.is_empty())
    {
      "a"
    } else {
      "div"
    };

    let mut html = args.indent(depth);
    if header {
      // Writing to String is infallible
      let _ = write!(
        html,
        "<div class=\"{}\">",
        escape_attribute(&self.dropdown_header_classes().join(" "))
      );
    }

    html.push_str(&args.before);
    let _ = write!(html, "<{element}");
    for (name, value) in &attributes {
      let value = if name == "href" {
        Cow::Owned(escape_url(value))
      } else {
        escape_attribute(value)
      };
      let _ = write!(html, " {}=\"{value}\"", escape_html(name));
    }
    html.push('>');

    html.push_str(&args.link_before);
    html.push_str(&escape_html(&title));
    html.push_str(&args.link_after);
    let _ = write!(html, "</{element}>");
    html.push_str(&args.after);

    Some(RenderedItem {
      markup:       self.hooks.apply_start_el(html, item, depth, &args),
      dropdown:     header,
      item_spacing: args.item_spacing,
    })
  }

  fn close_item(
    &self,
    item: &RenderedItem,
    _depth: usize,
    _args: &RenderArguments,
  ) -> String {
    let mut html = String::new();
    if item.dropdown {
      html.push_str("</div>");
    }
    if !item.item_spacing.is_discard() {
      html.push('\n');
    }
    html
  }
}

use navwalker_config::{Config, ItemSpacing};

use crate::context::PageContext;

/// Per-render arguments passed to every walker callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderArguments {
  /// Markup placed before each item's link element.
  pub before: String,

  /// Markup placed after each item's link element.
  pub after: String,

  /// Markup placed inside the link element, before the title.
  pub link_before: String,

  /// Markup placed inside the link element, after the title.
  pub link_after: String,

  pub item_spacing: ItemSpacing,

  /// The page being rendered, for active-item detection.
  pub page: PageContext,
}

impl RenderArguments {
  /// Arguments with no extra markup, default spacing and the given page.
  #[must_use]
  pub fn new(page: PageContext) -> Self {
    Self {
      page,
      ..Default::default()
    }
  }

  #[must_use]
  pub const fn with_item_spacing(mut self, item_spacing: ItemSpacing) -> Self {
    self.item_spacing = item_spacing;
    self
  }

  /// Indentation for an item at `depth`: one tab per level, or nothing when
  /// spacing is discarded.
  #[must_use]
  pub fn indent(&self, depth: usize) -> String {
    if self.item_spacing.is_discard() {
      String::new()
    } else {
      "\t".repeat(depth)
    }
  }
}

impl From<&Config> for RenderArguments {
  fn from(config: &Config) -> Self {
    let arguments = &config.arguments;
    Self {
      before:       arguments.before.clone(),
      after:        arguments.after.clone(),
      link_before:  arguments.link_before.clone(),
      link_after:   arguments.link_after.clone(),
      item_spacing: arguments.item_spacing,
      page:         PageContext::from(&config.page),
    }
  }
}

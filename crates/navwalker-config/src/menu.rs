use serde::{Deserialize, Serialize};

/// Placeholder replaced by the menu element id in [`MenuConfig::items_wrap`].
pub const WRAP_ID: &str = "%1$s";

/// Placeholder replaced by the menu class in [`MenuConfig::items_wrap`].
pub const WRAP_CLASS: &str = "%2$s";

/// Placeholder replaced by the rendered items in [`MenuConfig::items_wrap`].
pub const WRAP_ITEMS: &str = "%3$s";

/// Options for the markup wrapped around a rendered menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
  /// Element wrapped around the whole menu. Empty disables the container.
  pub container: String,

  /// Class of the container element.
  pub container_class: String,

  /// Id of the container element.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub container_id: Option<String>,

  /// Class of the element holding the items.
  pub menu_class: String,

  /// Id of the element holding the items. Defaults to `menu-<name>`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub menu_id: Option<String>,

  /// Format of the element holding the items, with `%1$s` for the id,
  /// `%2$s` for the class and `%3$s` for the items.
  pub items_wrap: String,

  /// How many levels to render: `-1` renders every item flat, `0` renders
  /// all levels, `n` renders `n` levels.
  pub depth: i32,
}

impl Default for MenuConfig {
  fn default() -> Self {
    Self {
      container:       "div".to_string(),
      container_class: "navbar-menu".to_string(),
      container_id:    None,
      menu_class:      "navbar-start".to_string(),
      menu_id:         None,
      items_wrap:      format!(
        "<div id=\"{WRAP_ID}\" class=\"{WRAP_CLASS}\">{WRAP_ITEMS}</div>"
      ),
      depth:           0,
    }
  }
}

impl MenuConfig {
  /// Check that the depth and wrap format are usable.
  ///
  /// # Errors
  ///
  /// Returns an error if `depth` is below `-1` or `items_wrap` has no items
  /// placeholder.
  pub fn validate(&self) -> Result<(), String> {
    if self.depth < -1 {
      return Err(format!(
        "Menu depth must be -1 or greater, got {}",
        self.depth
      ));
    }

    if !self.items_wrap.contains(WRAP_ITEMS) {
      return Err(format!(
        "items_wrap must contain the '{WRAP_ITEMS}' placeholder: {}",
        self.items_wrap
      ));
    }

    Ok(())
  }
}

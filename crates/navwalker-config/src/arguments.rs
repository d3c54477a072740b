use serde::{Deserialize, Serialize};

/// Whitespace emitted between rendered menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSpacing {
  /// Indent each item with one tab per depth level and end it with a
  /// newline.
  #[default]
  #[serde(rename = "default", alias = "preserve")]
  Preserve,

  /// Emit items back to back, without indentation or newlines.
  Discard,
}

impl ItemSpacing {
  #[must_use]
  pub const fn is_discard(self) -> bool {
    matches!(self, Self::Discard)
  }
}

impl std::str::FromStr for ItemSpacing {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "default" | "preserve" => Ok(Self::Preserve),
      "discard" => Ok(Self::Discard),
      _ => Err(format!("Unknown item spacing: {s}")),
    }
  }
}

/// Markup fragments injected around every rendered item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentsConfig {
  /// Inserted before the item's link element.
  pub before: String,

  /// Inserted after the item's link element.
  pub after: String,

  /// Inserted inside the link element, before the title.
  pub link_before: String,

  /// Inserted inside the link element, after the title.
  pub link_after: String,

  /// Indentation and newline mode.
  pub item_spacing: ItemSpacing,
}

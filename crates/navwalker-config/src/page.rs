use serde::{Deserialize, Serialize};

/// Id the front page reports as the current page when it lists posts.
pub const DEFAULT_HOME_ID: u64 = 1;

/// Describes the page a menu is rendered on, for active-item detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
  /// Object id of the page being viewed, if known.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub current_id: Option<u64>,

  /// Object id of the page configured to list posts, if any.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub posts_page_id: Option<u64>,

  /// Current id that stands for the home view, for the posts page fallback.
  pub home_id: u64,

  /// Set when the page being viewed is an archive.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archive: Option<ArchiveConfig>,
}

impl Default for PageConfig {
  fn default() -> Self {
    Self {
      current_id:    None,
      posts_page_id: None,
      home_id:       DEFAULT_HOME_ID,
      archive:       None,
    }
  }
}

/// An archive view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
  /// Post types whose archive is being viewed. Empty for archives that are
  /// not post type archives (dates, categories, authors).
  pub post_types: Vec<String>,
}

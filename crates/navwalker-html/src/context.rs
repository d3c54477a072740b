use navwalker_config::{PageConfig, page::DEFAULT_HOME_ID};

use crate::item::{MenuItem, POST_TYPE_ARCHIVE};

/// The page a menu is rendered on.
///
/// Replaces the ambient "current page" queries of a CMS with plain data that
/// the caller hands to each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
  current_id:    Option<u64>,
  posts_page_id: Option<u64>,
  home_id:       u64,
  archive:       Option<Vec<String>>,
}

impl Default for PageContext {
  fn default() -> Self {
    Self {
      current_id:    None,
      posts_page_id: None,
      home_id:       DEFAULT_HOME_ID,
      archive:       None,
    }
  }
}

impl From<&PageConfig> for PageContext {
  fn from(config: &PageConfig) -> Self {
    Self {
      current_id:    config.current_id,
      posts_page_id: config.posts_page_id,
      home_id:       config.home_id,
      archive:       config
        .archive
        .as_ref()
        .map(|archive| archive.post_types.clone()),
    }
  }
}

impl PageContext {
  /// A context with no current page, so nothing is ever active.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the object id of the page being viewed.
  #[must_use]
  pub const fn with_current(mut self, id: u64) -> Self {
    self.current_id = Some(id);
    self
  }

  /// Set the object id of the page listing posts.
  #[must_use]
  pub const fn with_posts_page(mut self, id: u64) -> Self {
    self.posts_page_id = Some(id);
    self
  }

  /// Set the current id that stands for the home view.
  #[must_use]
  pub const fn with_home(mut self, id: u64) -> Self {
    self.home_id = id;
    self
  }

  /// Mark the view as an archive of the given post types. An empty list is
  /// an archive that matches no post type archive item.
  #[must_use]
  pub fn with_archive<I, S>(mut self, post_types: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.archive = Some(post_types.into_iter().map(Into::into).collect());
    self
  }

  #[must_use]
  pub const fn current_target_id(&self) -> Option<u64> {
    self.current_id
  }

  #[must_use]
  pub const fn posts_page_id(&self) -> Option<u64> {
    self.posts_page_id
  }

  #[must_use]
  pub const fn is_archive_view(&self) -> bool {
    self.archive.is_some()
  }

  /// Whether the view is the archive of `post_type`.
  #[must_use]
  pub fn archive_matches(&self, post_type: &str) -> bool {
    self
      .archive
      .as_ref()
      .is_some_and(|types| types.iter().any(|t| t == post_type))
  }

  /// Whether `item`, resolved to `target_id`, points at the page being
  /// viewed.
  ///
  /// True when the current page is the target, when the home view is shown
  /// and the target is the posts page, or when the item links to the post
  /// type archive being viewed.
  #[must_use]
  pub fn is_active(&self, item: &MenuItem, target_id: u64) -> bool {
    let Some(current) = self.current_id else {
      return self.is_archive_match(item);
    };

    current == target_id
      || (current == self.home_id && self.posts_page_id == Some(target_id))
      || self.is_archive_match(item)
  }

  fn is_archive_match(&self, item: &MenuItem) -> bool {
    self.is_archive_view()
      && item.object_type == POST_TYPE_ARCHIVE
      && self.archive_matches(&item.object_subtype)
  }
}

#[cfg(test)]
mod tests {
  use navwalker_config::ArchiveConfig;

  use super::*;

  fn archive_item(post_type: &str) -> MenuItem {
    MenuItem {
      object_type: POST_TYPE_ARCHIVE.to_string(),
      object_subtype: post_type.to_string(),
      ..MenuItem::new("Archive", "/archive")
    }
  }

  #[test]
  fn test_current_page_matches_target() {
    let page = PageContext::new().with_current(5);
    let item = MenuItem::new("About", "/about");
    assert!(page.is_active(&item, 5));
    assert!(!page.is_active(&item, 6));
  }

  #[test]
  fn test_unknown_current_page_never_matches_zero() {
    let page = PageContext::new();
    let item = MenuItem::new("Custom", "https://example.com");
    assert!(!page.is_active(&item, 0));
  }

  #[test]
  fn test_posts_page_on_home_view() {
    let page = PageContext::new().with_current(1).with_posts_page(7);
    let item = MenuItem::new("Blog", "/blog");
    assert!(page.is_active(&item, 7));

    let page = PageContext::new().with_current(2).with_posts_page(7);
    assert!(!page.is_active(&item, 7));
  }

  #[test]
  fn test_custom_home_id() {
    let page = PageContext::new()
      .with_home(100)
      .with_current(100)
      .with_posts_page(7);
    assert!(page.is_active(&MenuItem::new("Blog", "/blog"), 7));
  }

  #[test]
  fn test_post_type_archive() {
    let page = PageContext::new().with_archive(["book"]);
    assert!(page.is_active(&archive_item("book"), 0));
    assert!(!page.is_active(&archive_item("movie"), 0));

    let mut plain = archive_item("book");
    plain.object_type = "post_type".to_string();
    assert!(!page.is_active(&plain, 0));
  }

  #[test]
  fn test_non_post_type_archive_matches_nothing() {
    let page = PageContext::new().with_archive(Vec::<String>::new());
    assert!(page.is_archive_view());
    assert!(!page.is_active(&archive_item("book"), 0));
  }

  #[test]
  fn test_from_page_config() {
    let config = PageConfig {
      current_id: Some(4),
      posts_page_id: Some(8),
      home_id: 4,
      archive: Some(ArchiveConfig {
        post_types: vec!["book".to_string()],
      }),
    };
    let page = PageContext::from(&config);

    assert_eq!(page.current_target_id(), Some(4));
    assert_eq!(page.posts_page_id(), Some(8));
    assert!(page.archive_matches("book"));
    assert!(page.is_active(&MenuItem::new("Blog", "/blog"), 8));
  }
}

use std::fmt;

use serde::{
  Deserialize,
  Deserializer,
  Serialize,
  de::{self, Visitor},
};

/// Class marking an item that owns a submenu.
pub const HAS_CHILDREN_CLASS: &str = "menu-item-has-children";

/// Object type of items linking to a post type archive.
pub const POST_TYPE_ARCHIVE: &str = "post_type_archive";

/// One navigation entry.
///
/// Field names follow the menu item objects WordPress hands to its walkers,
/// and the WordPress spellings are accepted as aliases when deserializing,
/// so exported menus can be fed in directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
  /// Id of the menu entry record itself.
  #[serde(
    alias = "ID",
    alias = "db_id",
    deserialize_with = "deserialize_id",
    skip_serializing_if = "Option::is_none"
  )]
  pub node_id: Option<u64>,

  /// Id of the object (page, post, term) the entry points to.
  #[serde(
    deserialize_with = "deserialize_id",
    skip_serializing_if = "Option::is_none"
  )]
  pub object_id: Option<u64>,

  /// Node id of the parent entry. `None` and `0` both mean top level.
  #[serde(
    alias = "menu_item_parent",
    deserialize_with = "deserialize_id",
    skip_serializing_if = "Option::is_none"
  )]
  pub parent: Option<u64>,

  /// Display text. Items without one are not rendered.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  pub url: String,

  /// Tooltip text, rendered as the `title` attribute.
  pub attr_title: String,

  pub target: String,

  /// XFN relationship, rendered as the `rel` attribute.
  #[serde(alias = "xfn")]
  pub relationship: String,

  /// Base classes, in order.
  pub classes: Vec<String>,

  /// Kind of object linked, such as `post_type` or `post_type_archive`.
  #[serde(alias = "type")]
  pub object_type: String,

  /// Subtype of the linked object, such as `page` or a custom post type.
  #[serde(alias = "object")]
  pub object_subtype: String,

  /// Position of the entry within its menu.
  #[serde(deserialize_with = "deserialize_order")]
  pub menu_order: i64,
}

impl MenuItem {
  /// Create an item with a title and URL.
  #[must_use]
  pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      title: Some(title.into()),
      url: url.into(),
      ..Default::default()
    }
  }

  #[must_use]
  pub const fn with_node_id(mut self, node_id: u64) -> Self {
    self.node_id = Some(node_id);
    self
  }

  #[must_use]
  pub const fn with_object_id(mut self, object_id: u64) -> Self {
    self.object_id = Some(object_id);
    self
  }

  #[must_use]
  pub const fn with_parent(mut self, parent: u64) -> Self {
    self.parent = Some(parent);
    self
  }

  #[must_use]
  pub fn with_class(mut self, class: impl Into<String>) -> Self {
    self.classes.push(class.into());
    self
  }

  /// Id used for active-item matching: the linked object, falling back to
  /// the entry itself, or `0` when neither is known.
  #[must_use]
  pub fn target_id(&self) -> u64 {
    self.object_id.or(self.node_id).unwrap_or(0)
  }

  /// Id of the entry record, or `0` when unknown.
  #[must_use]
  pub fn entry_id(&self) -> u64 {
    self.node_id.unwrap_or(0)
  }

  /// Parent entry id, with `0` normalized to `None`.
  #[must_use]
  pub fn parent_id(&self) -> Option<u64> {
    self.parent.filter(|id| *id != 0)
  }

  /// The title, if the item has a non-empty one.
  #[must_use]
  pub fn title(&self) -> Option<&str> {
    self.title.as_deref().filter(|title| !title.is_empty())
  }

  /// Whether the base classes carry the [`HAS_CHILDREN_CLASS`] marker.
  #[must_use]
  pub fn has_children(&self) -> bool {
    self.classes.iter().any(|class| class == HAS_CHILDREN_CLASS)
  }
}

/// Deserialize an id given as a number or a numeric string.
///
/// Menu exports frequently carry ids as strings; empty strings and nulls
/// become `None`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
  D: Deserializer<'de>,
{
  struct IdVisitor;

  impl<'de> Visitor<'de> for IdVisitor {
    type Value = Option<u64>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
      formatter.write_str("a non-negative integer id or a numeric string")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(Some(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      u64::try_from(value)
        .map(Some)
        .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      let value = value.trim();
      if value.is_empty() {
        return Ok(None);
      }
      value
        .parse()
        .map(Some)
        .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
      D: Deserializer<'de>,
    {
      deserializer.deserialize_any(self)
    }
  }

  deserializer.deserialize_any(IdVisitor)
}

/// Menu positions arrive as numbers or numeric strings. An empty string or
/// `null` means no explicit position.
fn deserialize_order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
  D: Deserializer<'de>,
{
  struct OrderVisitor;

  impl<'de> Visitor<'de> for OrderVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
      formatter.write_str("an integer position or a numeric string")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      i64::try_from(value)
        .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      let value = value.trim();
      if value.is_empty() {
        return Ok(0);
      }
      value
        .parse()
        .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(0)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(0)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
      D: Deserializer<'de>,
    {
      deserializer.deserialize_any(self)
    }
  }

  deserializer.deserialize_any(OrderVisitor)
}

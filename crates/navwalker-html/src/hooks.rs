//! Extension points applied while rendering an item.
//!
//! Each hook point keeps an ordered list of callbacks. Applying a hook folds
//! the value through every callback in registration order, so later callbacks
//! see what earlier ones produced. A hook point without callbacks passes the
//! value through untouched.

use std::fmt;

use indexmap::IndexMap;

use crate::{args::RenderArguments, item::MenuItem};

/// Ordered attribute mapping of an item's link element.
pub type Attributes = IndexMap<String, String>;

type ItemArgsHook =
  Box<dyn Fn(RenderArguments, &MenuItem, usize) -> RenderArguments + Send + Sync>;
type CssClassHook = Box<
  dyn Fn(Vec<String>, &MenuItem, &RenderArguments, usize) -> Vec<String>
    + Send
    + Sync,
>;
type StringHook = Box<
  dyn Fn(String, &MenuItem, &RenderArguments, usize) -> String + Send + Sync,
>;
type LinkAttributesHook = Box<
  dyn Fn(Attributes, &MenuItem, &RenderArguments, usize) -> Attributes
    + Send
    + Sync,
>;
type TheTitleHook = Box<dyn Fn(String, u64) -> String + Send + Sync>;
type StartElHook = Box<
  dyn Fn(String, &MenuItem, usize, &RenderArguments) -> String + Send + Sync,
>;

/// Registry of transform callbacks consulted by the menu renderer.
#[derive(Default)]
pub struct Hooks {
  item_args:       Vec<ItemArgsHook>,
  css_class:       Vec<CssClassHook>,
  item_id:         Vec<StringHook>,
  link_attributes: Vec<LinkAttributesHook>,
  the_title:       Vec<TheTitleHook>,
  item_title:      Vec<StringHook>,
  start_el:        Vec<StartElHook>,
}

impl fmt::Debug for Hooks {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Hooks")
      .field("item_args", &self.item_args.len())
      .field("css_class", &self.css_class.len())
      .field("item_id", &self.item_id.len())
      .field("link_attributes", &self.link_attributes.len())
      .field("the_title", &self.the_title.len())
      .field("item_title", &self.item_title.len())
      .field("start_el", &self.start_el.len())
      .finish()
  }
}

impl Hooks {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Whether no callback is registered on any hook point.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.item_args.is_empty()
      && self.css_class.is_empty()
      && self.item_id.is_empty()
      && self.link_attributes.is_empty()
      && self.the_title.is_empty()
      && self.item_title.is_empty()
      && self.start_el.is_empty()
  }

  /// Rewrite the render arguments for a single item (`nav_menu_item_args`).
  pub fn add_item_args<F>(&mut self, hook: F) -> &mut Self
  where
    F: Fn(RenderArguments, &MenuItem, usize) -> RenderArguments
      + Send
      + Sync
      + 'static,
  {
    self.item_args.push(Box::new(hook));
    self
  }

  /// Rewrite an item's class list (`nav_menu_css_class`).
  pub fn add_css_class<F>(&mut self, hook: F) -> &mut Self
  where
    F: Fn(Vec<String>, &MenuItem, &RenderArguments, usize) -> Vec<String>
      + Send
      + Sync
      + 'static,
  {
    self.css_class.push(Box::new(hook));
    self
  }

  /// Rewrite an item's element id (`nav_menu_item_id`). Returning an empty
  /// string drops the `id` attribute.
  pub fn add_item_id<F>(&mut self, hook: F) -> &mut Self
  where
    F: Fn(String, &MenuItem, &RenderArguments, usize) -> String
      + Send
      + Sync
      + 'static,
  {
    self.item_id.push(Box::new(hook));
    self
  }

  /// Rewrite the link attributes (`nav_menu_link_attributes`).
  pub fn add_link_attributes<F>(&mut self, hook: F) -> &mut Self
  where
    F: Fn(Attributes, &MenuItem, &RenderArguments, usize) -> Attributes
      + Send
      + Sync
      + 'static,
  {
    self.link_attributes.push(Box::new(hook));
    self
  }

  /// Format a title given the id of the object it belongs to (`the_title`).
  pub fn add_the_title<F>(&mut self, hook: F) -> &mut Self
  where
    F: Fn(String, u64) -> String + Send + Sync + 'static,
  {
    self.the_title.push(Box::new(hook));
    self
  }

  /// Rewrite an item's display title (`nav_menu_item_title`).
  pub fn add_item_title<F>(&mut self, hook: F) -> &mut Self
  where
    F: Fn(String, &MenuItem, &RenderArguments, usize) -> String
      + Send
      + Sync
      + 'static,
  {
    self.item_title.push(Box::new(hook));
    self
  }

  /// Rewrite the finished markup of an item (`walker_nav_menu_start_el`).
  pub fn add_start_el<F>(&mut self, hook: F) -> &mut Self
  where
    F: Fn(String, &MenuItem, usize, &RenderArguments) -> String
      + Send
      + Sync
      + 'static,
  {
    self.start_el.push(Box::new(hook));
    self
  }

  #[must_use]
  pub fn apply_item_args(
    &self,
    args: RenderArguments,
    item: &MenuItem,
    depth: usize,
  ) -> RenderArguments {
    self
      .item_args
      .iter()
      .fold(args, |args, hook| hook(args, item, depth))
  }

  #[must_use]
  pub fn apply_css_class(
    &self,
    classes: Vec<String>,
    item: &MenuItem,
    args: &RenderArguments,
    depth: usize,
  ) -> Vec<String> {
    self
      .css_class
      .iter()
      .fold(classes, |classes, hook| hook(classes, item, args, depth))
  }

  #[must_use]
  pub fn apply_item_id(
    &self,
    id: String,
    item: &MenuItem,
    args: &RenderArguments,
    depth: usize,
  ) -> String {
    self
      .item_id
      .iter()
      .fold(id, |id, hook| hook(id, item, args, depth))
  }

  #[must_use]
  pub fn apply_link_attributes(
    &self,
    attributes: Attributes,
    item: &MenuItem,
    args: &RenderArguments,
    depth: usize,
  ) -> Attributes {
    self
      .link_attributes
      .iter()
      .fold(attributes, |attributes, hook| hook(attributes, item, args, depth))
  }

  #[must_use]
  pub fn apply_the_title(&self, title: String, object_id: u64) -> String {
    self
      .the_title
      .iter()
      .fold(title, |title, hook| hook(title, object_id))
  }

  #[must_use]
  pub fn apply_item_title(
    &self,
    title: String,
    item: &MenuItem,
    args: &RenderArguments,
    depth: usize,
  ) -> String {
    self
      .item_title
      .iter()
      .fold(title, |title, hook| hook(title, item, args, depth))
  }

  #[must_use]
  pub fn apply_start_el(
    &self,
    html: String,
    item: &MenuItem,
    depth: usize,
    args: &RenderArguments,
  ) -> String {
    self
      .start_el
      .iter()
      .fold(html, |html, hook| hook(html, item, depth, args))
  }
}

use std::num::NonZeroUsize;

use indexmap::IndexMap;

use crate::{args::RenderArguments, item::MenuItem, walker::Walker};

/// How many levels of a menu tree to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxDepth {
  /// Render every item at depth 0, ignoring parents.
  Flat,

  /// Render the whole tree.
  #[default]
  Unlimited,

  /// Render this many levels.
  Levels(NonZeroUsize),
}

impl MaxDepth {
  /// Interpret a numeric depth: `-1` is flat, `0` unlimited, `n` renders
  /// `n` levels. Anything below `-1` is not a depth.
  #[must_use]
  pub fn from_level(level: i32) -> Option<Self> {
    match level {
      -1 => Some(Self::Flat),
      0 => Some(Self::Unlimited),
      n => {
        usize::try_from(n)
          .ok()
          .and_then(NonZeroUsize::new)
          .map(Self::Levels)
      },
    }
  }

  /// Whether children of an item at `depth` are rendered.
  const fn descends_from(self, depth: usize) -> bool {
    match self {
      Self::Flat => false,
      Self::Unlimited => true,
      Self::Levels(levels) => levels.get() > depth + 1,
    }
  }
}

type Children<'a> = IndexMap<u64, Vec<&'a MenuItem>>;

/// Walk a flat list of items linked by their `parent` ids, invoking `walker`
/// depth-first with parents before children and siblings in list order.
///
/// Top-level items are those without a parent. When every item has a parent,
/// the parent of the first item is treated as the root. With
/// [`MaxDepth::Unlimited`], items whose parent is never reached are rendered
/// last, at depth 0 and without children.
pub fn walk<W>(
  walker: &W,
  items: &[MenuItem],
  max_depth: MaxDepth,
  args: &RenderArguments,
) -> String
where
  W: Walker + ?Sized,
{
  let mut output = String::new();
  let Some(first) = items.first() else {
    return output;
  };

  if max_depth == MaxDepth::Flat {
    for item in items {
      let mut none = Children::new();
      display_element(walker, item, &mut none, max_depth, 0, args, &mut output);
    }
    return output;
  }

  let root = if items.iter().any(|item| item.parent_id().is_none()) {
    None
  } else {
    first.parent_id()
  };

  let mut top_level = Vec::new();
  let mut children = Children::new();
  for item in items {
    match item.parent_id() {
      parent if parent == root => top_level.push(item),
      Some(parent) => children.entry(parent).or_default().push(item),
      None => top_level.push(item),
    }
  }

  for item in top_level {
    display_element(
      walker,
      item,
      &mut children,
      max_depth,
      0,
      args,
      &mut output,
    );
  }

  if max_depth == MaxDepth::Unlimited && !children.is_empty() {
    let mut no_children = Children::new();
    for (parent, orphans) in children {
      log::debug!(
        "Rendering {} menu item(s) whose parent {parent} was not found",
        orphans.len()
      );
      for orphan in orphans {
        display_element(
          walker,
          orphan,
          &mut no_children,
          max_depth,
          0,
          args,
          &mut output,
        );
      }
    }
  }

  output
}

fn display_element<'a, W>(
  walker: &W,
  item: &'a MenuItem,
  children: &mut Children<'a>,
  max_depth: MaxDepth,
  depth: usize,
  args: &RenderArguments,
  output: &mut String,
) where
  W: Walker + ?Sized,
{
  let rendered = walker.render_item(item, depth, args);
  if let Some(ref rendered) = rendered {
    output.push_str(&rendered.markup);
  }

  // Children are taken out of the map before descending, which also keeps
  // parent cycles from recursing forever
  if max_depth.descends_from(depth)
    && let Some(id) = item.node_id.filter(|id| *id != 0)
    && let Some(kids) = children.shift_remove(&id)
  {
    output.push_str(&walker.open_level(depth, args));
    for child in kids {
      display_element(
        walker,
        child,
        children,
        max_depth,
        depth + 1,
        args,
        output,
      );
    }
    output.push_str(&walker.close_level(depth, args));
  }

  if let Some(rendered) = rendered {
    output.push_str(&walker.close_item(&rendered, depth, args));
  }
}

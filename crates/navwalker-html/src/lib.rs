//! Render WordPress-style navigation menus as Bulma navbar markup.
//!
//! Bulma's navbar only knows two levels: top-level `navbar-item`s and a single
//! flat `navbar-dropdown` below each of them. [`MenuRenderer`] maps a menu tree
//! onto that model, turning anything deeper into a `navbar-divider`, while
//! [`walk`] drives any [`Walker`] over a flat list of items that reference
//! their parents.
//!
//! ```rust, ignore
//! let renderer = MenuRenderer::new(RenderConfig::default());
//! let args = RenderArguments::default();
//! let html = walk(&renderer, &menu.items, MaxDepth::Unlimited, &args);
//! ```
pub mod args;
pub mod context;
pub mod error;
pub mod escape;
pub mod hooks;
pub mod item;
pub mod menu;
pub mod tree;
pub mod walker;

pub use args::RenderArguments;
pub use context::PageContext;
pub use error::MenuError;
pub use hooks::{Attributes, Hooks};
pub use item::MenuItem;
pub use menu::{Menu, render_nav_menu};
pub use navwalker_config::{ItemSpacing, RenderConfig};
pub use tree::{MaxDepth, walk};
pub use walker::{MenuRenderer, RenderedItem, Walker};

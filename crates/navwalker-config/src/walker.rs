use serde::{Deserialize, Serialize};

/// Presentation flags for the Bulma navbar dropdowns.
///
/// See <https://bulma.io/documentation/components/navbar/> for what each
/// modifier does to the rendered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
  /// Align dropdowns to the right (`is-right`).
  pub dropdown_right: bool,

  /// Open dropdowns upwards (`has-dropdown-up`).
  pub dropdown_up: bool,

  /// Open dropdowns on hover (`is-hoverable`).
  ///
  /// Enabled by default, since a bare navbar has no script to toggle the
  /// dropdown state on click.
  pub hoverable: bool,

  /// Use the boxed dropdown style (`is-boxed`).
  pub boxed: bool,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      dropdown_right: false,
      dropdown_up:    false,
      hoverable:      true,
      boxed:          false,
    }
  }
}

impl RenderConfig {
  /// Create a configuration from the four flags, in the order
  /// right, up, hoverable, boxed.
  #[must_use]
  pub const fn new(
    dropdown_right: bool,
    dropdown_up: bool,
    hoverable: bool,
    boxed: bool,
  ) -> Self {
    Self {
      dropdown_right,
      dropdown_up,
      hoverable,
      boxed,
    }
  }
}

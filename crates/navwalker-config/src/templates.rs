use crate::error::ConfigError;

/// Default configuration template in TOML, commented so that a fresh file
/// explains every knob.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# navwalker configuration file

# Dropdown presentation, see https://bulma.io/documentation/components/navbar/
[walker]
# Align dropdowns to the right of their header
dropdown_right = false

# Open dropdowns upwards, for navbars fixed to the bottom of the page
dropdown_up = false

# Open dropdowns on hover instead of requiring a script to toggle them
hoverable = true

# Use the boxed dropdown style
boxed = false

# Markup injected around each item
[arguments]
before = ""
after = ""
link_before = ""
link_after = ""

# "default" indents items with tabs and ends them with newlines,
# "discard" emits everything on one line
item_spacing = "default"

# Markup around the whole menu
[menu]
# Element wrapped around the menu, empty to disable
container = "div"
container_class = "navbar-menu"
# container_id = "main-navbar"

# Element holding the items. %1$s is the menu id, %2$s the menu class and
# %3$s the items
menu_class = "navbar-start"
# menu_id = "menu-primary"
items_wrap = '<div id="%1$s" class="%2$s">%3$s</div>'

# -1 renders every item flat, 0 renders all levels, n renders n levels
depth = 0

# The page the menu is rendered on, used to mark the active item
[page]
# current_id = 42
# posts_page_id = 7
home_id = 1

# Uncomment when rendering a post type archive
# [page.archive]
# post_types = ["book"]
"#;

/// Default configuration template in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "walker": {
    "dropdown_right": false,
    "dropdown_up": false,
    "hoverable": true,
    "boxed": false
  },
  "arguments": {
    "before": "",
    "after": "",
    "link_before": "",
    "link_after": "",
    "item_spacing": "default"
  },
  "menu": {
    "container": "div",
    "container_class": "navbar-menu",
    "menu_class": "navbar-start",
    "items_wrap": "<div id=\"%1$s\" class=\"%2$s\">%3$s</div>",
    "depth": 0
  },
  "page": {
    "home_id": 1
  }
}
"#;

/// Get the default configuration template for a format.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for anything but `toml` and
/// `json`.
pub fn get_template(format: &str) -> Result<&'static str, ConfigError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(ConfigError::UnsupportedFormat(format.to_string())),
  }
}

use std::{
  fs,
  path::{Path, PathBuf},
  str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
  arguments::{ArgumentsConfig, ItemSpacing},
  error::ConfigError,
  menu::MenuConfig,
  page::{ArchiveConfig, PageConfig},
  templates,
  walker::RenderConfig,
};

/// File names probed in the working directory when no config file is given.
const CONFIG_FILE_NAMES: &[&str] =
  &["navwalker.toml", "navwalker.json", ".navwalker.toml"];

/// Configuration for rendering navbar menus.
///
/// [`Config`] groups the walker flags, the per-item markup fragments, the
/// menu wrapper options and the page context. Fields are typically loaded
/// from a TOML or JSON config file, but can also be set via CLI arguments
/// and `section.key=value` overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Dropdown presentation flags.
  pub walker: RenderConfig,

  /// Markup fragments and spacing used for every item.
  pub arguments: ArgumentsConfig,

  /// Markup wrapped around the rendered items.
  pub menu: MenuConfig,

  /// The page the menu is rendered on.
  pub page: PageConfig,
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    log::debug!("Reading config file: {}", path.display());
    let content = fs::read_to_string(path).inspect_err(|e| {
      log::error!("Failed to read config file {}: {e}", path.display());
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };

    let config = match ext.to_lowercase().as_str() {
      "json" => serde_json::from_str(&content).map_err(ConfigError::from),
      "toml" => toml::from_str(&content).map_err(ConfigError::from),
      _ => {
        return Err(ConfigError::UnsupportedFormat(
          path.display().to_string(),
        ));
      },
    };
    config.inspect_err(|e| {
      log::error!("Failed to parse config file {}: {e}", path.display());
    })
  }

  /// Load configuration from files and overrides.
  ///
  /// Explicit config files are merged in order, later ones overriding earlier
  /// ones. Without explicit files, a config file in the working directory is
  /// used if one exists. Overrides are applied last, then the result is
  /// validated.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is invalid, or
  /// the merged configuration fails validation.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged = Self::from_file(first)?;
      for config_path in rest {
        merged.merge(Self::from_file(config_path)?);
      }

      if !rest.is_empty() {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged
    } else if let Some(discovered) = Self::find_config_file() {
      log::info!("Using discovered config file: {}", discovered.display());
      Self::from_file(&discovered)?
    } else {
      log::debug!("No config file found, using defaults");
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Look for a config file in the working directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    CONFIG_FILE_NAMES
      .iter()
      .map(PathBuf::from)
      .find(|candidate| candidate.is_file())
  }

  /// Check the configuration for values the renderer cannot use.
  ///
  /// # Errors
  ///
  /// Returns an error describing the first invalid value.
  pub fn validate(&self) -> Result<(), ConfigError> {
    self.menu.validate().map_err(|e| {
      ConfigError::Config(format!("Menu configuration validation failed: {e}"))
    })
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - [`Vec<T>`] fields: Other's vec is appended to this config's vec
  /// - Plain fields (String, bool, etc.): Other's value always replaces
  pub fn merge(&mut self, other: Self) {
    self.walker = other.walker;
    self.arguments = other.arguments;

    let menu = other.menu;
    self.menu.container = menu.container;
    self.menu.container_class = menu.container_class;
    self.menu.menu_class = menu.menu_class;
    self.menu.items_wrap = menu.items_wrap;
    self.menu.depth = menu.depth;
    if menu.container_id.is_some() {
      self.menu.container_id = menu.container_id;
    }
    if menu.menu_id.is_some() {
      self.menu.menu_id = menu.menu_id;
    }

    let page = other.page;
    self.page.home_id = page.home_id;
    if page.current_id.is_some() {
      self.page.current_id = page.current_id;
    }
    if page.posts_page_id.is_some() {
      self.page.posts_page_id = page.posts_page_id;
    }
    if let Some(other_archive) = page.archive {
      match self.page.archive {
        Some(ref mut archive) => {
          archive.post_types.extend(other_archive.post_types);
        },
        None => self.page.archive = Some(other_archive),
      }
    }
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// Keys are dotted paths such as `walker.boxed` or `page.current_id`.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust, ignore
  /// config.apply_overrides(&vec![
  ///     "walker.boxed=true".to_string(),
  ///     "arguments.item_spacing=discard".to_string(),
  /// ])?;
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override to the field named by `key`.
  ///
  /// An empty value clears optional fields.
  ///
  /// # Errors
  ///
  /// Returns an error for unknown keys or unparsable values.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "walker.dropdown_right" => {
        self.walker.dropdown_right = parse_value(key, value)?;
      },
      "walker.dropdown_up" => self.walker.dropdown_up = parse_value(key, value)?,
      "walker.hoverable" => self.walker.hoverable = parse_value(key, value)?,
      "walker.boxed" => self.walker.boxed = parse_value(key, value)?,

      "arguments.before" => self.arguments.before = value.to_string(),
      "arguments.after" => self.arguments.after = value.to_string(),
      "arguments.link_before" => self.arguments.link_before = value.to_string(),
      "arguments.link_after" => self.arguments.link_after = value.to_string(),
      "arguments.item_spacing" => {
        self.arguments.item_spacing =
          parse_value::<ItemSpacing>(key, value)?;
      },

      "menu.container" => self.menu.container = value.to_string(),
      "menu.container_class" => self.menu.container_class = value.to_string(),
      "menu.container_id" => self.menu.container_id = optional_string(value),
      "menu.menu_class" => self.menu.menu_class = value.to_string(),
      "menu.menu_id" => self.menu.menu_id = optional_string(value),
      "menu.items_wrap" => self.menu.items_wrap = value.to_string(),
      "menu.depth" => self.menu.depth = parse_value(key, value)?,

      "page.current_id" => {
        self.page.current_id = parse_optional(key, value)?;
      },
      "page.posts_page_id" => {
        self.page.posts_page_id = parse_optional(key, value)?;
      },
      "page.home_id" => self.page.home_id = parse_value(key, value)?,
      "page.archive" => {
        self.page.archive = if parse_value(key, value)? {
          self.page.archive.take().or_else(|| Some(ArchiveConfig::default()))
        } else {
          None
        };
      },
      "page.archive.post_types" => {
        let post_types = value
          .split(',')
          .map(str::trim)
          .filter(|s| !s.is_empty())
          .map(String::from)
          .collect();
        self.page.archive = Some(ArchiveConfig { post_types });
      },

      _ => return Err(ConfigError::UnknownKey(key.to_string())),
    }

    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = templates::get_template(format)?;

    fs::write(path, config_content)?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  value.parse::<T>().map_err(|e| {
    ConfigError::InvalidValue {
      key:     key.to_string(),
      message: format!("'{value}': {e}"),
    }
  })
}

fn parse_optional<T>(key: &str, value: &str) -> Result<Option<T>, ConfigError>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  if value.is_empty() {
    Ok(None)
  } else {
    parse_value(key, value).map(Some)
  }
}

fn optional_string(value: &str) -> Option<String> {
  if value.is_empty() {
    None
  } else {
    Some(value.to_string())
  }
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::field_reassign_with_default,
    reason = "Fine in tests"
  )]

  use super::*;

  #[test]
  fn test_config_merge_option_fields() {
    let mut base = Config::default();
    base.page.current_id = Some(4);
    base.menu.menu_id = Some("menu-base".to_string());

    let mut override_config = Config::default();
    override_config.page.current_id = None; // should not replace
    override_config.page.posts_page_id = Some(9);

    base.merge(override_config);

    assert_eq!(base.page.current_id, Some(4));
    assert_eq!(base.page.posts_page_id, Some(9));
    assert_eq!(base.menu.menu_id.as_deref(), Some("menu-base"));
  }

  #[test]
  fn test_config_merge_vec_fields_append() {
    let mut base = Config::default();
    base.page.archive = Some(ArchiveConfig {
      post_types: vec!["book".to_string()],
    });

    let mut override_config = Config::default();
    override_config.page.archive = Some(ArchiveConfig {
      post_types: vec!["movie".to_string()],
    });

    base.merge(override_config);

    let archive = base.page.archive.expect("archive should survive merge");
    assert_eq!(archive.post_types, vec!["book", "movie"]);
  }

  #[test]
  fn test_config_merge_boolean_fields() {
    let mut base = Config::default();
    base.walker.boxed = true;

    let mut override_config = Config::default();
    override_config.walker.hoverable = false;

    base.merge(override_config);

    // Plain fields take the other config's value wholesale
    assert!(!base.walker.boxed);
    assert!(!base.walker.hoverable);
  }

  #[test]
  fn test_apply_overrides_boolean() {
    let mut config = Config::default();
    config
      .apply_overrides(&[
        "walker.dropdown_right=true".to_string(),
        "walker.hoverable = false".to_string(),
      ])
      .unwrap();

    assert!(config.walker.dropdown_right);
    assert!(!config.walker.hoverable);
  }

  #[test]
  fn test_apply_overrides_string_and_enum() {
    let mut config = Config::default();
    config
      .apply_overrides(&[
        "arguments.link_before=<span>".to_string(),
        "arguments.item_spacing=discard".to_string(),
      ])
      .unwrap();

    assert_eq!(config.arguments.link_before, "<span>");
    assert_eq!(config.arguments.item_spacing, ItemSpacing::Discard);
  }

  #[test]
  fn test_apply_overrides_items_wrap_keeps_equals_signs() {
    let mut config = Config::default();
    config
      .apply_overrides(&[
        "menu.items_wrap=<nav id=\"%1$s\" class=\"%2$s\">%3$s</nav>"
          .to_string(),
      ])
      .unwrap();

    assert_eq!(
      config.menu.items_wrap,
      "<nav id=\"%1$s\" class=\"%2$s\">%3$s</nav>"
    );
  }

  #[test]
  fn test_apply_overrides_numeric() {
    let mut config = Config::default();
    config
      .apply_overrides(&[
        "menu.depth=-1".to_string(),
        "page.current_id=12".to_string(),
      ])
      .unwrap();

    assert_eq!(config.menu.depth, -1);
    assert_eq!(config.page.current_id, Some(12));
  }

  #[test]
  fn test_apply_overrides_empty_clears_option() {
    let mut config = Config::default();
    config.page.posts_page_id = Some(3);
    config.menu.container_id = Some("nav".to_string());

    config
      .apply_overrides(&[
        "page.posts_page_id=".to_string(),
        "menu.container_id=".to_string(),
      ])
      .unwrap();

    assert_eq!(config.page.posts_page_id, None);
    assert_eq!(config.menu.container_id, None);
  }

  #[test]
  fn test_apply_overrides_archive_post_types() {
    let mut config = Config::default();
    config
      .apply_overrides(&["page.archive.post_types=book, movie".to_string()])
      .unwrap();

    let archive = config.page.archive.expect("archive should be set");
    assert_eq!(archive.post_types, vec!["book", "movie"]);
  }

  #[test]
  fn test_apply_overrides_invalid_format() {
    let mut config = Config::default();
    let result = config.apply_overrides(&["walker.boxed".to_string()]);
    assert!(matches!(result, Err(ConfigError::Config(_))));
  }

  #[test]
  fn test_apply_overrides_unknown_key() {
    let mut config = Config::default();
    let result = config.apply_overrides(&["walker.sticky=true".to_string()]);
    assert!(matches!(result, Err(ConfigError::UnknownKey(key)) if key == "walker.sticky"));
  }

  #[test]
  fn test_apply_overrides_invalid_boolean() {
    let mut config = Config::default();
    let result = config.apply_overrides(&["walker.boxed=maybe".to_string()]);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
  }

  #[test]
  fn test_apply_overrides_invalid_numeric() {
    let mut config = Config::default();
    let result = config.apply_overrides(&["page.home_id=-3".to_string()]);
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
  }

  #[test]
  fn test_from_file_toml_and_json() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let toml_path = dir.path().join("navwalker.toml");
    fs::write(&toml_path, "[walker]\nboxed = true\n[page]\ncurrent_id = 5\n")
      .expect("Failed to write TOML config");
    let config = Config::from_file(&toml_path).expect("TOML should load");
    assert!(config.walker.boxed);
    assert!(config.walker.hoverable);
    assert_eq!(config.page.current_id, Some(5));

    let json_path = dir.path().join("navwalker.json");
    fs::write(&json_path, r#"{"arguments": {"item_spacing": "discard"}}"#)
      .expect("Failed to write JSON config");
    let config = Config::from_file(&json_path).expect("JSON should load");
    assert_eq!(config.arguments.item_spacing, ItemSpacing::Discard);
  }

  #[test]
  fn test_from_file_rejects_unknown_extension() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("navwalker.yaml");
    fs::write(&path, "walker: {}").expect("Failed to write config");

    assert!(matches!(
      Config::from_file(&path),
      Err(ConfigError::UnsupportedFormat(_))
    ));
  }

  #[test]
  fn test_load_merges_files_then_overrides() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("base.toml");
    let second = dir.path().join("site.toml");
    fs::write(&first, "[page]\ncurrent_id = 1\nposts_page_id = 2\n")
      .expect("Failed to write base config");
    fs::write(&second, "[page]\ncurrent_id = 8\n[walker]\nboxed = true\n")
      .expect("Failed to write site config");

    let config = Config::load(&[first, second], &[
      "walker.dropdown_up=true".to_string(),
    ])
    .expect("Config should load");

    assert_eq!(config.page.current_id, Some(8));
    assert_eq!(config.page.posts_page_id, Some(2));
    assert!(config.walker.boxed);
    assert!(config.walker.dropdown_up);
  }

  #[test]
  fn test_load_validates_result() {
    let result = Config::load(&[], &["menu.depth=-5".to_string()]);
    assert!(matches!(result, Err(ConfigError::Config(_))));
  }

  #[test]
  fn test_generate_default_config_round_trips() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("navwalker.toml");

    Config::generate_default_config("toml", &path)
      .expect("Failed to write default config");
    let config = Config::from_file(&path).expect("Generated config must load");
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_from_file_reports_parse_errors_by_format() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let json_path = dir.path().join("navwalker.json");
    fs::write(&json_path, r#"{"walker": {"boxed": "#)
      .expect("Failed to write JSON config");
    assert!(matches!(
      Config::from_file(&json_path),
      Err(ConfigError::Serde(_))
    ));

    let toml_path = dir.path().join("navwalker.toml");
    fs::write(&toml_path, "[walker
boxed = true
")
      .expect("Failed to write TOML config");
    assert!(matches!(
      Config::from_file(&toml_path),
      Err(ConfigError::Toml(_))
    ));
  }

  #[test]
  fn test_from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = Config::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
  }

  #[test]
  fn test_generate_default_config_unwritable_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("navwalker.toml");

    let result = Config::generate_default_config("toml", &path);
    assert!(matches!(result, Err(ConfigError::Io(_))));
    assert!(!path.exists());
  }
}

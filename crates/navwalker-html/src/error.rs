use std::io;

use thiserror::Error;

/// Error type for loading menus.
///
/// Rendering itself never fails, only reading menu definitions does.
#[derive(Debug, Error)]
pub enum MenuError {
  #[error("Unsupported menu file format: {0}")]
  UnsupportedFormat(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),
}

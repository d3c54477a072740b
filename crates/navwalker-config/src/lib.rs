pub mod arguments;
pub mod config;
pub mod error;
pub mod menu;
pub mod page;
pub mod templates;
pub mod walker;

pub use arguments::{ArgumentsConfig, ItemSpacing};
pub use config::Config;
pub use error::ConfigError;
pub use menu::MenuConfig;
pub use page::{ArchiveConfig, PageConfig};
pub use walker::RenderConfig;

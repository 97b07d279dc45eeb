//! Tool catalog configuration.
//!
//! This module loads the rentable tools and their tool type pricing rules
//! from YAML files, or from the reference catalog compiled into the crate.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/catalog").unwrap();
//! println!("Loaded {} tools", loader.catalog().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ToolCatalog, ToolConfig, ToolTypeConfig, ToolTypesConfig, ToolsConfig};

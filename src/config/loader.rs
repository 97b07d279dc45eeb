//! Catalog loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tool
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RentalError, RentalResult};
use crate::models::ToolPolicy;

use super::types::{ToolCatalog, ToolTypesConfig, ToolsConfig};

const TOOL_TYPES_FILE: &str = "tool_types.yaml";
const TOOLS_FILE: &str = "tools.yaml";

const BUILTIN_TOOL_TYPES: &str = include_str!("../../config/catalog/tool_types.yaml");
const BUILTIN_TOOLS: &str = include_str!("../../config/catalog/tools.yaml");

/// Loads and provides access to the tool catalog.
///
/// # Directory Structure
///
/// The catalog directory should have the following structure:
/// ```text
/// config/catalog/
/// ├── tool_types.yaml  # Daily charge and charge flags per tool type
/// └── tools.yaml       # Tool code to tool type and brand
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/catalog").unwrap();
/// let tool = loader.catalog().get_tool("JAKR").unwrap();
/// println!("{} {} at ${}/day", tool.brand, tool.tool_type, tool.daily_charge);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: ToolCatalog,
}

impl ConfigLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either catalog file is missing
    /// - Either file contains invalid YAML or is missing required fields
    /// - A tool references an unknown tool type
    /// - A tool type is not billed on weekdays or has a negative daily charge
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let path = path.as_ref();

        let tool_types_path = path.join(TOOL_TYPES_FILE);
        let tool_types_source = tool_types_path.display().to_string();
        let tool_types = parse_yaml::<ToolTypesConfig>(
            &read_file(&tool_types_path)?,
            &tool_types_source,
        )?;

        let tools_path = path.join(TOOLS_FILE);
        let tools_source = tools_path.display().to_string();
        let tools = parse_yaml::<ToolsConfig>(&read_file(&tools_path)?, &tools_source)?;

        let catalog = resolve_catalog(tool_types, &tool_types_source, tools, &tools_source)?;
        debug!(path = %path.display(), tools = catalog.len(), "Loaded tool catalog");

        Ok(Self { catalog })
    }

    /// Loads the reference catalog compiled into the crate.
    pub fn builtin() -> RentalResult<Self> {
        let tool_types_source = format!("<builtin>/{TOOL_TYPES_FILE}");
        let tools_source = format!("<builtin>/{TOOLS_FILE}");

        let tool_types = parse_yaml::<ToolTypesConfig>(BUILTIN_TOOL_TYPES, &tool_types_source)?;
        let tools = parse_yaml::<ToolsConfig>(BUILTIN_TOOLS, &tools_source)?;

        let catalog = resolve_catalog(tool_types, &tool_types_source, tools, &tools_source)?;
        Ok(Self { catalog })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> ToolCatalog {
        self.catalog
    }
}

fn read_file(path: &Path) -> RentalResult<String> {
    fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
        path: path.display().to_string(),
    })
}

fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, source: &str) -> RentalResult<T> {
    serde_yaml::from_str(content).map_err(|e| RentalError::ConfigParseError {
        path: source.to_string(),
        message: e.to_string(),
    })
}

/// Joins every tool with its type's pricing rules.
fn resolve_catalog(
    tool_types: ToolTypesConfig,
    tool_types_source: &str,
    tools: ToolsConfig,
    tools_source: &str,
) -> RentalResult<ToolCatalog> {
    for (name, tool_type) in &tool_types.tool_types {
        if !tool_type.weekday_charge {
            return Err(RentalError::ConfigParseError {
                path: tool_types_source.to_string(),
                message: format!("tool type '{}' must be charged on weekdays", name),
            });
        }
        if tool_type.daily_charge.is_sign_negative() {
            return Err(RentalError::ConfigParseError {
                path: tool_types_source.to_string(),
                message: format!(
                    "tool type '{}' has a negative daily charge: {}",
                    name, tool_type.daily_charge
                ),
            });
        }
    }

    let resolved = tools
        .tools
        .into_iter()
        .map(|(code, tool)| {
            let tool_type = tool_types.tool_types.get(&tool.tool_type).ok_or_else(|| {
                RentalError::ConfigParseError {
                    path: tools_source.to_string(),
                    message: format!(
                        "tool '{}' references unknown tool type '{}'",
                        code, tool.tool_type
                    ),
                }
            })?;

            Ok(ToolPolicy {
                code,
                tool_type: tool.tool_type,
                brand: tool.brand,
                daily_charge: tool_type.daily_charge,
                weekday_charge: tool_type.weekday_charge,
                weekend_charge: tool_type.weekend_charge,
                holiday_charge: tool_type.holiday_charge,
            })
        })
        .collect::<RentalResult<Vec<_>>>()?;

    Ok(ToolCatalog::new(resolved))
}

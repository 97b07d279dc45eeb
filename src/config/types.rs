//! Catalog configuration types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! catalog YAML files, and the resolved [`ToolCatalog`] built from them.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{RentalError, RentalResult};
use crate::models::ToolPolicy;

/// Pricing rules shared by every tool of one type.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypeConfig {
    /// The charge for each chargeable day.
    pub daily_charge: Decimal,
    /// Whether weekdays are billed. Must be true.
    pub weekday_charge: bool,
    /// Whether weekends are billed.
    pub weekend_charge: bool,
    /// Whether holidays are billed.
    pub holiday_charge: bool,
}

/// Tool types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypesConfig {
    /// Map of tool type name to its pricing rules.
    pub tool_types: BTreeMap<String, ToolTypeConfig>,
}

/// A single rentable tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// The tool type name; must exist in the tool types file.
    pub tool_type: String,
    /// The brand name.
    pub brand: String,
}

/// Tools configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// Map of tool code to tool details.
    pub tools: BTreeMap<String, ToolConfig>,
}

/// The resolved, read-only tool catalog.
///
/// # Example
///
/// ```
/// use tool_rental::config::ConfigLoader;
///
/// let catalog = ConfigLoader::builtin().unwrap().into_catalog();
/// let ladder = catalog.get_tool("LADW").unwrap();
/// assert_eq!(ladder.tool_type, "Ladder");
/// assert!(catalog.get_tool("DRIL").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolPolicy>,
}

impl ToolCatalog {
    /// Creates a catalog from already resolved tools.
    pub fn new(tools: impl IntoIterator<Item = ToolPolicy>) -> Self {
        Self {
            tools: tools
                .into_iter()
                .map(|tool| (tool.code.clone(), tool))
                .collect(),
        }
    }

    /// Looks up a tool by its code.
    ///
    /// Returns `UnknownTool` if the code is not in the catalog.
    pub fn get_tool(&self, code: &str) -> RentalResult<&ToolPolicy> {
        self.tools.get(code).ok_or_else(|| RentalError::UnknownTool {
            code: code.to_string(),
        })
    }

    /// Iterates the tools ordered by code.
    pub fn tools(&self) -> impl Iterator<Item = &ToolPolicy> {
        self.tools.values()
    }

    /// Returns the number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_tool(code: &str) -> ToolPolicy {
        ToolPolicy {
            code: code.to_string(),
            tool_type: "Chainsaw".to_string(),
            brand: "Stihl".to_string(),
            daily_charge: Decimal::new(149, 2),
            weekday_charge: true,
            weekend_charge: false,
            holiday_charge: true,
        }
    }

    #[test]
    fn test_get_tool_by_code() {
        let catalog = ToolCatalog::new([create_tool("CHNS")]);
        assert_eq!(catalog.get_tool("CHNS").unwrap().brand, "Stihl");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_get_tool_is_case_sensitive() {
        let catalog = ToolCatalog::new([create_tool("CHNS")]);
        match catalog.get_tool("chns") {
            Err(RentalError::UnknownTool { code }) => assert_eq!(code, "chns"),
            other => panic!("Expected UnknownTool, got {:?}", other),
        }
    }

    #[test]
    fn test_tools_are_ordered_by_code() {
        let catalog = ToolCatalog::new([create_tool("JAKR"), create_tool("CHNS")]);
        let codes: Vec<&str> = catalog.tools().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["CHNS", "JAKR"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ToolCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get_tool("LADW").is_err());
    }

    #[test]
    fn test_deserialize_tool_type_with_string_charge() {
        let yaml = r#"
tool_types:
  Ladder:
    daily_charge: "1.99"
    weekday_charge: true
    weekend_charge: true
    holiday_charge: false
"#;
        let config: ToolTypesConfig = serde_yaml::from_str(yaml).unwrap();
        let ladder = &config.tool_types["Ladder"];
        assert_eq!(ladder.daily_charge, Decimal::new(199, 2));
        assert!(ladder.weekend_charge);
        assert!(!ladder.holiday_charge);
    }
}

//! Check suites and checker configuration
//!
//! The built-in suite is embedded in the binary. A configuration file can
//! switch check categories off and add or replace contracts; contracts are
//! matched by name, so a file entry named `int` replaces the built-in one.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::arith::ArithmeticEdgeCase;
use crate::builtin;
use crate::contract::TypeContract;
use crate::engine::checks::CheckCategory;
use crate::error::{CheckError, Result};
use crate::literal::LiteralCase;

/// Everything a conformance run looks at
#[derive(Debug, Clone, Default)]
pub struct CheckSuite {
    pub contracts: Vec<TypeContract>,
    pub edge_cases: Vec<ArithmeticEdgeCase>,
    pub literals: Vec<LiteralCase>,
}

impl CheckSuite {
    /// The embedded tables
    pub fn builtin() -> Self {
        Self {
            contracts: builtin::contracts(),
            edge_cases: builtin::edge_cases(),
            literals: builtin::literals(),
        }
    }

    /// Add contracts, replacing existing ones with the same name
    pub fn merge_contracts(&mut self, contracts: impl IntoIterator<Item = TypeContract>) {
        for contract in contracts {
            match self.contracts.iter_mut().find(|c| c.name == contract.name) {
                Some(existing) => {
                    debug!(contract = %contract.name, "Replacing contract");
                    *existing = contract;
                }
                None => self.contracts.push(contract),
            }
        }
    }
}

/// Which check categories run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSelection {
    pub contracts: bool,
    pub identity: bool,
    pub arithmetic: bool,
    pub literals: bool,
}

impl Default for CheckSelection {
    fn default() -> Self {
        Self {
            contracts: true,
            identity: true,
            arithmetic: true,
            literals: true,
        }
    }
}

impl CheckSelection {
    pub fn is_enabled(&self, category: CheckCategory) -> bool {
        match category {
            CheckCategory::Contract => self.contracts,
            CheckCategory::Representation => self.identity,
            CheckCategory::Arithmetic => self.arithmetic,
            CheckCategory::Literal => self.literals,
        }
    }

    /// Selection with only the given categories enabled
    pub fn only(categories: &[CheckCategory]) -> Self {
        Self {
            contracts: categories.contains(&CheckCategory::Contract),
            identity: categories.contains(&CheckCategory::Representation),
            arithmetic: categories.contains(&CheckCategory::Arithmetic),
            literals: categories.contains(&CheckCategory::Literal),
        }
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            other => Err(CheckError::parse_error(format!(
                "Unsupported config format '{}' for '{}' (expected .toml, .yaml, .yml or .json)",
                other,
                path.display()
            ))),
        }
    }
}

/// Checker configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Enabled check categories
    #[serde(default)]
    pub checks: CheckSelection,
    /// Contracts added to (or replacing entries of) the built-in table
    #[serde(default)]
    pub contracts: Vec<TypeContract>,
}

impl CheckerConfig {
    /// Parse configuration text in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }

    /// Load configuration from a file, detecting the format by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::FileError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::parse(&content, format)?;
        info!(
            path = %path.display(),
            contracts = config.contracts.len(),
            "Loaded checker configuration"
        );
        Ok(config)
    }

    /// The built-in suite with this configuration's contracts merged in
    pub fn suite(&self) -> CheckSuite {
        let mut suite = CheckSuite::builtin();
        suite.merge_contracts(self.contracts.iter().cloned());
        suite
    }
}

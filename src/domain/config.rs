//! Deployment configuration.
//!
//! An explicit value threaded through the pipeline; there is no process-wide
//! mutable state. Defaults match the stock stablecoin repository layout and
//! can be overridden via an optional `suideploy.toml` next to the packages.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::error::AppError;

/// Default gas budget for publish and call transactions.
pub const DEFAULT_GAS_BUDGET: u64 = 300_000_000;

/// Name of the optional config file.
pub const CONFIG_FILE: &str = "suideploy.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Gas budget passed to every publish/call transaction.
    pub gas_budget: u64,
    /// Directory containing the Move packages, relative to the working dir.
    pub packages_dir: String,
    /// Directory for raw CLI outputs and `contract_ids.env`.
    pub output_dir: String,
    /// Module name of the coin within the usdc package.
    pub coin_module: String,
    /// Type name of the coin within its module.
    pub coin_type: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            gas_budget: DEFAULT_GAS_BUDGET,
            packages_dir: "packages".to_string(),
            output_dir: "json".to_string(),
            coin_module: "usdc".to_string(),
            coin_type: "USDC".to_string(),
        }
    }
}

impl DeployConfig {
    /// Load `suideploy.toml` from `dir`, falling back to defaults when the
    /// file does not exist. A present-but-malformed file is an error.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = DeployConfig::load(dir.path()).expect("load");
        assert_eq!(config.gas_budget, DEFAULT_GAS_BUDGET);
        assert_eq!(config.packages_dir, "packages");
        assert_eq!(config.output_dir, "json");
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "gas_budget = 42\n").expect("write");
        let config = DeployConfig::load(dir.path()).expect("load");
        assert_eq!(config.gas_budget, 42);
        assert_eq!(config.coin_module, "usdc");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "gas_budget = \"lots\"\n").expect("write");
        assert!(matches!(
            DeployConfig::load(dir.path()),
            Err(AppError::TomlParse(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "gas_budgets = 1\n").expect("write");
        assert!(DeployConfig::load(dir.path()).is_err());
    }
}

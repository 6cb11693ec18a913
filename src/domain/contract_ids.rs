//! The set of identifiers collected over a deployment run, and its
//! `KEY=value` file representation (`contract_ids.env`).

use serde::Serialize;

/// Env-file key for the sui_extensions package address.
pub const KEY_EXTENSIONS: &str = "SUI_EXTENSIONS_PACKAGE";
/// Env-file key for the stablecoin package address.
pub const KEY_STABLECOIN: &str = "STABLECOIN_PACKAGE";
/// Env-file key for the usdc package address.
pub const KEY_USDC: &str = "USDC_PACKAGE";
/// Env-file key for the Treasury object id.
pub const KEY_TREASURY: &str = "TREASURY";
/// Env-file key for the Faucet object id.
pub const KEY_FAUCET: &str = "FAUCET_ID";

/// Identifiers resolved by the deployment pipeline. A `None` slot renders as
/// an empty value and parses back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContractIds {
    pub extensions_package: Option<String>,
    pub stablecoin_package: Option<String>,
    pub usdc_package: Option<String>,
    pub treasury_id: Option<String>,
    pub faucet_id: Option<String>,
}

impl ContractIds {
    /// Render as deterministic `KEY=value` lines, one per slot.
    pub fn to_env(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.entries() {
            out.push_str(key);
            out.push('=');
            out.push_str(value.as_deref().unwrap_or(""));
            out.push('\n');
        }
        out
    }

    /// Parse `KEY=value` lines produced by [`to_env`](Self::to_env).
    ///
    /// Unknown keys and lines without a `=` are skipped; an empty value maps
    /// back to `None`.
    pub fn from_env(contents: &str) -> Self {
        let mut ids = Self::default();
        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = (!value.is_empty()).then(|| value.to_string());
            match key {
                KEY_EXTENSIONS => ids.extensions_package = value,
                KEY_STABLECOIN => ids.stablecoin_package = value,
                KEY_USDC => ids.usdc_package = value,
                KEY_TREASURY => ids.treasury_id = value,
                KEY_FAUCET => ids.faucet_id = value,
                _ => {}
            }
        }
        ids
    }

    /// Fully-qualified coin type, e.g. `0xC0..::usdc::USDC`, once the usdc
    /// package is known.
    pub fn coin_type(&self, coin_module: &str, coin_type: &str) -> Option<String> {
        self.usdc_package
            .as_ref()
            .map(|pkg| format!("{pkg}::{coin_module}::{coin_type}"))
    }

    /// Number of resolved slots (for the deployment summary).
    pub fn resolved_count(&self) -> usize {
        self.entries().iter().filter(|(_, v)| v.is_some()).count()
    }

    /// Total number of slots.
    pub fn slot_count(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> [(&'static str, &Option<String>); 5] {
        [
            (KEY_EXTENSIONS, &self.extensions_package),
            (KEY_STABLECOIN, &self.stablecoin_package),
            (KEY_USDC, &self.usdc_package),
            (KEY_TREASURY, &self.treasury_id),
            (KEY_FAUCET, &self.faucet_id),
        ]
    }
}

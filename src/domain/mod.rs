pub mod change;
pub mod config;
pub mod contract_ids;
pub mod error;
pub mod extract;
pub mod package;

pub use change::{ObjectChange, TxResponse};
pub use config::{CONFIG_FILE, DEFAULT_GAS_BUDGET, DeployConfig};
pub use contract_ids::ContractIds;
pub use error::AppError;
pub use package::{IdSlot, PACKAGES, PackageSpec};

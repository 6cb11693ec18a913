//! suideploy: build, publish, and wire up the Sui stablecoin packages.
//!
//! The pipeline shells out to the `sui` CLI to publish three Move packages,
//! extracts identifiers from the CLI's JSON transaction output, creates the
//! Treasury and Faucet objects, and persists everything to
//! `contract_ids.env`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    DeployOutcome, PublishOutcome, create_faucet, create_treasury, deploy, publish_package,
    status, verify,
};
pub use domain::{AppError, ContractIds, DeployConfig, TxResponse};
pub use domain::extract::{faucet_object_id, published_package_id, treasury_object_id};

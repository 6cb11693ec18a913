//! API facade for the application.
//!
//! High-level functions that glue together context creation and command
//! execution with the real adapters.

use std::fs;
use std::path::PathBuf;

use crate::adapters::{DialoguerPrompter, SuiCommandAdapter};
use crate::app::commands::{deploy, faucet, publish, status, treasury, verify};
use crate::app::{AppContext, report};
use crate::domain::{AppError, ContractIds, DeployConfig, PACKAGES, package};
use crate::ports::{AssumeYes, Prompter, SuiPort};

pub use crate::app::commands::deploy::DeployOutcome;
pub use crate::app::commands::publish::PublishOutcome;

type Context = AppContext<SuiCommandAdapter, Box<dyn Prompter>>;

fn create_context(yes: bool) -> Result<Context, AppError> {
    let root = std::env::current_dir()?;
    let config = DeployConfig::load(&root)?;
    let prompter: Box<dyn Prompter> =
        if yes { Box::new(AssumeYes) } else { Box::new(DialoguerPrompter::new()) };
    Ok(AppContext::new(SuiCommandAdapter::new(), prompter, config, root))
}

/// Run the full deployment pipeline in the current directory.
pub fn deploy(yes: bool) -> Result<DeployOutcome, AppError> {
    deploy::execute(&create_context(yes)?)
}

/// Build and publish a single configured package.
pub fn publish_package(name: &str) -> Result<PublishOutcome, AppError> {
    let ctx = create_context(true)?;
    let spec = package::find_package(name).ok_or_else(|| AppError::UnknownPackage {
        name: name.to_string(),
        available: package::package_names(),
    })?;
    publish::execute(&ctx, spec)
}

/// Create the Treasury from previously saved identifiers.
pub fn create_treasury() -> Result<Option<String>, AppError> {
    let ctx = create_context(true)?;
    let mut ids = load_ids(&ctx)?;
    if let Some(id) = treasury::execute(&ctx, &ids)? {
        ids.treasury_id = Some(id);
        save_ids(&ctx, &ids)?;
    }
    Ok(ids.treasury_id)
}

/// Create the Faucet from previously saved identifiers.
pub fn create_faucet(yes: bool) -> Result<Option<String>, AppError> {
    let ctx = create_context(yes)?;
    let mut ids = load_ids(&ctx)?;
    if let Some(id) = faucet::execute(&ctx, &ids)? {
        ids.faucet_id = Some(id);
        save_ids(&ctx, &ids)?;
    }
    Ok(ids.faucet_id)
}

/// Verify the deployed coin type against previously saved identifiers.
pub fn verify() -> Result<bool, AppError> {
    let ctx = create_context(true)?;
    let ids = load_ids(&ctx)?;
    verify::execute(&ctx, &ids)
}

/// Print the identifiers saved in `contract_ids.env`.
pub fn status(json: bool) -> Result<ContractIds, AppError> {
    let ctx = create_context(true)?;
    status::execute(&ctx, json)
}

/// Identifiers from `contract_ids.env`, or reconstructed from the persisted
/// publish outputs when no env file has been written yet.
fn load_ids<S: SuiPort, P: Prompter>(ctx: &AppContext<S, P>) -> Result<ContractIds, AppError> {
    let env_path = ctx.env_path();
    if env_path.is_file() {
        return Ok(ContractIds::from_env(&fs::read_to_string(&env_path)?));
    }

    let mut ids = ContractIds::default();
    for spec in PACKAGES {
        let outcome = publish::load_existing(ctx, spec)?;
        match spec.slot {
            crate::domain::IdSlot::Extensions => ids.extensions_package = outcome.package_id,
            crate::domain::IdSlot::Stablecoin => ids.stablecoin_package = outcome.package_id,
            crate::domain::IdSlot::Usdc => ids.usdc_package = outcome.package_id,
        }
        if outcome.treasury_id.is_some() {
            ids.treasury_id = outcome.treasury_id;
        }
    }
    Ok(ids)
}

fn save_ids<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    ids: &ContractIds,
) -> Result<PathBuf, AppError> {
    let env_path = ctx.env_path();
    fs::create_dir_all(ctx.output_dir())?;
    fs::write(&env_path, ids.to_env())?;
    report::info(&format!("Contract IDs saved: {}", env_path.display()));
    Ok(env_path)
}

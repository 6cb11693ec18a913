//! The full deployment pipeline: publish all packages, create the Treasury
//! and Faucet, verify, and persist the collected identifiers.

use std::fs;
use std::path::PathBuf;

use crate::app::commands::{faucet, publish, treasury, verify};
use crate::app::{AppContext, report};
use crate::domain::{AppError, ContractIds, IdSlot, PACKAGES};
use crate::ports::{Prompter, ReuseDecision, SuiPort};

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    pub ids: ContractIds,
    pub env_path: PathBuf,
    pub verified: bool,
}

const TOTAL_STEPS: usize = 7;

pub fn execute<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
) -> Result<DeployOutcome, AppError> {
    fs::create_dir_all(ctx.output_dir())?;
    report::info(&format!("Packages directory: {}", ctx.packages_dir().display()));
    report::info(&format!("Output directory: {}", ctx.output_dir().display()));

    let reuse = resolve_existing_outputs(ctx)?;

    let mut ids = ContractIds::default();
    for (step, spec) in PACKAGES.iter().enumerate() {
        report::step(step + 1, TOTAL_STEPS, &format!("Build & Publish {}", spec.display_name));

        let outcome = if reuse && ctx.output_path(spec.name).is_file() {
            report::info(&format!("Using existing {}.out.json.", spec.name));
            publish::load_existing(ctx, spec)?
        } else if ctx
            .prompter()
            .confirm(&format!("Do you want to build and publish {}?", spec.name), true)
        {
            publish::execute(ctx, spec)?
        } else {
            report::warn(&format!("Skipping {} deployment.", spec.name));
            publish::load_existing(ctx, spec)?
        };

        match spec.slot {
            IdSlot::Extensions => ids.extensions_package = outcome.package_id,
            IdSlot::Stablecoin => ids.stablecoin_package = outcome.package_id,
            IdSlot::Usdc => ids.usdc_package = outcome.package_id,
        }
        if outcome.treasury_id.is_some() {
            ids.treasury_id = outcome.treasury_id;
        }
    }

    report::step(4, TOTAL_STEPS, "Create Treasury");
    if ids.usdc_package.is_some() && ids.treasury_id.is_none() {
        ids.treasury_id = treasury::execute(ctx, &ids)?;
    } else if ids.treasury_id.is_some() {
        report::info("Treasury already created during publish; skipping.");
    } else {
        report::warn("USDC package not resolved; skipping Treasury creation.");
    }

    report::step(5, TOTAL_STEPS, "Create Faucet");
    if ids.usdc_package.is_some() && ids.treasury_id.is_some() {
        ids.faucet_id = faucet::execute(ctx, &ids)?;
    } else {
        report::warn("Treasury or USDC package not resolved; skipping Faucet creation.");
    }

    report::step(6, TOTAL_STEPS, "Verify coin type");
    let verified = verify::execute(ctx, &ids)?;

    report::step(7, TOTAL_STEPS, "Save contract IDs");
    let env_path = ctx.env_path();
    fs::write(&env_path, ids.to_env())?;
    report::info(&format!("Contract IDs saved: {}", env_path.display()));

    summarize(&ids, verified, ctx.config());

    Ok(DeployOutcome { ids, env_path, verified })
}

/// Ask once, up front, what to do about outputs left by a previous run.
/// Returns true when existing outputs should be reused.
fn resolve_existing_outputs<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
) -> Result<bool, AppError> {
    let existing: Vec<String> = PACKAGES
        .iter()
        .map(|spec| format!("{}.out.json", spec.name))
        .filter(|name| ctx.output_dir().join(name).is_file())
        .collect();

    if existing.is_empty() {
        return Ok(false);
    }

    match ctx.prompter().reuse_outputs(&existing) {
        ReuseDecision::UseExisting => Ok(true),
        ReuseDecision::Recreate => {
            for name in &existing {
                fs::remove_file(ctx.output_dir().join(name))?;
                report::info(&format!("Removed {name}"));
            }
            Ok(false)
        }
    }
}

fn summarize(ids: &ContractIds, verified: bool, config: &crate::domain::DeployConfig) {
    report::section("Deployment results");
    report::contract_id("SUI_EXTENSIONS_PACKAGE", ids.extensions_package.as_deref());
    report::contract_id("STABLECOIN_PACKAGE", ids.stablecoin_package.as_deref());
    report::contract_id("USDC_PACKAGE", ids.usdc_package.as_deref());
    report::contract_id("TREASURY", ids.treasury_id.as_deref());
    report::contract_id("FAUCET_ID", ids.faucet_id.as_deref());

    if let Some(coin_type) = ids.coin_type(&config.coin_module, &config.coin_type) {
        report::info(&format!("Coin type: {coin_type}"));
    }
    if !verified {
        report::warn("Coin type verification did not pass; check the output above.");
    }

    let resolved = ids.resolved_count();
    let total = ids.slot_count();
    if resolved == total {
        report::success(&format!("All {total} components deployed successfully!"));
    } else {
        report::warn(&format!("{resolved}/{total} components deployed successfully."));
    }
}

//! Build and publish one Move package, persisting the raw CLI output and
//! extracting the identifiers it yields.

use std::fs;

use crate::app::{AppContext, report};
use crate::domain::{AppError, PackageSpec, TxResponse, extract};
use crate::ports::{Prompter, SuiPort};

/// Identifiers extracted from a publish (fresh or reused).
#[derive(Debug, Clone, Default)]
pub struct PublishOutcome {
    pub package_id: Option<String>,
    /// Treasury created as a publish side effect, when the spec asks for it.
    pub treasury_id: Option<String>,
}

/// Build, publish, persist, and extract.
pub fn execute<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    spec: &PackageSpec,
) -> Result<PublishOutcome, AppError> {
    let package_dir = ctx.package_dir(spec.name);
    if !package_dir.is_dir() {
        return Err(AppError::PackageDirMissing(package_dir));
    }

    report::progress(&format!("Building {} package...", spec.name));
    ctx.sui().move_build(&package_dir)?;

    report::progress(&format!("Publishing {} package...", spec.name));
    let raw = ctx.sui().publish(&package_dir, ctx.config().gas_budget)?;

    let output_path = ctx.output_path(spec.name);
    fs::create_dir_all(ctx.output_dir())?;
    fs::write(&output_path, &raw)?;
    report::info(&format!("Output saved: {}", output_path.display()));

    Ok(extract_outcome(ctx, spec, &raw))
}

/// Re-extract identifiers from a persisted `<name>.out.json`.
///
/// Returns an empty outcome when no output file exists; a present file that
/// fails to parse also degrades to an empty outcome, matching the
/// extractor's "absence, not error" contract.
pub fn load_existing<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    spec: &PackageSpec,
) -> Result<PublishOutcome, AppError> {
    let output_path = ctx.output_path(spec.name);
    if !output_path.is_file() {
        return Ok(PublishOutcome::default());
    }
    let raw = fs::read_to_string(&output_path)?;
    let outcome = extract_outcome(ctx, spec, &raw);
    if let Some(id) = outcome.package_id.as_deref() {
        report::info(&format!("Loaded existing {} package id: {id}", spec.name));
    }
    Ok(outcome)
}

fn extract_outcome<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    spec: &PackageSpec,
    raw: &str,
) -> PublishOutcome {
    let tx = TxResponse::from_json(raw);
    let package_id = extract::published_package_id(&tx);
    report::contract_id(
        &format!("{}_PACKAGE", spec.name.to_uppercase()),
        package_id.as_deref(),
    );

    // The coin lives in the package being published here, so the treasury
    // type is bound to the freshly extracted package id.
    let treasury_id = match (&package_id, spec.extract_treasury) {
        (Some(pkg), true) => {
            let config = ctx.config();
            let id = extract::treasury_object_id(&tx, pkg, &config.coin_module, &config.coin_type);
            if id.is_some() {
                report::contract_id("TREASURY", id.as_deref());
            }
            id
        }
        _ => None,
    };

    PublishOutcome { package_id, treasury_id }
}

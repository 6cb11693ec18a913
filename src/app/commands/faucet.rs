//! Create the shared `Faucet<USDC>` object via `sui client call`.

use std::fs;

use crate::app::{AppContext, report};
use crate::domain::{AppError, ContractIds, TxResponse, extract};
use crate::ports::{CallRequest, Prompter, SuiPort};

/// Create the faucet, guarded by an interactive confirmation.
///
/// Requires the stablecoin package, usdc package, and treasury id to be
/// resolved already. Returns `Ok(None)` when the user declines or when the
/// response contained no matching created object.
pub fn execute<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    ids: &ContractIds,
) -> Result<Option<String>, AppError> {
    let stablecoin = ids
        .stablecoin_package
        .as_deref()
        .ok_or_else(|| AppError::MissingIdentifier("STABLECOIN_PACKAGE".to_string()))?;
    let config = ctx.config();
    let coin_type = ids
        .coin_type(&config.coin_module, &config.coin_type)
        .ok_or_else(|| AppError::MissingIdentifier("USDC_PACKAGE".to_string()))?;
    let treasury = ids
        .treasury_id
        .as_deref()
        .ok_or_else(|| AppError::MissingIdentifier("TREASURY".to_string()))?;

    report::info(&format!("This will create a shared Faucet<{}> object.", config.coin_type));
    if !ctx.prompter().confirm("Do you want to proceed with creating the faucet?", true) {
        report::warn("Faucet creation cancelled by user.");
        return Ok(None);
    }

    report::progress("Executing sui client call to create Faucet...");
    let raw = ctx.sui().call(&CallRequest {
        package: stablecoin.to_string(),
        module: "faucet".to_string(),
        function: "create".to_string(),
        type_args: vec![coin_type],
        args: vec![treasury.to_string()],
        gas_budget: config.gas_budget,
    })?;

    let output_path = ctx.output_path("faucet");
    fs::create_dir_all(ctx.output_dir())?;
    fs::write(&output_path, &raw)?;
    report::info(&format!("Output saved: {}", output_path.display()));

    let tx = TxResponse::from_json(&raw);
    let faucet_id = extract::faucet_object_id(
        &tx,
        ids.usdc_package.as_deref(),
        &config.coin_module,
        &config.coin_type,
    );
    match faucet_id.as_deref() {
        Some(id) => report::contract_id("FAUCET_ID", Some(id)),
        None => report::warn("Could not extract FAUCET_ID from the output."),
    }
    Ok(faucet_id)
}

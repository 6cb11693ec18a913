//! Create the `Treasury<USDC>` object via `sui client call`.

use std::fs;

use crate::app::{AppContext, report};
use crate::domain::{AppError, ContractIds, TxResponse, extract};
use crate::ports::{CallRequest, Prompter, SuiPort};

/// Create a Treasury owned by the wallet's active address.
///
/// Requires the stablecoin and usdc package ids to be resolved already.
/// Returns the extracted treasury object id, or `None` when the response
/// contained no matching created object.
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

    report::info(&format!("This will create a Treasury<{}> object.", config.coin_type));

    let owner = ctx.sui().active_address()?;

    report::progress("Executing sui client call to create Treasury...");
    let raw = ctx.sui().call(&CallRequest {
        package: stablecoin.to_string(),
        module: "treasury".to_string(),
        function: "create".to_string(),
        type_args: vec![coin_type],
        args: vec![owner],
        gas_budget: config.gas_budget,
    })?;

    let output_path = ctx.output_path("treasury");
    fs::create_dir_all(ctx.output_dir())?;
    fs::write(&output_path, &raw)?;
    report::info(&format!("Output saved: {}", output_path.display()));

    let tx = TxResponse::from_json(&raw);
    let usdc = ids.usdc_package.as_deref().unwrap_or_default();
    let treasury_id =
        extract::treasury_object_id(&tx, usdc, &config.coin_module, &config.coin_type);
    match treasury_id.as_deref() {
        Some(id) => report::contract_id("TREASURY", Some(id)),
        None => report::warn("Could not extract TREASURY from the output."),
    }
    Ok(treasury_id)
}

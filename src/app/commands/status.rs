//! Print the identifiers currently saved in `contract_ids.env`.

use std::fs;

use crate::app::{AppContext, report};
use crate::domain::{AppError, ContractIds};
use crate::ports::{Prompter, SuiPort};

pub fn execute<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    json: bool,
) -> Result<ContractIds, AppError> {
    let env_path = ctx.env_path();
    if !env_path.is_file() {
        return Err(AppError::config_error(format!(
            "No contract IDs found at {}. Run 'suideploy deploy' first.",
            env_path.display()
        )));
    }

    let ids = ContractIds::from_env(&fs::read_to_string(&env_path)?);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ids).map_err(|e| AppError::Parse {
                what: "contract ids".to_string(),
                details: e.to_string(),
            })?
        );
    } else {
        report::section("Contract IDs");
        report::contract_id("SUI_EXTENSIONS_PACKAGE", ids.extensions_package.as_deref());
        report::contract_id("STABLECOIN_PACKAGE", ids.stablecoin_package.as_deref());
        report::contract_id("USDC_PACKAGE", ids.usdc_package.as_deref());
        report::contract_id("TREASURY", ids.treasury_id.as_deref());
        report::contract_id("FAUCET_ID", ids.faucet_id.as_deref());
        let config = ctx.config();
        if let Some(coin_type) = ids.coin_type(&config.coin_module, &config.coin_type) {
            report::info(&format!("Coin type: {coin_type}"));
        }
    }

    Ok(ids)
}

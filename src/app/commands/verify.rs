//! Verify that the deployed coin type is wired up correctly.
//!
//! Checks that the Treasury object's type mentions the expected coin type,
//! then reports the wallet balance for that coin. Problems here are
//! reported, never fatal: a failed check returns `Ok(false)`.

use serde_json::Value;

use crate::app::{AppContext, report};
use crate::domain::{AppError, ContractIds};
use crate::ports::{Prompter, SuiPort};

pub fn execute<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    ids: &ContractIds,
) -> Result<bool, AppError> {
    let config = ctx.config();
    let Some(expected) = ids.coin_type(&config.coin_module, &config.coin_type) else {
        report::warn("USDC package id not available for verification.");
        return Ok(false);
    };
    report::info(&format!("Expected coin type: {expected}"));

    let mut ok = true;
    if let Some(treasury) = ids.treasury_id.as_deref() {
        ok = check_treasury_type(ctx, treasury, &expected);
    }

    report_balance(ctx, &expected);
    Ok(ok)
}

fn check_treasury_type<S: SuiPort, P: Prompter>(
    ctx: &AppContext<S, P>,
    treasury: &str,
    expected: &str,
) -> bool {
    report::progress("Checking Treasury object type...");
    let raw = match ctx.sui().object(treasury) {
        Ok(raw) => raw,
        Err(e) => {
            report::warn(&format!("Could not fetch Treasury object: {e}"));
            return false;
        }
    };

    let data: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);
    let object_type = data
        .get("data")
        .and_then(|d| d.get("type"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    if object_type.is_empty() {
        report::warn("Could not determine Treasury object type.");
        false
    } else if object_type.contains(expected) {
        report::success("Treasury contains the expected coin type.");
        true
    } else {
        report::warn(&format!(
            "Treasury type mismatch: expected {expected} in {object_type}"
        ));
        false
    }
}

fn report_balance<S: SuiPort, P: Prompter>(ctx: &AppContext<S, P>, coin_type: &str) {
    report::progress("Checking wallet balance...");
    let address = match ctx.sui().active_address() {
        Ok(address) => address,
        Err(e) => {
            report::warn(&format!("Could not determine active address: {e}"));
            return;
        }
    };

    let raw = match ctx.sui().balance(&address, coin_type) {
        Ok(raw) => raw,
        Err(e) => {
            report::warn(&format!("Could not query balance: {e}"));
            return;
        }
    };

    match total_balance(&raw, coin_type) {
        Some(0) | None => {
            report::info("No balance found yet. This is normal before using the faucet.");
        }
        Some(total) => {
            report::success(&format!(
                "Found balance: {} {}",
                total as f64 / 1_000_000.0,
                ctx.config().coin_type
            ));
        }
    }
}

/// Pull the total balance out of a `sui client balance --json` response.
///
/// Tolerates both shapes the CLI has emitted over time: a single object
/// with a `totalBalance` field, or a list of per-coin entries.
fn total_balance(raw: &str, coin_type: &str) -> Option<u64> {
    let data: Value = serde_json::from_str(raw).ok()?;
    let entry = match &data {
        Value::Object(_) => Some(&data),
        Value::Array(entries) => entries.iter().find(|e| {
            e.get("coinType").and_then(Value::as_str) == Some(coin_type)
                || e.get("coin_type").and_then(Value::as_str) == Some(coin_type)
        }),
        _ => None,
    }?;

    let total = entry.get("totalBalance").or_else(|| entry.get("total_balance"))?;
    match total {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

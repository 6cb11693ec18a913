//! Identifier extraction from transaction object changes.
//!
//! Each lookup scans the `objectChanges` sequence in order and returns the
//! first matching record, or `None` when nothing matches. Absence is never
//! an error: malformed input deserializes to an empty change list upstream,
//! and every lookup on an empty list is simply `None`.
//!
//! Typed-object lookups match the rendered `objectType` string by substring,
//! not by parsing the type grammar. This mirrors what the deployment flow
//! needs in practice, but a bound parameter that collides textually with an
//! unrelated part of a type string would match too; callers bind freshly
//! published package addresses, which are long enough to make that unlikely.

use super::change::TxResponse;

/// Address of the first package published in the transaction.
pub fn published_package_id(tx: &TxResponse) -> Option<String> {
    tx.object_changes
        .iter()
        .find(|c| c.kind == "published" && c.package_id.is_some())
        .and_then(|c| c.package_id.clone())
}

/// Object id of the first created object whose type contains `matcher`.
fn created_object_id(tx: &TxResponse, matcher: &str) -> Option<String> {
    tx.object_changes
        .iter()
        .find(|c| {
            c.kind == "created"
                && c.object_id.is_some()
                && c.object_type.as_deref().is_some_and(|t| t.contains(matcher))
        })
        .and_then(|c| c.object_id.clone())
}

/// Object id of the `Treasury` created for the given coin.
///
/// The coin is identified by the package that defines it plus the coin
/// module/type names, e.g. `0xC0..::usdc::USDC`. The bound package id is
/// required: without it the matcher would accept any coin's treasury.
pub fn treasury_object_id(
    tx: &TxResponse,
    coin_package: &str,
    coin_module: &str,
    coin_type: &str,
) -> Option<String> {
    let matcher = format!("::treasury::Treasury<{coin_package}::{coin_module}::{coin_type}>");
    created_object_id(tx, &matcher)
}

/// Object id of the `Faucet` created for the given coin.
///
/// The coin package binding is optional; when absent, any instantiation of
/// the coin module/type matches. The faucet is created after the coin
/// package is known, so an unbound lookup is still unambiguous in practice.
pub fn faucet_object_id(
    tx: &TxResponse,
    coin_package: Option<&str>,
    coin_module: &str,
    coin_type: &str,
) -> Option<String> {
    match coin_package {
        Some(pkg) => {
            let matcher = format!("::faucet::Faucet<{pkg}::{coin_module}::{coin_type}>");
            created_object_id(tx, &matcher)
        }
        None => {
            // Match `::faucet::Faucet<` ... `::usdc::USDC>` with any package
            // in between, without pulling in a regex engine.
            let suffix = format!("::{coin_module}::{coin_type}>");
            tx.object_changes
                .iter()
                .find(|c| {
                    c.kind == "created"
                        && c.object_id.is_some()
                        && c.object_type.as_deref().is_some_and(|t| {
                            t.contains("::faucet::Faucet<") && t.contains(&suffix)
                        })
                })
                .and_then(|c| c.object_id.clone())
        }
    }
}

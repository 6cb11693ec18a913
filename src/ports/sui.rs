use std::path::Path;

use crate::domain::AppError;

/// A `sui client call` invocation.
#[derive(Debug, Clone)]
pub struct CallRequest {
    /// Package hosting the entry function.
    pub package: String,
    /// Module within the package.
    pub module: String,
    /// Entry function name.
    pub function: String,
    /// Generic type arguments.
    pub type_args: Vec<String>,
    /// Positional call arguments.
    pub args: Vec<String>,
    /// Gas budget for the transaction.
    pub gas_budget: u64,
}

/// The external `sui` CLI as seen by the pipeline.
///
/// Every operation is blocking and all-or-nothing: it either succeeds with
/// the captured stdout payload or fails with an error carrying the tool's
/// stderr. There is no retry or timeout layer.
pub trait SuiPort {
    /// Run `sui move build` in the package directory.
    fn move_build(&self, package_dir: &Path) -> Result<(), AppError>;

    /// Run `sui client publish --json` in the package directory and return
    /// the raw JSON response.
    fn publish(&self, package_dir: &Path, gas_budget: u64) -> Result<String, AppError>;

    /// Run `sui client call --json` and return the raw JSON response.
    fn call(&self, request: &CallRequest) -> Result<String, AppError>;

    /// The wallet's active address.
    fn active_address(&self) -> Result<String, AppError>;

    /// Raw JSON description of an on-chain object.
    fn object(&self, object_id: &str) -> Result<String, AppError>;

    /// Raw JSON balance of `address` for the given coin type.
    fn balance(&self, address: &str, coin_type: &str) -> Result<String, AppError>;
}

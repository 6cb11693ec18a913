use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CallRequest, SuiPort};

/// Environment variable overriding the `sui` binary (test seam).
pub const SUI_BIN_ENV: &str = "SUIDEPLOY_SUI_BIN";

/// Adapter invoking the `sui` CLI as a subprocess.
#[derive(Debug, Clone, Default)]
pub struct SuiCommandAdapter;

impl SuiCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn binary() -> String {
        std::env::var(SUI_BIN_ENV).unwrap_or_else(|_| "sui".to_string())
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<String, AppError> {
        let binary = Self::binary();
        let mut command = Command::new(&binary);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| AppError::Sui {
            command: format!("{} {}", binary, args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Sui {
                command: format!("{} {}", binary, args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl SuiPort for SuiCommandAdapter {
    fn move_build(&self, package_dir: &Path) -> Result<(), AppError> {
        self.run(&["move", "build"], Some(package_dir)).map(|_| ())
    }

    fn publish(&self, package_dir: &Path, gas_budget: u64) -> Result<String, AppError> {
        let budget = gas_budget.to_string();
        self.run(
            &["client", "publish", "--gas-budget", budget.as_str(), "--json"],
            Some(package_dir),
        )
    }

    fn call(&self, request: &CallRequest) -> Result<String, AppError> {
        let budget = request.gas_budget.to_string();
        let mut args = vec![
            "client",
            "call",
            "--package",
            request.package.as_str(),
            "--module",
            request.module.as_str(),
            "--function",
            request.function.as_str(),
        ];
        if !request.type_args.is_empty() {
            args.push("--type-args");
            args.extend(request.type_args.iter().map(String::as_str));
        }
        if !request.args.is_empty() {
            args.push("--args");
            args.extend(request.args.iter().map(String::as_str));
        }
        args.extend(["--gas-budget", budget.as_str(), "--json"]);
        self.run(&args, None)
    }

    fn active_address(&self) -> Result<String, AppError> {
        self.run(&["client", "active-address"], None)
    }

    fn object(&self, object_id: &str) -> Result<String, AppError> {
        self.run(&["client", "object", object_id, "--json"], None)
    }

    fn balance(&self, address: &str, coin_type: &str) -> Result<String, AppError> {
        self.run(&["client", "balance", address, "--coin-type", coin_type, "--json"], None)
    }
}

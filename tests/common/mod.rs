//! Shared testing utilities for suideploy CLI tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory, the three Move
/// package directories, and a fake `sui` binary wired in via
/// `SUIDEPLOY_SUI_BIN`.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    sui_bin: PathBuf,
    log_file: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a well-behaved fake `sui`.
    pub fn new() -> Self {
        Self::with_script(&happy_sui_script())
    }

    /// Create an environment whose `sui` binary always fails.
    pub fn with_failing_sui() -> Self {
        Self::with_script("#!/bin/sh\necho 'simulated sui failure' >&2\nexit 1\n")
    }

    fn with_script(script_body: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        for package in ["sui_extensions", "stablecoin", "usdc"] {
            fs::create_dir_all(work_dir.join("packages").join(package))
                .expect("Failed to create package directory");
        }

        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("sui.log");
        let sui_bin = bin_dir.join("sui");

        let script = script_body.replace("__LOG__", &log_file.to_string_lossy());
        fs::write(&sui_bin, script).expect("Failed to write sui script");
        let mut perms = fs::metadata(&sui_bin).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&sui_bin, perms).expect("Failed to set permissions");

        Self { root, work_dir, sui_bin, log_file }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `suideploy` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("suideploy").expect("Failed to locate suideploy binary");
        cmd.current_dir(&self.work_dir).env("SUIDEPLOY_SUI_BIN", &self.sui_bin);
        cmd
    }

    /// Path to the output directory used by the default config.
    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("json")
    }

    /// Path to the persisted identifier file.
    pub fn env_path(&self) -> PathBuf {
        self.output_dir().join("contract_ids.env")
    }

    /// Everything the fake `sui` binary has been invoked with, one line per
    /// invocation.
    pub fn sui_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}

/// A fake `sui` covering the full happy path: publishes keyed by the package
/// directory name, treasury/faucet calls keyed by `--module`, plus
/// active-address, object, and balance queries.
fn happy_sui_script() -> String {
    r#"#!/bin/sh
echo "$@" >> "__LOG__"

if [ "$1" = "move" ]; then
    exit 0
fi

case "$2" in
    publish)
        case "$(basename "$PWD")" in
            sui_extensions)
                echo '{"objectChanges":[{"type":"published","packageId":"0xE"}]}' ;;
            stablecoin)
                echo '{"objectChanges":[{"type":"published","packageId":"0xS"}]}' ;;
            usdc)
                echo '{"objectChanges":[{"type":"published","packageId":"0xC"}]}' ;;
        esac
        ;;
    call)
        MODULE=""
        prev=""
        for a in "$@"; do
            if [ "$prev" = "--module" ]; then MODULE="$a"; fi
            prev="$a"
        done
        case "$MODULE" in
            treasury)
                echo '{"objectChanges":[{"type":"created","objectId":"0xT","objectType":"0xS::treasury::Treasury<0xC::usdc::USDC>"}]}' ;;
            faucet)
                echo '{"objectChanges":[{"type":"created","objectId":"0xF","objectType":"0xS::faucet::Faucet<0xC::usdc::USDC>"}]}' ;;
        esac
        ;;
    active-address)
        echo '0xADDR'
        ;;
    object)
        echo '{"data":{"type":"0xS::treasury::Treasury<0xC::usdc::USDC>"}}'
        ;;
    balance)
        echo '{"totalBalance":"0"}'
        ;;
esac

exit 0
"#
    .to_string()
}

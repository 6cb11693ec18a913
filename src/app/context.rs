use std::path::{Path, PathBuf};

use crate::domain::DeployConfig;
use crate::ports::{Prompter, SuiPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SuiPort, P: Prompter> {
    sui: S,
    prompter: P,
    config: DeployConfig,
    root: PathBuf,
}

impl<S: SuiPort, P: Prompter> AppContext<S, P> {
    /// Create a new application context rooted at `root`.
    pub fn new(sui: S, prompter: P, config: DeployConfig, root: PathBuf) -> Self {
        Self { sui, prompter, config, root }
    }

    /// Get a reference to the sui client port.
    pub fn sui(&self) -> &S {
        &self.sui
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get the deployment configuration.
    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Directory containing the Move packages.
    pub fn packages_dir(&self) -> PathBuf {
        self.root.join(&self.config.packages_dir)
    }

    /// Directory holding raw CLI outputs and `contract_ids.env`.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output_dir)
    }

    /// Path of a persisted CLI output, e.g. `json/usdc.out.json`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir().join(format!("{name}.out.json"))
    }

    /// Path of the persisted identifier file.
    pub fn env_path(&self) -> PathBuf {
        self.output_dir().join("contract_ids.env")
    }

    /// Directory of one Move package.
    pub fn package_dir(&self, name: &str) -> PathBuf {
        self.packages_dir().join(name)
    }

    /// Root the context was created at.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

use dialoguer::Confirm;

use crate::ports::{Prompter, ReuseDecision};

/// Interactive prompter backed by `dialoguer`.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .unwrap_or(default)
    }

    fn reuse_outputs(&self, existing: &[String]) -> ReuseDecision {
        println!("ℹ️  Found outputs from a previous run:");
        for name in existing {
            println!("   - {name}");
        }
        let recreate = Confirm::new()
            .with_prompt("Delete them and publish fresh? (No reuses the existing outputs)")
            .default(false)
            .interact()
            .unwrap_or(false);
        if recreate { ReuseDecision::Recreate } else { ReuseDecision::UseExisting }
    }
}

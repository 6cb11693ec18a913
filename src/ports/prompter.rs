/// What to do with output files left over from a previous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReuseDecision {
    /// Parse the existing `<name>.out.json` files instead of republishing.
    UseExisting,
    /// Delete the existing files and publish fresh.
    Recreate,
}

/// Injected decision capability for interactive control flow.
///
/// Prompting belongs to the orchestration layer, not the extraction core;
/// modeling it as a port keeps the pipeline testable without a terminal.
pub trait Prompter {
    /// Ask a yes/no question. The default answer is used on plain Enter.
    fn confirm(&self, prompt: &str, default: bool) -> bool;

    /// Ask what to do about existing output files from a previous run.
    fn reuse_outputs(&self, existing: &[String]) -> ReuseDecision;
}

impl<T: Prompter + ?Sized> Prompter for Box<T> {
    fn confirm(&self, prompt: &str, default: bool) -> bool {
        (**self).confirm(prompt, default)
    }

    fn reuse_outputs(&self, existing: &[String]) -> ReuseDecision {
        (**self).reuse_outputs(existing)
    }
}

/// Prompter that answers yes to everything (`--yes` flows and scripts).
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _prompt: &str, _default: bool) -> bool {
        true
    }

    fn reuse_outputs(&self, _existing: &[String]) -> ReuseDecision {
        ReuseDecision::UseExisting
    }
}

use std::sync::Mutex;

use crate::ports::{Prompter, ReuseDecision};

/// Scriptable prompter recording every question it is asked.
pub struct MockPrompter {
    pub prompts: Mutex<Vec<String>>,
    confirm_answer: bool,
    reuse_decision: ReuseDecision,
}

#[allow(dead_code)]
impl MockPrompter {
    /// Answer every confirmation with `answer` and reuse existing outputs.
    pub fn answering(answer: bool) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            confirm_answer: answer,
            reuse_decision: ReuseDecision::UseExisting,
        }
    }

    pub fn with_reuse_decision(mut self, decision: ReuseDecision) -> Self {
        self.reuse_decision = decision;
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Prompter for MockPrompter {
    fn confirm(&self, prompt: &str, _default: bool) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirm_answer
    }

    fn reuse_outputs(&self, existing: &[String]) -> ReuseDecision {
        self.prompts.lock().unwrap().push(format!("reuse: {}", existing.join(",")));
        self.reuse_decision
    }
}

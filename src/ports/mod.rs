mod prompter;
mod sui;

pub use prompter::{AssumeYes, Prompter, ReuseDecision};
pub use sui::{CallRequest, SuiPort};

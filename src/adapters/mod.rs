pub mod dialoguer_prompter;
pub mod sui_command;

pub use dialoguer_prompter::DialoguerPrompter;
pub use sui_command::{SUI_BIN_ENV, SuiCommandAdapter};

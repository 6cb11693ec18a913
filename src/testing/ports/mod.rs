mod fake_sui;
mod mock_prompter;

pub use fake_sui::FakeSui;
pub use mock_prompter::MockPrompter;

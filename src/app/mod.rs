pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod report;

pub use context::AppContext;

//! CLI command handlers. Each command is in its own file.

mod completions;
mod extract;
mod run;

pub use completions::run_completions;
pub use extract::run_extract;
pub use run::run_rename;

//! CLI command handlers, one per file.

mod check;
mod completions;
mod config;

pub use check::{run_check, CheckOptions};
pub use completions::{run_completions, run_manpage};
pub use config::run_show_config;

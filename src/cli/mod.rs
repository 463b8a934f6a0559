//! CLI layer - Command-line interface and interactive shell

pub mod commands;
pub mod output;
pub mod shell;

pub use commands::{Cli, ShellCommand, ShellLine};
pub use output::{format_assignments, format_schedule};
pub use shell::{Outcome, Shell};

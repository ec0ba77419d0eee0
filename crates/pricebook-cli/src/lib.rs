mod args;
mod commands;
mod console;
mod handlers;
mod tui;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;

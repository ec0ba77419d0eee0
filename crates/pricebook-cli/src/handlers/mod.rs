pub mod add;
pub mod clear;
pub mod list;
pub mod remove;
pub mod total;
pub mod tui;
pub mod update;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Color a status label green when stdout is a terminal.
fn ok_label(label: &str) -> String {
    if std::io::stdout().is_terminal() {
        label.green().bold().to_string()
    } else {
        label.to_string()
    }
}

// NOTE: The command set is small enough that flat subcommands stay
// discoverable; namespacing would only add typing here.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pricebook")]
#[command(about = "Manage a named price list from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: PRICEBOOK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive list editor
    Tui,

    /// Add a new item
    Add {
        /// Item name
        name: String,
        /// Price as an integer amount
        price: String,
    },

    /// Update an existing item's name and price
    Update {
        /// Id of the item to update
        id: u64,
        /// New name
        name: String,
        /// New price as an integer amount
        price: String,
    },

    /// Delete one item
    Remove {
        /// Id of the item to delete
        id: u64,
    },

    /// Delete every item and the persisted entry
    Clear,

    /// Print the item list
    List,

    /// Print the total price
    Total,
}

use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use pricebook_runtime::{Config, resolve_data_dir};
use pricebook_store::{FsBackend, ItemStore};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let config = Config::load_from(&data_dir.join("config.toml"))?;
    let store = open_store(&data_dir);

    match command {
        Commands::Tui => handlers::tui::handle(store, &config),
        Commands::Add { name, price } => {
            handlers::add::handle(store, &config, &name, &price, cli.format)
        }
        Commands::Update { id, name, price } => {
            handlers::update::handle(store, &config, id, &name, &price, cli.format)
        }
        Commands::Remove { id } => handlers::remove::handle(store, &config, id, cli.format),
        Commands::Clear => handlers::clear::handle(store, cli.format),
        Commands::List => handlers::list::handle(store, &config, cli.format),
        Commands::Total => handlers::total::handle(store, &config, cli.format),
    }
}

fn open_store(data_dir: &Path) -> ItemStore {
    ItemStore::new(Box::new(FsBackend::new(data_dir)))
}

fn show_guidance() {
    println!("pricebook - terminal price-list manager\n");
    println!("Quick commands:");
    println!("  pricebook tui                 # Interactive list editor");
    println!("  pricebook add <name> <price>  # Add an item");
    println!("  pricebook list                # Show items and the total");
    println!("  pricebook clear               # Remove everything\n");
    println!("For more commands:");
    println!("  pricebook --help");
}

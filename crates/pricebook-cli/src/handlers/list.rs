use crate::args::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use pricebook_runtime::{Config, ItemRegistry};
use pricebook_store::ItemStore;

pub fn handle(store: ItemStore, config: &Config, format: OutputFormat) -> Result<()> {
    let mut registry = ItemRegistry::new();
    registry.seed(store.read_all()?);

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "items": registry.items(),
                "total": registry.total(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => print_plain(&registry, config),
    }
    Ok(())
}

fn print_plain(registry: &ItemRegistry, config: &Config) {
    if registry.is_empty() {
        println!("No items yet. Add one with: pricebook add <name> <price>");
        return;
    }

    let colored = std::io::stdout().is_terminal();
    for item in registry.items() {
        let id = format!("{:>4}", item.id);
        let price = config.format_price(item.price);
        if colored {
            println!("  {}  {}  {}", id.dimmed(), item.name, price.bold());
        } else {
            println!("  {}  {}  {}", id, item.name, price);
        }
    }
    println!();
    println!("Total: {}", config.format_price(registry.total()));
}

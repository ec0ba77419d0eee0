use crate::args::OutputFormat;
use anyhow::Result;
use pricebook_runtime::{Config, ItemRegistry};
use pricebook_store::ItemStore;

pub fn handle(store: ItemStore, config: &Config, format: OutputFormat) -> Result<()> {
    let mut registry = ItemRegistry::new();
    registry.seed(store.read_all()?);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "total": registry.total() }))
        }
        OutputFormat::Plain => println!("Total: {}", config.format_price(registry.total())),
    }
    Ok(())
}

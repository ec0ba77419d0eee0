use crate::args::OutputFormat;
use crate::console::ConsoleView;
use anyhow::{Context, Result};
use pricebook_runtime::{Action, Config, Coordinator};
use pricebook_store::ItemStore;
use pricebook_types::ItemId;

pub fn handle(
    store: ItemStore,
    config: &Config,
    id: ItemId,
    name: &str,
    price: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut coordinator = Coordinator::new(store, ConsoleView::new());
    coordinator.bootstrap()?;

    // Selection first, then the new form contents replace the populated ones
    coordinator.dispatch(Action::Edit(id))?;
    coordinator.view_mut().set_input(name, price);
    coordinator.dispatch(Action::SubmitUpdate)?;

    let item = coordinator
        .registry()
        .find(id)
        .context("updated item vanished from the registry")?
        .clone();
    let total = coordinator.registry().total();

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "id": item.id,
                "name": item.name,
                "price": item.price,
                "total": total,
            })
        ),
        OutputFormat::Plain => println!(
            "{} item {}: {} is now {}. Total: {}",
            super::ok_label("Updated"),
            item.id,
            item.name,
            config.format_price(item.price),
            config.format_price(total)
        ),
    }
    Ok(())
}

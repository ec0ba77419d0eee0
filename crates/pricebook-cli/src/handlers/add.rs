use crate::args::OutputFormat;
use crate::console::ConsoleView;
use anyhow::Result;
use pricebook_runtime::{Action, Config, Coordinator};
use pricebook_store::ItemStore;

pub fn handle(
    store: ItemStore,
    config: &Config,
    name: &str,
    price: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut coordinator = Coordinator::new(store, ConsoleView::with_input(name, price));
    coordinator.bootstrap()?;

    let before = coordinator.registry().items().len();
    coordinator.dispatch(Action::SubmitAdd)?;

    match coordinator.registry().items().last() {
        Some(item) if coordinator.registry().items().len() > before => {
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
                    "{} {} for {} (id {}). Total: {}",
                    super::ok_label("Added"),
                    item.name,
                    config.format_price(item.price),
                    item.id,
                    config.format_price(total)
                ),
            }
        }
        // Incomplete form: the coordinator treated the submit as a no-op
        _ => println!("Nothing added: both a name and a price are required"),
    }
    Ok(())
}

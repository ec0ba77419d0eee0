use crate::args::OutputFormat;
use crate::console::ConsoleView;
use anyhow::Result;
use pricebook_runtime::{Action, Config, Coordinator};
use pricebook_store::ItemStore;
use pricebook_types::ItemId;

pub fn handle(store: ItemStore, config: &Config, id: ItemId, format: OutputFormat) -> Result<()> {
    let mut coordinator = Coordinator::new(store, ConsoleView::new());
    coordinator.bootstrap()?;

    // Deleting goes through the same select-then-resolve protocol the
    // interactive editor uses
    coordinator.dispatch(Action::Edit(id))?;
    coordinator.dispatch(Action::SubmitDelete)?;

    let total = coordinator.registry().total();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "removed": id, "total": total }))
        }
        OutputFormat::Plain => println!(
            "{} item {}. Total: {}",
            super::ok_label("Removed"),
            id,
            config.format_price(total)
        ),
    }
    Ok(())
}

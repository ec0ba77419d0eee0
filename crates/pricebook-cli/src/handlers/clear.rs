use crate::args::OutputFormat;
use crate::console::ConsoleView;
use anyhow::Result;
use pricebook_runtime::{Action, Coordinator};
use pricebook_store::ItemStore;

pub fn handle(store: ItemStore, format: OutputFormat) -> Result<()> {
    let mut coordinator = Coordinator::new(store, ConsoleView::new());
    coordinator.bootstrap()?;

    let removed = coordinator.registry().items().len();
    coordinator.dispatch(Action::ClearAll)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "removed": removed, "total": 0 }))
        }
        OutputFormat::Plain => println!(
            "{} {} item(s); the list is now empty",
            super::ok_label("Cleared"),
            removed
        ),
    }
    Ok(())
}

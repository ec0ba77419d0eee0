use crate::tui::TuiView;
use anyhow::Result;
use pricebook_runtime::{Config, Coordinator};
use pricebook_store::ItemStore;

pub fn handle(store: ItemStore, config: &Config) -> Result<()> {
    let view = TuiView::new(config.currency.clone());
    let coordinator = Coordinator::new(store, view);
    crate::tui::run(coordinator)
}

use pricebook_runtime::ListView;
use pricebook_types::{FormInput, Item, ItemId};

/// Buffering [`ListView`] for the one-shot subcommands.
///
/// CLI arguments stand in for the form fields; the projected rows and
/// total are read back by the handler after dispatch and printed once.
#[derive(Debug, Default)]
pub struct ConsoleView {
    input: FormInput,
    rows: Vec<Item>,
    total: i64,
    list_visible: bool,
    messages: Vec<String>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from CLI arguments.
    pub fn with_input(name: &str, price: &str) -> Self {
        Self {
            input: FormInput::new(name, price),
            ..Self::default()
        }
    }

    pub fn set_input(&mut self, name: &str, price: &str) {
        self.input = FormInput::new(name, price);
    }

    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl ListView for ConsoleView {
    fn render_list(&mut self, items: &[Item]) {
        self.rows = items.to_vec();
    }

    fn append_item(&mut self, item: &Item) {
        self.rows.push(item.clone());
    }

    fn replace_item(&mut self, item: &Item) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == item.id) {
            *row = item.clone();
        }
    }

    fn remove_item(&mut self, id: ItemId) {
        self.rows.retain(|row| row.id != id);
    }

    fn form_input(&self) -> FormInput {
        self.input.clone()
    }

    fn clear_form(&mut self) {
        self.input = FormInput::default();
    }

    fn populate_form(&mut self, item: &Item) {
        self.input = FormInput::new(item.name.clone(), item.price.to_string());
    }

    fn show_total(&mut self, total: i64) {
        self.total = total;
    }

    fn set_edit_mode(&mut self, _active: bool) {}

    fn hide_list(&mut self) {
        self.list_visible = false;
    }

    fn show_list(&mut self) {
        self.list_visible = true;
    }

    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

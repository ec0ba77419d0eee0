use pricebook_runtime::ListView;
use pricebook_types::{FormInput, Item, ItemId};

/// Which part of the screen keystrokes go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Name,
    Price,
    List,
}

/// Projection of registry state onto the terminal screen.
///
/// Rows, form fields, total and affordance flags are all fed by the
/// coordinator through [`ListView`]; the cursor and focus are view-local
/// navigation state.
pub(crate) struct TuiView {
    pub rows: Vec<Item>,
    pub name_input: String,
    pub price_input: String,
    pub focus: Focus,
    pub cursor: usize,
    pub total: i64,
    pub edit_mode: bool,
    pub editing_id: Option<ItemId>,
    pub list_visible: bool,
    pub status: Option<String>,
    pub currency: String,
}

impl TuiView {
    pub fn new(currency: String) -> Self {
        Self {
            rows: Vec::new(),
            name_input: String::new(),
            price_input: String::new(),
            focus: Focus::Name,
            cursor: 0,
            total: 0,
            edit_mode: false,
            editing_id: None,
            list_visible: false,
            status: None,
            currency,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Name => Focus::Price,
            Focus::Price => Focus::List,
            Focus::List => Focus::Name,
        };
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Id of the row under the cursor, if any.
    pub fn selected_id(&self) -> Option<ItemId> {
        self.rows.get(self.cursor).map(|item| item.id)
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Focus::Name => self.name_input.push(c),
            Focus::Price => self.price_input.push(c),
            Focus::List => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Name => {
                self.name_input.pop();
            }
            Focus::Price => {
                self.price_input.pop();
            }
            Focus::List => {}
        }
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }
}

impl ListView for TuiView {
    fn render_list(&mut self, items: &[Item]) {
        self.rows = items.to_vec();
        self.clamp_cursor();
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
        self.clamp_cursor();
    }

    fn form_input(&self) -> FormInput {
        FormInput::new(self.name_input.clone(), self.price_input.clone())
    }

    fn clear_form(&mut self) {
        self.name_input.clear();
        self.price_input.clear();
    }

    fn populate_form(&mut self, item: &Item) {
        self.name_input = item.name.clone();
        self.price_input = item.price.to_string();
        self.editing_id = Some(item.id);
        self.focus = Focus::Name;
    }

    fn show_total(&mut self, total: i64) {
        self.total = total;
    }

    fn set_edit_mode(&mut self, active: bool) {
        self.edit_mode = active;
        if !active {
            self.editing_id = None;
        }
    }

    fn hide_list(&mut self) {
        self.list_visible = false;
    }

    fn show_list(&mut self) {
        self.list_visible = true;
    }

    fn show_message(&mut self, message: &str) {
        self.status = Some(message.to_string());
    }
}

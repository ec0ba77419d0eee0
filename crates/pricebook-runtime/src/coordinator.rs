use crate::registry::ItemRegistry;
use crate::view::ListView;
use crate::{Error, Result};
use pricebook_store::ItemStore;
use pricebook_types::ItemId;

/// Discrete user intents the front ends dispatch. The event/key plumbing
/// that produces these is an adapter, not part of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SubmitAdd,
    Edit(ItemId),
    SubmitUpdate,
    SubmitDelete,
    Cancel,
    ClearAll,
}

/// Coordinator modes. Idle exposes the add affordance; Editing exposes
/// update/delete/cancel for the single selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Editing,
}

/// Wires user actions to registry mutations, view updates and persistence
/// writes, in that order, keeping all three consistent after every action.
///
/// The coordinator is the only caller that mutates the registry or the
/// store. Validation failures abort before any mutation and are surfaced
/// through the view; a failure mid-sequence can leave the store one step
/// behind, which is acceptable because the registry re-seeds from the
/// store only at startup.
pub struct Coordinator<V: ListView> {
    registry: ItemRegistry,
    store: ItemStore,
    view: V,
    mode: Mode,
}

impl<V: ListView> Coordinator<V> {
    pub fn new(store: ItemStore, view: V) -> Self {
        Self {
            registry: ItemRegistry::new(),
            store,
            view,
            mode: Mode::Idle,
        }
    }

    /// Seed the registry from the store and render the initial state:
    /// list hidden when empty, total shown, Idle mode.
    pub fn bootstrap(&mut self) -> Result<()> {
        let items = self.store.read_all()?;
        self.registry.seed(items);

        if self.registry.is_empty() {
            self.view.hide_list();
        } else {
            self.view.render_list(self.registry.items());
            self.view.show_list();
        }
        self.view.show_total(self.registry.total());
        self.view.set_edit_mode(false);
        self.mode = Mode::Idle;
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Dispatch one user action. Errors have already been kept away from
    /// registry/view/store state; the caller decides whether to also
    /// surface them outside the view.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let result = match action {
            Action::SubmitAdd => self.submit_add(),
            Action::Edit(id) => self.start_edit(id),
            Action::SubmitUpdate => self.submit_update(),
            Action::SubmitDelete => self.submit_delete(),
            Action::Cancel => self.cancel_edit(),
            Action::ClearAll => self.clear_all(),
        };
        if let Err(err) = &result {
            self.view.show_message(&err.to_string());
        }
        result
    }

    /// Idle → Idle. Permitted only with both form fields non-empty; an
    /// incomplete form is a silent no-op. Order: registry add → view
    /// append → total → store append → clear form.
    fn submit_add(&mut self) -> Result<()> {
        if self.mode != Mode::Idle {
            return Ok(());
        }
        let input = self.view.form_input();
        if input.is_incomplete() {
            return Ok(());
        }

        let item = self.registry.add(&input.name, &input.price)?;

        self.view.append_item(&item);
        self.view.show_list();
        self.view.show_total(self.registry.total());
        self.store.append(&item)?;
        self.view.clear_form();
        Ok(())
    }

    /// Idle → Editing. A second edit activation while already editing
    /// silently replaces the selection and repopulates the form.
    fn start_edit(&mut self, id: ItemId) -> Result<()> {
        let item = self.registry.set_current(id)?.clone();
        self.view.populate_form(&item);
        self.view.set_edit_mode(true);
        self.mode = Mode::Editing;
        Ok(())
    }

    /// Editing → Idle. Price is parsed before the registry mutates, so an
    /// invalid price leaves all three components untouched.
    fn submit_update(&mut self) -> Result<()> {
        if self.mode != Mode::Editing {
            return Err(Error::MissingSelection);
        }
        let input = self.view.form_input();

        let item = self.registry.update(&input.name, &input.price)?;

        self.view.replace_item(&item);
        self.view.show_total(self.registry.total());
        self.store.replace(&item)?;
        self.leave_edit_mode();
        Ok(())
    }

    /// Editing → Idle. Clears the selection with the deletion, so no
    /// dangling reference survives.
    fn submit_delete(&mut self) -> Result<()> {
        let id = self
            .registry
            .current()
            .map(|item| item.id)
            .ok_or(Error::MissingSelection)?;

        self.registry.remove(id);

        self.view.remove_item(id);
        if self.registry.is_empty() {
            self.view.hide_list();
        }
        self.view.show_total(self.registry.total());
        self.store.remove(id)?;
        self.leave_edit_mode();
        Ok(())
    }

    /// Editing → Idle without touching the collection.
    fn cancel_edit(&mut self) -> Result<()> {
        self.registry.clear_current();
        self.leave_edit_mode();
        Ok(())
    }

    /// Idle → Idle bulk clear; ignored while editing.
    fn clear_all(&mut self) -> Result<()> {
        if self.mode != Mode::Idle {
            return Ok(());
        }

        self.registry.clear_all();

        self.view.render_list(&[]);
        self.view.hide_list();
        self.view.show_total(0);
        self.store.clear()?;
        self.view.clear_form();
        Ok(())
    }

    fn leave_edit_mode(&mut self) {
        self.registry.clear_current();
        self.view.clear_form();
        self.view.set_edit_mode(false);
        self.mode = Mode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricebook_store::MemoryBackend;
    use pricebook_types::{FormInput, Item};

    /// Recording view double: keeps the projected rows/total/flags so
    /// tests can assert view/model/store consistency.
    #[derive(Debug, Default)]
    struct TestView {
        rows: Vec<Item>,
        form: FormInput,
        total: i64,
        edit_mode: bool,
        list_visible: bool,
        messages: Vec<String>,
    }

    impl TestView {
        fn type_form(&mut self, name: &str, price: &str) {
            self.form = FormInput::new(name, price);
        }
    }

    impl ListView for TestView {
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

        fn remove_item(&mut self, id: u64) {
            self.rows.retain(|row| row.id != id);
        }

        fn form_input(&self) -> FormInput {
            self.form.clone()
        }

        fn clear_form(&mut self) {
            self.form = FormInput::default();
        }

        fn populate_form(&mut self, item: &Item) {
            self.form = FormInput::new(item.name.clone(), item.price.to_string());
        }

        fn show_total(&mut self, total: i64) {
            self.total = total;
        }

        fn set_edit_mode(&mut self, active: bool) {
            self.edit_mode = active;
        }

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

    fn coordinator() -> Coordinator<TestView> {
        coordinator_with_backend(MemoryBackend::new())
    }

    fn coordinator_with_backend(backend: MemoryBackend) -> Coordinator<TestView> {
        let mut coordinator =
            Coordinator::new(ItemStore::new(Box::new(backend)), TestView::default());
        coordinator.bootstrap().unwrap();
        coordinator
    }

    fn add(coordinator: &mut Coordinator<TestView>, name: &str, price: &str) {
        coordinator.view_mut().type_form(name, price);
        coordinator.dispatch(Action::SubmitAdd).unwrap();
    }

    /// Round-trip law: persisted array equals the in-memory collection.
    fn assert_in_sync(coordinator: &Coordinator<TestView>) {
        let persisted = coordinator.store.read_all().unwrap();
        assert_eq!(persisted, coordinator.registry().items().to_vec());
        assert_eq!(coordinator.view().rows, persisted);
    }

    #[test]
    fn test_add_keeps_registry_view_store_in_sync() {
        let mut coordinator = coordinator();

        add(&mut coordinator, "Tea", "50");
        add(&mut coordinator, "Bread", "100");

        assert_in_sync(&coordinator);
        assert_eq!(coordinator.view().total, 150);
        assert!(coordinator.view().list_visible);
        assert_eq!(coordinator.view().form, FormInput::default());
    }

    #[test]
    fn test_add_with_incomplete_form_is_noop() {
        let mut coordinator = coordinator();

        coordinator.view_mut().type_form("Tea", "");
        coordinator.dispatch(Action::SubmitAdd).unwrap();
        coordinator.view_mut().type_form("", "50");
        coordinator.dispatch(Action::SubmitAdd).unwrap();

        assert!(coordinator.registry().is_empty());
        assert!(coordinator.view().rows.is_empty());
        assert!(!coordinator.store.has_entry().unwrap());
    }

    #[test]
    fn test_add_with_invalid_price_mutates_nothing_and_surfaces_message() {
        let mut coordinator = coordinator();

        coordinator.view_mut().type_form("Tea", "cheap");
        let result = coordinator.dispatch(Action::SubmitAdd);

        assert!(matches!(result, Err(Error::InvalidPrice(_))));
        assert!(coordinator.registry().is_empty());
        assert!(coordinator.view().rows.is_empty());
        assert!(!coordinator.store.has_entry().unwrap());
        assert_eq!(coordinator.view().messages.len(), 1);
    }

    #[test]
    fn test_edit_populates_form_and_enters_edit_mode() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");

        coordinator.dispatch(Action::Edit(0)).unwrap();

        assert_eq!(coordinator.mode(), Mode::Editing);
        assert!(coordinator.view().edit_mode);
        assert_eq!(coordinator.view().form, FormInput::new("Tea", "50"));
    }

    #[test]
    fn test_edit_while_editing_replaces_selection() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");
        add(&mut coordinator, "Bread", "100");

        coordinator.dispatch(Action::Edit(0)).unwrap();
        coordinator.view_mut().type_form("Unsaved", "999");
        coordinator.dispatch(Action::Edit(1)).unwrap();

        // Unsaved form edits are discarded, selection moves on
        assert_eq!(coordinator.mode(), Mode::Editing);
        assert_eq!(coordinator.registry().current().unwrap().id, 1);
        assert_eq!(coordinator.view().form, FormInput::new("Bread", "100"));
    }

    #[test]
    fn test_update_rewrites_row_in_place() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");
        add(&mut coordinator, "Bread", "100");

        coordinator.dispatch(Action::Edit(0)).unwrap();
        coordinator.view_mut().type_form("Coffee", "75");
        coordinator.dispatch(Action::SubmitUpdate).unwrap();

        assert_in_sync(&coordinator);
        assert_eq!(coordinator.view().rows[0], Item::new(0, "Coffee", 75));
        assert_eq!(coordinator.view().total, 175);
        assert_eq!(coordinator.mode(), Mode::Idle);
        assert!(!coordinator.view().edit_mode);
    }

    #[test]
    fn test_update_without_selection_fails_loudly() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");

        let result = coordinator.dispatch(Action::SubmitUpdate);

        assert!(matches!(result, Err(Error::MissingSelection)));
        assert_in_sync(&coordinator);
    }

    #[test]
    fn test_update_with_invalid_price_keeps_editing_state() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");
        coordinator.dispatch(Action::Edit(0)).unwrap();

        coordinator.view_mut().type_form("Tea", "NaN");
        let result = coordinator.dispatch(Action::SubmitUpdate);

        assert!(matches!(result, Err(Error::InvalidPrice(_))));
        assert_eq!(coordinator.registry().items()[0], Item::new(0, "Tea", 50));
        assert_eq!(coordinator.mode(), Mode::Editing);
    }

    #[test]
    fn test_delete_clears_selection_and_syncs() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");
        add(&mut coordinator, "Bread", "100");

        coordinator.dispatch(Action::Edit(1)).unwrap();
        coordinator.dispatch(Action::SubmitDelete).unwrap();

        assert_in_sync(&coordinator);
        assert_eq!(coordinator.view().total, 50);
        assert!(coordinator.registry().current().is_none());
        assert_eq!(coordinator.mode(), Mode::Idle);
    }

    #[test]
    fn test_delete_last_item_hides_list() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");

        coordinator.dispatch(Action::Edit(0)).unwrap();
        coordinator.dispatch(Action::SubmitDelete).unwrap();

        assert!(!coordinator.view().list_visible);
        assert_eq!(coordinator.view().total, 0);
    }

    #[test]
    fn test_cancel_leaves_collection_untouched() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");

        coordinator.dispatch(Action::Edit(0)).unwrap();
        coordinator.view_mut().type_form("Changed", "999");
        coordinator.dispatch(Action::Cancel).unwrap();

        assert_eq!(coordinator.registry().items()[0], Item::new(0, "Tea", 50));
        assert_eq!(coordinator.mode(), Mode::Idle);
        assert_eq!(coordinator.view().form, FormInput::default());
        assert_in_sync(&coordinator);
    }

    #[test]
    fn test_clear_all_removes_store_entry_and_hides_list() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");
        add(&mut coordinator, "Bread", "100");

        coordinator.dispatch(Action::ClearAll).unwrap();

        assert!(coordinator.registry().is_empty());
        assert!(coordinator.view().rows.is_empty());
        assert!(!coordinator.view().list_visible);
        assert_eq!(coordinator.view().total, 0);
        assert!(!coordinator.store.has_entry().unwrap());
    }

    #[test]
    fn test_clear_all_is_ignored_while_editing() {
        let mut coordinator = coordinator();
        add(&mut coordinator, "Tea", "50");
        coordinator.dispatch(Action::Edit(0)).unwrap();

        coordinator.dispatch(Action::ClearAll).unwrap();

        assert_eq!(coordinator.registry().items().len(), 1);
        assert_eq!(coordinator.mode(), Mode::Editing);
    }

    #[test]
    fn test_bootstrap_reseeds_from_persisted_state() {
        let backend = MemoryBackend::new().with_entry("items", r#"[{"id":2,"name":"X","price":9}]"#);
        let mut coordinator = coordinator_with_backend(backend);

        assert_eq!(coordinator.view().total, 9);
        assert!(coordinator.view().list_visible);

        add(&mut coordinator, "Y", "1");

        assert_eq!(coordinator.registry().items()[1].id, 3);
        assert_in_sync(&coordinator);
    }

    #[test]
    fn test_bootstrap_with_corrupt_store_fails() {
        let backend = MemoryBackend::new().with_entry("items", "not json");
        let mut coordinator =
            Coordinator::new(ItemStore::new(Box::new(backend)), TestView::default());

        assert!(matches!(
            coordinator.bootstrap(),
            Err(Error::Store(pricebook_store::Error::Corrupt(_)))
        ));
    }

    /// The full walkthrough: add Tea and Bread, rename Tea to Coffee,
    /// delete Bread, then clear everything.
    #[test]
    fn test_full_session_scenario() {
        let mut coordinator = coordinator();

        add(&mut coordinator, "Tea", "50");
        assert_eq!(coordinator.registry().items()[0].id, 0);
        assert_eq!(coordinator.view().total, 50);
        assert_eq!(coordinator.view().rows.len(), 1);

        add(&mut coordinator, "Bread", "100");
        assert_eq!(coordinator.registry().items()[1].id, 1);
        assert_eq!(coordinator.view().total, 150);

        coordinator.dispatch(Action::Edit(0)).unwrap();
        coordinator.view_mut().type_form("Coffee", "75");
        coordinator.dispatch(Action::SubmitUpdate).unwrap();
        assert_eq!(coordinator.view().total, 175);
        assert_eq!(coordinator.view().rows[0], Item::new(0, "Coffee", 75));

        coordinator.dispatch(Action::Edit(1)).unwrap();
        coordinator.dispatch(Action::SubmitDelete).unwrap();
        assert_eq!(coordinator.view().total, 75);
        assert_eq!(coordinator.view().rows.len(), 1);

        coordinator.dispatch(Action::ClearAll).unwrap();
        assert!(!coordinator.view().list_visible);
        assert_eq!(coordinator.view().total, 0);
        assert!(!coordinator.store.has_entry().unwrap());
        assert_in_sync(&coordinator);
    }
}

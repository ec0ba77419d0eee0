use pricebook_types::{FormInput, Item, ItemId};

/// Rendering capability the coordinator drives.
///
/// A view is a projection of registry state: a row list keyed by item id,
/// a two-field entry form, a running total, and an edit-mode affordance
/// toggle. Implementations hold no authoritative state and every call is
/// idempotent given the same input.
pub trait ListView {
    /// Render the full list from scratch.
    fn render_list(&mut self, items: &[Item]);

    /// Append one row for a newly added item.
    fn append_item(&mut self, item: &Item);

    /// Rewrite the row whose id matches, in place.
    fn replace_item(&mut self, item: &Item);

    /// Drop the row whose id matches.
    fn remove_item(&mut self, id: ItemId);

    /// Current contents of the entry form, unvalidated.
    fn form_input(&self) -> FormInput;

    fn clear_form(&mut self);

    /// Load an item into the form for editing.
    fn populate_form(&mut self, item: &Item);

    fn show_total(&mut self, total: i64);

    /// Toggle between the add affordance (false) and the
    /// update/delete/cancel affordances (true).
    fn set_edit_mode(&mut self, active: bool);

    fn hide_list(&mut self);

    fn show_list(&mut self);

    /// Surface a user-visible message (validation failures and the like).
    fn show_message(&mut self, message: &str);
}

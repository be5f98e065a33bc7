//! Screens: the tab browser, the entry form and the small pickers and dialogs commands open.

mod browse;
mod confirm;
mod entry_form;
mod pick;

pub use browse::{tab_text, BrowseAction, BrowseScreen, BrowseState};
pub use confirm::confirm;
pub use entry_form::{EntryForm, FormOutput};
pub use pick::pick_entry;

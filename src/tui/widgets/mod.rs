//! Building blocks shared by the screens: a text field and a pick list.

mod select_list;
mod text_input;

pub use select_list::{SelectAction, SelectList};
pub use text_input::TextInput;

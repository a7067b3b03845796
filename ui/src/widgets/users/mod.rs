//! Users dashboard widgets.
//!
//! - `panel`: title, "Add member" action and the overall layout
//! - `search`: the debounced search box
//! - `table`: table rendering (columns, header, row, cells)
//! - `pager`: previous/next navigation
//! - `dialogs`: create/update form and delete confirmation

mod dialogs;
mod pager;
mod panel;
mod search;
pub mod table;

pub use panel::users_panel;

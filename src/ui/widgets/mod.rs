//! Reusable UI widgets

mod list_item;
mod list_view;

pub use list_item::ListItem;
pub use list_view::ListView;

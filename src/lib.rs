//! Picklist - selectable list widget for ratatui
//!
//! [`ListView`](ui::widgets::ListView) renders an [`ItemCollection`](list::ItemCollection)
//! as one row per item. Clicking a row highlights it; handing the view a
//! different collection clears the highlight.

pub mod app;
pub mod config;
pub mod constants;
pub mod list;
pub mod ui;
pub mod watch;

pub use list::{Item, ItemCollection, LoadError, ValidationError};
pub use ui::widgets::{ListItem, ListView};

//! Application state management
//!
//! This module contains the core application state and is split into:
//! - `handlers.rs` - Keyboard and mouse input handlers
//! - `messages.rs` - Items watcher message handling

mod handlers;
mod messages;

use std::path::PathBuf;

use crate::list::{ItemCollection, LoadError};
use crate::ui::widgets::ListView;

/// Main application state
#[derive(Debug)]
pub struct App {
    pub view: ListView,
    /// File the items were loaded from, if any
    pub items_path: Option<PathBuf>,
    pub error: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(view: ListView, items_path: Option<PathBuf>) -> Self {
        Self {
            view,
            items_path,
            error: None,
            should_quit: false,
        }
    }

    /// Reload items from the source file, or build a fresh placeholder
    /// collection when there is none. Either way the list gets a new
    /// collection and its selection is cleared.
    pub fn reload_items(&mut self) {
        let loaded = match &self.items_path {
            Some(path) => ItemCollection::load(path),
            None => Ok(ItemCollection::placeholder()),
        };

        match loaded {
            Ok(items) => self.replace_items(items),
            Err(e) => self.show_load_error(e),
        }
    }

    fn replace_items(&mut self, items: ItemCollection) {
        tracing::info!("Replacing list with {} items", items.len());
        self.view.set_items(items);
        self.error = None;
    }

    /// Keep the current list and surface the error in the status line
    fn show_load_error(&mut self, e: LoadError) {
        let message = format!("{:#}", anyhow::Error::new(e));
        tracing::error!("Failed to load items: {}", message);
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reload_without_file_resets_selection() {
        let mut app = App::new(ListView::default(), None);
        app.view.select(3);

        app.reload_items();

        assert_eq!(app.view.selected(), None);
        assert_eq!(app.view.len(), 5);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_reload_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"text": "A"}}, {{"text": "B"}}]"#).unwrap();

        let mut app = App::new(ListView::default(), Some(file.path().to_path_buf()));
        app.view.select(0);
        app.reload_items();

        assert_eq!(app.view.len(), 2);
        assert_eq!(app.view.selected(), None);
    }

    #[test]
    fn test_reload_failure_keeps_list_and_selection() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"text": 1}}]"#).unwrap();

        let mut app = App::new(ListView::default(), Some(file.path().to_path_buf()));
        app.view.select(4);
        app.reload_items();

        assert_eq!(app.view.len(), 5);
        assert_eq!(app.view.selected(), Some(4));
        let error = app.error.unwrap();
        assert!(error.contains("invalid items"));
        assert!(error.contains("item 0 field `text` must be a string"));
    }
}

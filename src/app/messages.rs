//! Watcher message handling for the application

use super::App;
use crate::watch::WatchMessage;

impl App {
    /// Handle messages from the items watcher
    pub fn handle_watch_message(&mut self, msg: WatchMessage) {
        match msg {
            WatchMessage::Replaced(items) => self.replace_items(items),
            WatchMessage::Failed(e) => self.show_load_error(e),
        }
    }
}

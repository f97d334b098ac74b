//! Keyboard and mouse input handlers for the application

use crossterm::event::{KeyCode, MouseEvent};
use ratatui::layout::Rect;

use super::App;
use crate::ui;

impl App {
    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reload_items();
            }
            _ => {}
        }
    }

    /// Handle mouse input; `screen` is the full terminal area
    pub fn handle_mouse(&mut self, event: MouseEvent, screen: Rect) {
        let list_area = ui::list_area(screen);
        if self.view.handle_mouse(event, list_area) {
            if let Some(item) = self.view.selected_item() {
                tracing::info!("Selected {:?}", item.text);
            }
        }
    }
}

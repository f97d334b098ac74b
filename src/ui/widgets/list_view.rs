//! Selectable list widget
//!
//! Owns the selected index for the collection it was given. Rows report
//! clicks through a shared handler; replacing the collection with a
//! different one clears the selection even if the old index would still
//! be valid.

use std::cell::Cell;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::ListItem;
use crate::list::{Item, ItemCollection};
use crate::ui::theme;

#[derive(Debug, Default)]
pub struct ListView {
    items: ItemCollection,
    selected: Cell<Option<usize>>,
    title: Option<String>,
}

impl ListView {
    /// Create a view over `items`, or over the placeholder collection when `None`
    pub fn new(items: Option<ItemCollection>) -> Self {
        Self {
            items: items.unwrap_or_default(),
            selected: Cell::new(None),
            title: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected.get()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected().and_then(|index| self.items.get(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Selection handler shared by every row
    pub fn select(&self, index: usize) {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "Ignoring selection outside the list");
            return;
        }
        tracing::debug!(index, "Row selected");
        self.selected.set(Some(index));
    }

    /// Replace the collection. Returns whether it was a different collection,
    /// in which case the selection was cleared.
    pub fn set_items(&mut self, items: ItemCollection) -> bool {
        if self.items.same_as(&items) {
            return false;
        }

        tracing::debug!(
            previous = ?self.selected(),
            len = items.len(),
            "Items replaced, clearing selection"
        );
        self.items = items;
        self.selected.set(None);
        true
    }

    /// Index of the row drawn at terminal cell (`column`, `row`) when the
    /// view is rendered into `area`
    pub fn row_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let inner = self.block().inner(area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }

        let index = usize::from(row - inner.y);
        (index < self.items.len()).then_some(index)
    }

    /// Route a mouse event to the row under the cursor.
    /// Returns true if the selection changed.
    pub fn handle_mouse(&self, event: MouseEvent, area: Rect) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let Some(index) = self.row_at(area, event.column, event.row) else {
            return false;
        };

        let before = self.selected();
        let on_select = |index: usize| self.select(index);
        if let Some(row) = self.row(index, &on_select) {
            row.click();
        }
        self.selected() != before
    }

    fn row<'a>(&'a self, index: usize, on_select: &'a dyn Fn(usize)) -> Option<ListItem<'a>> {
        let item = self.items.get(index)?;
        Some(ListItem::new(
            index,
            self.selected() == Some(index),
            on_select,
            &item.text,
        ))
    }

    fn block(&self) -> Block<'_> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border());

        match &self.title {
            Some(title) => block.title(Span::styled(title.as_str(), theme::title())),
            None => block,
        }
    }
}

impl Widget for &ListView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let on_select = |index: usize| self.select(index);
        for (index, y) in (0..self.items.len()).zip(inner.top()..inner.bottom()) {
            if let Some(row) = self.row(index, &on_select) {
                row.render(Rect::new(inner.x, y, inner.width, 1), buf);
            }
        }
    }
}

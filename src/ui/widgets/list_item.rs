//! Single selectable row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme;

/// One row of a [`ListView`](super::ListView)
///
/// Pure rendering of its four inputs. Clicking reports the row's index to
/// `on_select`; the row itself holds no state.
pub struct ListItem<'a> {
    index: usize,
    is_selected: bool,
    on_select: &'a dyn Fn(usize),
    text: &'a str,
}

impl<'a> ListItem<'a> {
    pub fn new(
        index: usize,
        is_selected: bool,
        on_select: &'a dyn Fn(usize),
        text: &'a str,
    ) -> Self {
        Self {
            index,
            is_selected,
            on_select,
            text,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Report one interaction with this row
    pub fn click(&self) {
        (self.on_select)(self.index);
    }
}

impl Widget for ListItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let (prefix, style) = if self.is_selected {
            ("> ", theme::selected())
        } else {
            ("  ", theme::unselected())
        };

        buf.set_style(area, style);
        let line = Line::from(vec![Span::styled(prefix, style), Span::styled(self.text, style)]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

//! UI rendering module

mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use layout::{centered_rect, main_layout};

/// Area the list occupies on a screen of size `screen`
pub fn list_area(screen: Rect) -> Rect {
    main_layout(centered_rect(80, 90, screen)).0
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (list, status, footer) = main_layout(centered_rect(80, 90, frame.area()));

    frame.render_widget(&app.view, list);
    draw_status(frame, status, app);
    draw_footer(frame, footer);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = &app.error {
        Line::from(Span::styled(error.as_str(), theme::error()))
    } else if let Some(item) = app.view.selected_item() {
        Line::from(vec![
            Span::styled("Selected: ", theme::dim()),
            Span::styled(item.text.as_str(), theme::title()),
        ])
    } else {
        Line::from(Span::styled("Nothing selected", theme::dim()))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[", theme::dim()),
        Span::styled("Click", theme::key_hint()),
        Span::styled("] Select  [", theme::dim()),
        Span::styled("r", theme::key_hint()),
        Span::styled("] Reload  [", theme::dim()),
        Span::styled("q", theme::key_hint()),
        Span::styled("] Quit", theme::dim()),
    ]);

    let footer = Paragraph::new(hints).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

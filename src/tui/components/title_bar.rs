// Title bar component
//
// Application name on the left, current mode and item counts on the right.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let store = app.controller.store();
    let done = store.iter().filter(|item| item.done).count();

    let summary = format!(
        " {} │ {} items, {} done ",
        app.controller.mode().name(),
        store.len(),
        done
    );

    let title = Paragraph::new(" ✔ todo-tui")
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(summary).right_aligned()),
        );

    f.render_widget(title, area);
}

// Input box component
//
// Shown only while composing; places the terminal cursor inside the buffer.

use crate::controller::Mode;
use crate::tui::app::App;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let Mode::Composing { input } = app.controller.mode() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight))
        .title(" New todo ");

    // Scroll horizontally so the cursor stays visible in long input
    let inner_width = area.width.saturating_sub(2) as usize;
    let column = input.cursor_column();
    let scroll = column.saturating_sub(inner_width.saturating_sub(1));

    let paragraph = Paragraph::new(input.value())
        .style(Style::default().fg(app.theme.foreground))
        .scroll((0, scroll as u16))
        .block(block);
    f.render_widget(paragraph, area);

    f.set_cursor_position(Position::new(
        area.x + 1 + (column - scroll) as u16,
        area.y + 1,
    ));
}

// Screen layout - called on every frame
//
// ┌ title ─────────────────────┐
// │ todo list (fills)          │
// │ input box (composing only) │
// └ status: help + last log ───┘

use super::app::App;
use super::components;
use crate::controller::Mode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let composing = matches!(app.controller.mode(), Mode::Composing { .. });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(if composing { 3 } else { 0 }),
            Constraint::Length(3),
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    components::render_todo_list(f, chunks[1], app);
    if composing {
        components::render_input_box(f, chunks[2], app);
    }
    components::render_status(f, chunks[3], app);

    if let Some(ref toast) = app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }

    app.clear_expired_toast();
}

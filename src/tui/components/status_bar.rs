// Status bar component
//
// Key hints for the current mode, then the most recent captured log line.

use crate::controller::help_text;
use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let help = Line::from(Span::styled(
        format!(" {}", help_text(app.controller.mode())),
        Style::default().fg(theme.help),
    ));

    let mut lines = vec![help];
    if let Some(entry) = app.log_buffer.latest() {
        let color = match entry.level {
            LogLevel::Error => theme.log_error,
            LogLevel::Warn => theme.log_warn,
            LogLevel::Info => theme.log_info,
            LogLevel::Debug | LogLevel::Trace => theme.log_debug,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", entry.timestamp.format("%H:%M:%S")),
                Style::default().fg(theme.log_debug),
            ),
            Span::styled(format!("{:<5} ", entry.level.as_str()), Style::default().fg(color)),
            Span::styled(entry.message, Style::default().fg(theme.foreground)),
        ]));
    }

    let status = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}

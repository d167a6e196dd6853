// Todo list component
//
// Draws the item lines from `render_lines`, styling done items and the
// selection. A `ListState` keeps the selected row scrolled into view.

use crate::controller::{render_lines, Mode, RenderLine};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mode = app.controller.mode();

    let items: Vec<ListItem> = render_lines(mode, app.controller.store())
        .into_iter()
        .filter_map(|line| {
            let style = match &line {
                RenderLine::Item { done: true, .. } => Style::default()
                    .fg(theme.done)
                    .add_modifier(Modifier::CROSSED_OUT),
                RenderLine::Item { .. } => Style::default().fg(theme.foreground),
                RenderLine::Empty => Style::default()
                    .fg(theme.empty)
                    .add_modifier(Modifier::ITALIC),
                // Drawn by the input box and status bar
                RenderLine::Input { .. } | RenderLine::Help(_) => return None,
            };
            Some(ListItem::new(line.to_text()).style(style))
        })
        .collect();

    let (border, selected) = match mode {
        Mode::Selecting { selected } => (theme.highlight, *selected),
        _ => (theme.border, None),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border))
                .title(" Todos "),
        )
        .highlight_style(
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(selected.map(|i| i - 1));
    f.render_stateful_widget(list, area, &mut state);
}

// Plain-text rendering of controller state
//
// `render_lines` is the typed form used by the terminal view for styling;
// `render` flattens it into the multi-line string.

use super::Mode;
use crate::todo::TodoStore;

/// One line of rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderLine {
    Item {
        text: String,
        done: bool,
        /// Only ever true in Selecting mode
        selected: bool,
        /// Whether a selection gutter is drawn in front of the checkbox
        gutter: bool,
    },
    /// Shown instead of items when the store is empty
    Empty,
    /// The compose buffer
    Input { buffer: String },
    Help(&'static str),
}

impl RenderLine {
    pub fn to_text(&self) -> String {
        match self {
            RenderLine::Item {
                text,
                done,
                selected,
                gutter,
            } => {
                let marker = if *done { "[x]" } else { "[ ]" };
                let prefix = match (gutter, selected) {
                    (false, _) => "",
                    (true, true) => "> ",
                    (true, false) => "  ",
                };
                format!("{}{} {}", prefix, marker, text)
            }
            RenderLine::Empty => "(no todos)".to_string(),
            RenderLine::Input { buffer } => format!("New todo: {}", buffer),
            RenderLine::Help(keys) => keys.to_string(),
        }
    }
}

/// Key hints for the given mode
pub fn help_text(mode: &Mode) -> &'static str {
    match mode {
        Mode::Idle => "a: add  l: list  q: quit",
        Mode::Composing { .. } => "enter: save  esc: cancel",
        Mode::Selecting { .. } => "↑/k ↓/j: move  space: toggle  d: delete  esc/q: back",
    }
}

pub fn render_lines(mode: &Mode, store: &TodoStore) -> Vec<RenderLine> {
    let (gutter, selected) = match mode {
        Mode::Selecting { selected } => (true, *selected),
        _ => (false, None),
    };

    let mut lines: Vec<RenderLine> = store
        .iter()
        .enumerate()
        .map(|(i, item)| RenderLine::Item {
            text: item.text.clone(),
            done: item.done,
            selected: selected == Some(i + 1),
            gutter,
        })
        .collect();

    if lines.is_empty() {
        lines.push(RenderLine::Empty);
    }

    if let Mode::Composing { input } = mode {
        lines.push(RenderLine::Input {
            buffer: input.value().to_string(),
        });
    }

    lines.push(RenderLine::Help(help_text(mode)));
    lines
}

/// Render state as plain text, one line per entry
pub fn render(mode: &Mode, store: &TodoStore) -> String {
    render_lines(mode, store)
        .iter()
        .map(RenderLine::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}

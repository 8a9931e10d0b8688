//! Single-screen layout: header, new-task input, task list, status bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Mode};
use super::palette::Palette;
use crate::storage::KvStore;

const TITLE: &str = "📝 My To-Do List";
const PLACEHOLDER: &str = "Add a new task...";
const CURSOR: &str = "_";

/// Draw the whole screen from the current app state
pub fn draw<K: KvStore>(frame: &mut Frame, app: &App<K>) {
    let palette = Palette::for_theme(app.theme().current());
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Tasks
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    draw_header(frame, app, &palette, chunks[0]);
    draw_input(frame, app, &palette, chunks[1]);
    draw_tasks(frame, app, &palette, chunks[2]);
    draw_status_bar(frame, app, &palette, chunks[3]);
}

fn draw_header<K: KvStore>(frame: &mut Frame, app: &App<K>, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border(false))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(20)])
        .split(inner);

    let title = Paragraph::new(TITLE)
        .style(palette.base().add_modifier(Modifier::BOLD));
    frame.render_widget(title, columns[0]);

    let toggle = Paragraph::new(format!("[t] {}", app.theme().toggle_label()))
        .style(palette.base().fg(palette.accent))
        .alignment(Alignment::Right);
    frame.render_widget(toggle, columns[1]);
}

fn draw_input<K: KvStore>(frame: &mut Frame, app: &App<K>, palette: &Palette, area: Rect) {
    let focused = app.mode() == Mode::Input;
    let pending = app.tasks().pending_input();

    let line = if focused {
        Line::from(vec![
            Span::styled(pending.to_string(), palette.base()),
            Span::styled(CURSOR, palette.base().fg(palette.accent)),
        ])
    } else if pending.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, palette.base().fg(palette.muted)))
    } else {
        Line::from(Span::styled(pending.to_string(), palette.base()))
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" New task · [Enter] Add ")
            .borders(Borders::ALL)
            .border_style(palette.border(focused))
            .style(palette.base()),
    );

    frame.render_widget(paragraph, area);
}

fn draw_tasks<K: KvStore>(frame: &mut Frame, app: &App<K>, palette: &Palette, area: Rect) {
    let store = app.tasks();
    let tasks = store.tasks();
    let editing = store.editing_index();
    let focused = app.mode() != Mode::Input;
    let selected = app.selected().min(tasks.len().saturating_sub(1));

    let block = Block::default()
        .title(format!(
            " Tasks ({}/{} done) ",
            store.list().completed_count(),
            tasks.len()
        ))
        .borders(Borders::ALL)
        .border_style(palette.border(focused))
        .style(palette.base());

    if tasks.is_empty() {
        let empty = Paragraph::new("No tasks yet. Press 'i' to add one.")
            .style(palette.base().fg(palette.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            if editing == Some(i) {
                let draft = store
                    .edit_session()
                    .map(|s| s.draft.as_str())
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled("✎ ", palette.base().fg(palette.accent)),
                    Span::styled(draft.to_string(), palette.base()),
                    Span::styled(CURSOR, palette.base().fg(palette.accent)),
                    Span::styled("  [Enter] Save  [Esc] Cancel", palette.base().fg(palette.muted)),
                ]))
            } else {
                let style = if task.completed {
                    palette
                        .base()
                        .fg(palette.done)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    palette.base()
                };
                let mut spans = vec![
                    Span::styled(format!("{} ", task.marker()), palette.base().fg(palette.accent)),
                    Span::styled(task.text.clone(), style),
                ];
                if focused && editing.is_none() && i == selected {
                    spans.push(Span::styled("  [e]dit [d]elete", palette.base().fg(palette.muted)));
                }
                ListItem::new(Line::from(spans))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(if focused { palette.selection } else { palette.background })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status_bar<K: KvStore>(frame: &mut Frame, app: &App<K>, palette: &Palette, area: Rect) {
    let (content, style) = match (app.mode(), app.status_message()) {
        (Mode::Edit, Some(msg)) => (msg.to_string(), palette.base().fg(palette.warning)),
        (_, Some(msg)) => (msg.to_string(), palette.base()),
        (Mode::Browse, None) => (
            "[i]nput [space] toggle [e]dit [d]elete [t]heme [q]uit [?]help".to_string(),
            palette.base(),
        ),
        (Mode::Input, None) => (
            "Typing a new task: [Enter] add  [Esc] back to list".to_string(),
            palette.base().fg(palette.accent),
        ),
        (Mode::Edit, None) => (
            "Editing: [Enter] save  [Esc] cancel".to_string(),
            palette.base().fg(palette.accent),
        ),
    };

    let status_text = format!("tickle [{}] {}", app.theme().data_theme(), content);

    let paragraph = Paragraph::new(status_text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(false))
            .style(palette.base()),
    );

    frame.render_widget(paragraph, area);
}

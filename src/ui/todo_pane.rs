use crate::app::AppState;
use crate::domain::{checkbox, TodoItem};
use crate::ui::styles::{
    border_style, completed_todo_style, default_style, done_style, hint_style, modal_title_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn create_todo_line(item: &TodoItem) -> Line<'static> {
    let (box_style, text_style) = if item.is_completed {
        (done_style(), completed_todo_style())
    } else {
        (default_style(), default_style())
    };

    let stamp = match item.completed_at {
        Some(done) => format!("  done {}", done.format("%H:%M")),
        None => format!("  added {}", item.created_at.format("%H:%M")),
    };

    Line::from(vec![
        Span::styled(format!("{} ", checkbox(item)), box_style),
        Span::styled(item.title.clone(), text_style),
        Span::styled(stamp, hint_style()),
    ])
}

/// Render the to-do list pane
pub fn render_todo_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app.todos.iter().map(|item| ListItem::new(create_todo_line(item))).collect();

    let title = format!(" To-Do List ({} open / {}) ", app.todos.remaining_count(), app.todos.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    let mut state = ListState::default();
    if !app.todos.is_empty() {
        state.select(Some(app.selected_todo));
    }

    f.render_stateful_widget(list, area, &mut state);
}

/// Render the input box for a new to-do
pub fn render_todo_input(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::raw("> "),
        Span::styled(app.todo_input.clone(), modal_title_style()),
        Span::styled("█", modal_title_style()), // Cursor
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Add a new task ", title_style())),
    );

    f.render_widget(paragraph, area);
}

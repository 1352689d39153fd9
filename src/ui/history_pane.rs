use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the completed tasks pane, most recent first
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let labels = app.session.completed_task_labels();

    let items: Vec<ListItem> = labels
        .iter()
        .rev()
        .map(|label| {
            ListItem::new(Line::from(vec![
                Span::styled("✓ ", done_style()),
                Span::styled(label.clone(), default_style()),
            ]))
        })
        .collect();

    let title = format!(" Completed Tasks ({}) ", labels.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

use crate::app::AppState;
use crate::ui::{layout::create_modal_area, styles::celebration_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the short-lived banner shown when the cycle target is reached
pub fn render_celebration(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area, 5);

    // Clear the area behind the banner
    f.render_widget(Clear, modal_area);

    let headline = if app.use_emoji {
        "🎉  Well done!  🎉"
    } else {
        "*  Well done!  *"
    };
    let lines = vec![
        Line::raw(headline),
        Line::raw(format!("All {} cycles complete", app.session.target_cycles())),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(celebration_style()));

    f.render_widget(paragraph, modal_area);
}

use crate::app::AppState;
use crate::domain::{ActiveView, TimerPhase, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current mode and view
pub fn hint_text(app: &AppState) -> &'static str {
    match (app.ui_mode, app.active_view) {
        (UiMode::Setup(_), _) => " Tab next field   ↑/↓ adjust   Enter start   Esc close",
        (UiMode::EnteringNextTask, _) => " Type the next task   Enter add   Esc cancel",
        (UiMode::AddingTodo, _) => " Type a to-do   Enter add   Esc cancel",
        (UiMode::Normal, ActiveView::Timer) if app.session.phase() == TimerPhase::Completed => {
            " n next task   c clear history   a add to-do   Tab to-do list   q quit"
        }
        (UiMode::Normal, ActiveView::Timer) => {
            " Space start/pause   r reset   a add to-do   Tab to-do list   q quit"
        }
        (UiMode::Normal, ActiveView::Todo) => {
            " ↑/↓ select   Space toggle   a add   d delete   x clear done   Tab timer   q quit"
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hint_text(app))).style(hint_style());
    f.render_widget(paragraph, area);
}

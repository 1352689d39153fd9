pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod setup_form;
pub mod styles;
pub mod timer_pane;
pub mod todo_pane;

use crate::app::AppState;
use crate::domain::{ActiveView, UiMode};
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_celebration;
use ratatui::Frame;
use setup_form::render_setup_form;
use std::time::Instant;
use timer_pane::render_timer_pane;
use todo_pane::{render_todo_input, render_todo_pane};

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState, now: Instant) {
    let size = f.size();
    let layout = create_layout(size, app.active_view, app.ui_mode == UiMode::AddingTodo);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    match app.active_view {
        ActiveView::Timer => render_timer_pane(f, app, layout.main_area),
        ActiveView::Todo => render_todo_pane(f, app, layout.main_area),
    }

    if let Some(history_area) = layout.history_area {
        render_history_pane(f, app, history_area);
    }

    if let Some(input_area) = layout.input_area {
        render_todo_input(f, app, input_area);
    }

    // Render setup form if active
    if app.setup_form.is_some() {
        render_setup_form(f, app, size);
        return;
    }

    if app.is_celebrating(now) {
        render_celebration(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::TimerSettings;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &AppState, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app, now)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn create_test_app() -> AppState {
        let mut app = AppState::new(TimerSettings::new(25, 5, 30, 2), Some("Write report".to_string()));
        app.use_emoji = false;
        app
    }

    #[test]
    fn test_render_setup_form() {
        let app = create_test_app();
        let screen = draw(&app, Instant::now());
        assert!(screen.contains("Set Your Focus Session"));
        assert!(screen.contains("Write report"));
    }

    #[test]
    fn test_render_timer_view() {
        let mut app = create_test_app();
        app.submit_setup_form();

        let screen = draw(&app, Instant::now());
        assert!(screen.contains("25:00"));
        assert!(screen.contains("FOCUS"));
        assert!(screen.contains("0/2"));
        assert!(screen.contains("Completed Tasks (0)"));
    }

    #[test]
    fn test_render_completed_with_celebration() {
        let mut app = create_test_app();
        app.submit_setup_form();
        let now = Instant::now();
        for _ in 0..3 {
            if let Some(event) = app.session.complete_phase() {
                app.handle_session_event(event, now);
            }
        }

        let screen = draw(&app, now);
        assert!(screen.contains("COMPLETED"));
        assert!(screen.contains("Well done!"));
        assert!(screen.contains("Completed Tasks (1)"));
    }

    #[test]
    fn test_render_todo_view() {
        let mut app = create_test_app();
        app.submit_setup_form();
        app.todos.add_item("Buy milk");
        let id = app.todos.add_item("Call mom").unwrap();
        app.todos.toggle_completion(id);
        app.toggle_view();

        let screen = draw(&app, Instant::now());
        assert!(screen.contains("[ ] Buy milk"));
        assert!(screen.contains("[x] Call mom"));
        assert!(screen.contains("1 open / 2"));
    }
}

use crate::app::AppState;
use crate::domain::{ActiveView, TimerPhase, UiMode};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Setup(_) => handle_setup_mode(app, key),
        UiMode::EnteringNextTask => handle_next_task_mode(app, key, now),
        UiMode::AddingTodo => handle_todo_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,

        // Switch between timer and to-do list
        KeyCode::Tab => app.toggle_view(),

        // Add to-do (from either view)
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_todo(),

        _ => match app.active_view {
            ActiveView::Timer => handle_timer_keys(app, key),
            ActiveView::Todo => handle_todo_keys(app, key),
        },
    }
    false
}

fn handle_timer_keys(app: &mut AppState, key: KeyEvent) {
    let completed = app.session.phase() == TimerPhase::Completed;

    match key.code {
        // Start/pause
        KeyCode::Char(' ') | KeyCode::Enter if !completed => app.toggle_timer(),

        // Restart the current phase
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),

        // Completion panel actions
        KeyCode::Char('n') | KeyCode::Char('N') if completed => app.start_next_task_entry(),
        KeyCode::Char('c') | KeyCode::Char('C') if completed => app.clear_history(),

        _ => {}
    }
}

fn handle_todo_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_todo(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected_todo(),
        KeyCode::Char('x') | KeyCode::Char('X') => app.clear_completed_todos(),
        _ => {}
    }
}

/// Handle keys while the setup form is open
fn handle_setup_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_setup_form(),
        KeyCode::Esc => app.cancel_setup_form(),
        KeyCode::Tab => app.setup_form_next_field(),

        // Stepper for numeric fields
        KeyCode::Up => app.setup_form_step(1),
        KeyCode::Down => app.setup_form_step(-1),

        KeyCode::Backspace => app.setup_form_backspace(),
        KeyCode::Char(c) => app.setup_form_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while typing the next task on the completion panel
fn handle_next_task_mode(app: &mut AppState, key: KeyEvent, now: Instant) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_next_task(now),
        KeyCode::Esc => app.cancel_next_task_entry(),
        KeyCode::Backspace => app.next_task_backspace(),
        KeyCode::Char(c) => app.next_task_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys while typing a new to-do
fn handle_todo_input_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_todo(),
        KeyCode::Esc => app.cancel_todo_input(),
        KeyCode::Backspace => app.todo_input_backspace(),
        KeyCode::Char(c) => app.todo_input_add_char(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SetupFlow;
    use crate::settings::TimerSettings;
    use crossterm::event::KeyModifiers;

    fn create_test_app() -> AppState {
        let mut app = AppState::new(TimerSettings::new(1, 1, 5, 1), Some("Test task".to_string()));
        app.submit_setup_form();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str, now: Instant) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)), now);
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        let now = Instant::now();
        assert!(handle_key(&mut app, key(KeyCode::Char('q')), now));
        assert!(handle_key(&mut app, key(KeyCode::Esc), now));
    }

    #[test]
    fn test_q_in_text_input_does_not_quit() {
        let mut app = create_test_app();
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('a')), now);
        assert!(!handle_key(&mut app, key(KeyCode::Char('q')), now));
        assert_eq!(app.todo_input, "q");
    }

    #[test]
    fn test_setup_form_keys() {
        let mut app = AppState::new(TimerSettings::default(), None);
        let now = Instant::now();

        type_text(&mut app, "Deep work", now);
        handle_key(&mut app, key(KeyCode::Tab), now);
        handle_key(&mut app, key(KeyCode::Up), now);
        handle_key(&mut app, key(KeyCode::Up), now);
        handle_key(&mut app, key(KeyCode::Enter), now);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.session.current_task_label(), "Deep work");
        assert_eq!(app.session.settings().work_minutes, 27);
    }

    #[test]
    fn test_space_toggles_timer() {
        let mut app = create_test_app();
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Char(' ')), now);
        assert!(app.session.is_running());

        handle_key(&mut app, key(KeyCode::Char(' ')), now);
        assert!(!app.session.is_running());
    }

    #[test]
    fn test_completion_panel_keys() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.session.complete_phase();
        assert_eq!(app.session.phase(), TimerPhase::Completed);

        // Start/pause is unavailable once completed
        handle_key(&mut app, key(KeyCode::Char(' ')), now);
        assert!(!app.session.is_running());

        handle_key(&mut app, key(KeyCode::Char('n')), now);
        assert_eq!(app.ui_mode, UiMode::EnteringNextTask);
        type_text(&mut app, "Next up", now);
        handle_key(&mut app, key(KeyCode::Enter), now);

        assert_eq!(app.ui_mode, UiMode::Setup(SetupFlow::NewTask));
        assert_eq!(app.session.current_task_label(), "Next up");

        // The new-task form starts on durations, so typing goes into minutes
        handle_key(&mut app, key(KeyCode::Backspace), now);
        type_text(&mut app, "2", now);
        handle_key(&mut app, key(KeyCode::Enter), now);
        assert_eq!(app.session.settings().work_minutes, 2);
        assert_eq!(app.session.completed_task_labels().len(), 1);
    }

    #[test]
    fn test_clear_history_key() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.session.complete_phase();

        handle_key(&mut app, key(KeyCode::Char('c')), now);
        assert!(app.session.completed_task_labels().is_empty());
        assert_eq!(app.ui_mode, UiMode::Setup(SetupFlow::Initial));
    }

    #[test]
    fn test_todo_keys() {
        let mut app = create_test_app();
        let now = Instant::now();

        handle_key(&mut app, key(KeyCode::Char('a')), now);
        type_text(&mut app, "Buy milk", now);
        handle_key(&mut app, key(KeyCode::Enter), now);

        handle_key(&mut app, key(KeyCode::Char('a')), now);
        type_text(&mut app, "Call mom", now);
        handle_key(&mut app, key(KeyCode::Enter), now);

        assert_eq!(app.active_view, ActiveView::Todo);
        assert_eq!(app.todos.len(), 2);
        assert_eq!(app.selected_todo, 1);

        handle_key(&mut app, key(KeyCode::Up), now);
        handle_key(&mut app, key(KeyCode::Char(' ')), now);
        assert!(app.todos.items()[0].is_completed);

        handle_key(&mut app, key(KeyCode::Char('d')), now);
        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.todos.items()[0].title, "Call mom");

        handle_key(&mut app, key(KeyCode::Tab), now);
        assert_eq!(app.active_view, ActiveView::Timer);
    }
}

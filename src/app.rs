use crate::domain::{ActiveView, PomodoroSession, SessionEvent, SetupFlow, TimerPhase, TodoList, UiMode};
use crate::settings::{
    parse_or, TimerSettings, DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES, DEFAULT_TARGET_CYCLES,
    DEFAULT_WORK_MINUTES, LONG_BREAK_MINUTES_RANGE, SHORT_BREAK_MINUTES_RANGE, TARGET_CYCLES_RANGE,
    WORK_MINUTES_RANGE,
};
use log::debug;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// How long the celebration banner stays up
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(2);

/// A field of the setup form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Title,
    WorkMinutes,
    ShortBreakMinutes,
    LongBreakMinutes,
    TargetCycles,
}

impl SetupField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "What are you working on?",
            Self::WorkMinutes => "Focus minutes",
            Self::ShortBreakMinutes => "Short break",
            Self::LongBreakMinutes => "Long break",
            Self::TargetCycles => "Target cycles",
        }
    }

    /// Valid range and default for numeric fields
    fn bounds(&self) -> Option<(RangeInclusive<u32>, u32)> {
        match self {
            Self::Title => None,
            Self::WorkMinutes => Some((WORK_MINUTES_RANGE, DEFAULT_WORK_MINUTES)),
            Self::ShortBreakMinutes => Some((SHORT_BREAK_MINUTES_RANGE, DEFAULT_SHORT_BREAK_MINUTES)),
            Self::LongBreakMinutes => Some((LONG_BREAK_MINUTES_RANGE, DEFAULT_LONG_BREAK_MINUTES)),
            Self::TargetCycles => Some((TARGET_CYCLES_RANGE, DEFAULT_TARGET_CYCLES)),
        }
    }
}

const INITIAL_FIELDS: &[SetupField] = &[
    SetupField::Title,
    SetupField::WorkMinutes,
    SetupField::ShortBreakMinutes,
    SetupField::LongBreakMinutes,
    SetupField::TargetCycles,
];

// The new-task flow skips the title: it was typed on the completion panel
const NEW_TASK_FIELDS: &[SetupField] = &[
    SetupField::WorkMinutes,
    SetupField::ShortBreakMinutes,
    SetupField::LongBreakMinutes,
    SetupField::TargetCycles,
];

/// Setup form state for configuring a session
#[derive(Debug, Clone)]
pub struct SetupFormState {
    pub flow: SetupFlow,
    pub title: String,
    pub work_minutes: String,
    pub short_break_minutes: String,
    pub long_break_minutes: String,
    pub target_cycles: String,
    pub editing_field: usize, // Index into fields()
}

impl SetupFormState {
    /// Pre-fill the form from the session's current configuration
    pub fn new(flow: SetupFlow, session: &PomodoroSession) -> Self {
        let settings = session.settings();
        Self {
            flow,
            title: session.current_task_label().to_string(),
            work_minutes: settings.work_minutes.to_string(),
            short_break_minutes: settings.short_break_minutes.to_string(),
            long_break_minutes: settings.long_break_minutes.to_string(),
            target_cycles: settings.target_cycles.to_string(),
            editing_field: 0,
        }
    }

    pub fn fields(&self) -> &'static [SetupField] {
        match self.flow {
            SetupFlow::Initial => INITIAL_FIELDS,
            SetupFlow::NewTask => NEW_TASK_FIELDS,
        }
    }

    pub fn current_field(&self) -> SetupField {
        let fields = self.fields();
        fields[self.editing_field % fields.len()]
    }

    pub fn value(&self, field: SetupField) -> &str {
        match field {
            SetupField::Title => &self.title,
            SetupField::WorkMinutes => &self.work_minutes,
            SetupField::ShortBreakMinutes => &self.short_break_minutes,
            SetupField::LongBreakMinutes => &self.long_break_minutes,
            SetupField::TargetCycles => &self.target_cycles,
        }
    }

    fn value_mut(&mut self, field: SetupField) -> &mut String {
        match field {
            SetupField::Title => &mut self.title,
            SetupField::WorkMinutes => &mut self.work_minutes,
            SetupField::ShortBreakMinutes => &mut self.short_break_minutes,
            SetupField::LongBreakMinutes => &mut self.long_break_minutes,
            SetupField::TargetCycles => &mut self.target_cycles,
        }
    }

    pub fn next_field(&mut self) {
        self.editing_field = (self.editing_field + 1) % self.fields().len();
    }

    pub fn add_char(&mut self, c: char) {
        let field = self.current_field();
        // Numeric fields behave like a number pad
        if field != SetupField::Title && !c.is_ascii_digit() {
            return;
        }
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.current_field();
        self.value_mut(field).pop();
    }

    /// Step a numeric field up or down, staying within its range
    pub fn step(&mut self, delta: i32) {
        let field = self.current_field();
        let Some((range, default)) = field.bounds() else {
            return;
        };

        let current = parse_or(self.value(field), default);
        let stepped = (current as i64 + delta as i64).clamp(*range.start() as i64, *range.end() as i64);
        *self.value_mut(field) = stepped.to_string();
    }

    /// The first setup needs a task title
    pub fn can_submit(&self) -> bool {
        match self.flow {
            SetupFlow::Initial => !self.title.trim().is_empty(),
            SetupFlow::NewTask => true,
        }
    }

    pub fn to_settings(&self) -> TimerSettings {
        TimerSettings::parse(
            &self.work_minutes,
            &self.short_break_minutes,
            &self.long_break_minutes,
            &self.target_cycles,
        )
    }
}

/// Main application state
pub struct AppState {
    pub session: PomodoroSession,
    pub todos: TodoList,
    pub ui_mode: UiMode,
    pub active_view: ActiveView,
    pub setup_form: Option<SetupFormState>,
    pub todo_input: String,
    pub selected_todo: usize,
    pub celebration_until: Option<Instant>,
    pub use_emoji: bool,
}

impl AppState {
    /// Create the app with the setup form open, as on first launch
    pub fn new(settings: TimerSettings, initial_task: Option<String>) -> Self {
        let mut app = Self {
            session: PomodoroSession::new(settings),
            todos: TodoList::new(),
            ui_mode: UiMode::Normal,
            active_view: ActiveView::Timer,
            setup_form: None,
            todo_input: String::new(),
            selected_todo: 0,
            celebration_until: None,
            use_emoji: true,
        };

        app.open_setup(SetupFlow::Initial);
        if let (Some(form), Some(task)) = (app.setup_form.as_mut(), initial_task) {
            form.title = task;
        }
        app
    }

    /// Switch between the timer and the to-do list
    pub fn toggle_view(&mut self) {
        self.active_view = self.active_view.toggled();
    }

    // ---- Session configuration ----

    pub fn open_setup(&mut self, flow: SetupFlow) {
        self.session.pause();
        self.setup_form = Some(SetupFormState::new(flow, &self.session));
        self.ui_mode = UiMode::Setup(flow);
        self.active_view = ActiveView::Timer;
    }

    pub fn setup_form_next_field(&mut self) {
        if let Some(form) = &mut self.setup_form {
            form.next_field();
        }
    }

    pub fn setup_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.setup_form {
            form.add_char(c);
        }
    }

    pub fn setup_form_backspace(&mut self) {
        if let Some(form) = &mut self.setup_form {
            form.backspace();
        }
    }

    pub fn setup_form_step(&mut self, delta: i32) {
        if let Some(form) = &mut self.setup_form {
            form.step(delta);
        }
    }

    /// Apply the setup form to the session and close it
    pub fn submit_setup_form(&mut self) {
        let Some(form) = &self.setup_form else {
            return;
        };
        if !form.can_submit() {
            return;
        }

        let settings = form.to_settings();
        let label = match form.flow {
            SetupFlow::Initial => form.title.trim().to_string(),
            SetupFlow::NewTask => self.session.current_task_label().to_string(),
        };

        self.session.configure(settings, &label);
        self.close_setup_form();
    }

    pub fn cancel_setup_form(&mut self) {
        self.close_setup_form();
    }

    fn close_setup_form(&mut self) {
        self.setup_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- Timer controls ----

    pub fn toggle_timer(&mut self) {
        self.session.toggle();
    }

    pub fn reset_timer(&mut self) {
        self.session.reset();
    }

    /// Forward one tick to the session
    pub fn tick(&mut self, now: Instant) {
        if let Some(event) = self.session.tick() {
            self.handle_session_event(event, now);
        }
    }

    /// React to a one-shot signal from the session
    pub fn handle_session_event(&mut self, event: SessionEvent, now: Instant) {
        debug!("session event: {:?}", event);
        match event {
            SessionEvent::Celebrate => {
                self.celebration_until = Some(now + CELEBRATION_DURATION);
                self.active_view = ActiveView::Timer;
            }
            SessionEvent::Reconfigure => self.open_setup(SetupFlow::NewTask),
        }
    }

    pub fn is_celebrating(&self, now: Instant) -> bool {
        self.celebration_until.is_some_and(|until| now < until)
    }

    /// Drop the celebration banner once it has been shown long enough
    pub fn expire_celebration(&mut self, now: Instant) {
        if !self.is_celebrating(now) {
            self.celebration_until = None;
        }
    }

    // ---- Completion panel ----

    /// Start typing the next task (only once all cycles are done)
    pub fn start_next_task_entry(&mut self) {
        if self.session.phase() == TimerPhase::Completed {
            self.ui_mode = UiMode::EnteringNextTask;
        }
    }

    pub fn next_task_add_char(&mut self, c: char) {
        let mut label = self.session.pending_label().to_string();
        label.push(c);
        self.session.set_pending_label(&label);
    }

    pub fn next_task_backspace(&mut self) {
        let mut label = self.session.pending_label().to_string();
        label.pop();
        self.session.set_pending_label(&label);
    }

    /// Start the typed next task. Does nothing while the label is empty.
    pub fn submit_next_task(&mut self, now: Instant) {
        if let Some(event) = self.session.start_pending_task() {
            self.handle_session_event(event, now);
        }
    }

    pub fn cancel_next_task_entry(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Forget completed tasks and go back to the first setup
    pub fn clear_history(&mut self) {
        self.session.clear_history();
        self.celebration_until = None;
        self.open_setup(SetupFlow::Initial);
    }

    // ---- To-do list ----

    pub fn start_add_todo(&mut self) {
        self.todo_input.clear();
        self.ui_mode = UiMode::AddingTodo;
        self.active_view = ActiveView::Todo;
    }

    pub fn todo_input_add_char(&mut self, c: char) {
        self.todo_input.push(c);
    }

    pub fn todo_input_backspace(&mut self) {
        self.todo_input.pop();
    }

    /// Add the typed to-do and select it
    pub fn submit_todo(&mut self) {
        let title = std::mem::take(&mut self.todo_input);
        if self.todos.add_item(&title).is_some() {
            self.selected_todo = self.todos.len() - 1;
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_todo_input(&mut self) {
        self.todo_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn move_selection_up(&mut self) {
        self.selected_todo = self.selected_todo.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_todo + 1 < self.todos.len() {
            self.selected_todo += 1;
        }
    }

    pub fn toggle_selected_todo(&mut self) {
        if let Some(id) = self.todos.items().get(self.selected_todo).map(|item| item.id) {
            self.todos.toggle_completion(id);
        }
    }

    /// Remove every checked-off to-do
    pub fn clear_completed_todos(&mut self) {
        let done: Vec<_> = self.todos.iter().filter(|item| item.is_completed).map(|item| item.id).collect();
        self.todos.delete_items(&done);
        self.selected_todo = self.selected_todo.min(self.todos.len().saturating_sub(1));
    }

    pub fn delete_selected_todo(&mut self) {
        if self.todos.delete_at_offsets(&[self.selected_todo]) > 0 {
            // Keep selection within bounds
            if self.selected_todo >= self.todos.len() && self.selected_todo > 0 {
                self.selected_todo -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        let mut app = AppState::new(TimerSettings::new(1, 1, 5, 2), Some("Write report".to_string()));
        app.submit_setup_form();
        app
    }

    fn finish_phase(app: &mut AppState, now: Instant) {
        let phase = app.session.phase();
        while app.session.phase() == phase {
            app.tick(now);
        }
    }

    #[test]
    fn test_app_state_new_opens_initial_setup() {
        let app = AppState::new(TimerSettings::default(), None);
        assert_eq!(app.ui_mode, UiMode::Setup(SetupFlow::Initial));
        let form = app.setup_form.as_ref().unwrap();
        assert_eq!(form.current_field(), SetupField::Title);
        assert_eq!(form.work_minutes, "25");
        assert!(!form.can_submit());
    }

    #[test]
    fn test_initial_setup_requires_title() {
        let mut app = AppState::new(TimerSettings::default(), None);
        app.submit_setup_form();
        assert!(app.setup_form.is_some());

        for c in "Plan".chars() {
            app.setup_form_add_char(c);
        }
        app.submit_setup_form();
        assert!(app.setup_form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.session.current_task_label(), "Plan");
    }

    #[test]
    fn test_setup_form_editing() {
        let mut app = AppState::new(TimerSettings::default(), Some("Plan".to_string()));

        // Move to work minutes, retype it
        app.setup_form_next_field();
        app.setup_form_backspace();
        app.setup_form_backspace();
        app.setup_form_add_char('x');
        app.setup_form_add_char('5');
        app.setup_form_add_char('0');
        assert_eq!(app.setup_form.as_ref().unwrap().work_minutes, "50");

        // Short break: step past the upper bound
        app.setup_form_next_field();
        for _ in 0..20 {
            app.setup_form_step(1);
        }
        assert_eq!(app.setup_form.as_ref().unwrap().short_break_minutes, "15");

        app.submit_setup_form();
        assert_eq!(app.session.settings().work_minutes, 50);
        assert_eq!(app.session.settings().short_break_minutes, 15);
        assert_eq!(app.session.seconds_remaining(), 50 * 60);
    }

    #[test]
    fn test_oversized_numeric_field_is_clamped() {
        let mut app = AppState::new(TimerSettings::default(), Some("Plan".to_string()));
        app.setup_form_next_field();
        for c in "99999999999".chars() {
            app.setup_form_add_char(c);
        }
        app.setup_form_next_field();
        app.setup_form_next_field();
        app.setup_form_next_field();
        for c in "99999999999".chars() {
            app.setup_form_add_char(c);
        }
        app.setup_form_step(-1);
        assert_eq!(app.setup_form.as_ref().unwrap().target_cycles, "10");

        app.submit_setup_form();
        assert_eq!(app.session.settings().work_minutes, 60);
        assert_eq!(app.session.settings().target_cycles, 10);
    }

    #[test]
    fn test_empty_numeric_field_uses_default() {
        let mut app = AppState::new(TimerSettings::new(10, 2, 10, 3), Some("Plan".to_string()));
        app.setup_form_next_field();
        app.setup_form_backspace();
        app.setup_form_backspace();
        app.submit_setup_form();
        assert_eq!(app.session.settings().work_minutes, 25);
    }

    #[test]
    fn test_toggle_and_reset_timer() {
        let mut app = create_test_app();
        let now = Instant::now();

        app.toggle_timer();
        assert!(app.session.is_running());
        app.tick(now);
        assert_eq!(app.session.seconds_remaining(), 59);

        app.reset_timer();
        assert_eq!(app.session.seconds_remaining(), 60);

        app.toggle_timer();
        app.tick(now);
        assert_eq!(app.session.seconds_remaining(), 60);
    }

    #[test]
    fn test_completion_celebrates_then_expires() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.toggle_timer();

        finish_phase(&mut app, now);
        finish_phase(&mut app, now);
        finish_phase(&mut app, now);

        assert_eq!(app.session.phase(), TimerPhase::Completed);
        assert!(app.is_celebrating(now));
        assert_eq!(app.session.completed_task_labels().to_vec(), vec!["Write report".to_string()]);

        let later = now + CELEBRATION_DURATION;
        app.expire_celebration(later);
        assert!(!app.is_celebrating(later));
        assert_eq!(app.celebration_until, None);
    }

    #[test]
    fn test_next_task_flow() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.session.complete_phase();
        app.session.complete_phase();
        app.session.complete_phase();

        app.start_next_task_entry();
        assert_eq!(app.ui_mode, UiMode::EnteringNextTask);

        // Empty label does nothing
        app.submit_next_task(now);
        assert_eq!(app.session.phase(), TimerPhase::Completed);

        for c in "Review".chars() {
            app.next_task_add_char(c);
        }
        app.next_task_backspace();
        app.submit_next_task(now);

        assert_eq!(app.session.phase(), TimerPhase::Work);
        assert_eq!(app.session.current_task_label(), "Revie");
        assert_eq!(app.session.completed_cycles(), 0);
        assert_eq!(app.ui_mode, UiMode::Setup(SetupFlow::NewTask));

        let form = app.setup_form.as_ref().unwrap();
        assert_eq!(form.current_field(), SetupField::WorkMinutes);

        app.submit_setup_form();
        assert_eq!(app.session.current_task_label(), "Revie");
        assert_eq!(app.session.completed_task_labels().len(), 1);
    }

    #[test]
    fn test_next_task_entry_only_when_completed() {
        let mut app = create_test_app();
        app.start_next_task_entry();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_clear_history() {
        let mut app = create_test_app();
        app.session.complete_phase();
        app.session.complete_phase();
        app.session.complete_phase();

        app.clear_history();
        assert!(app.session.completed_task_labels().is_empty());
        assert_eq!(app.session.completed_cycles(), 0);
        assert_eq!(app.ui_mode, UiMode::Setup(SetupFlow::Initial));
    }

    #[test]
    fn test_add_and_toggle_todo() {
        let mut app = create_test_app();
        app.start_add_todo();
        assert_eq!(app.active_view, ActiveView::Todo);

        for c in "Buy milk".chars() {
            app.todo_input_add_char(c);
        }
        app.submit_todo();
        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.toggle_selected_todo();
        assert!(app.todos.items()[0].is_completed);
        app.toggle_selected_todo();
        assert!(!app.todos.items()[0].is_completed);
    }

    #[test]
    fn test_submit_empty_todo() {
        let mut app = create_test_app();
        app.start_add_todo();
        app.submit_todo();
        assert!(app.todos.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_selected_todo() {
        let mut app = create_test_app();
        for title in ["A", "B", "C"] {
            app.todos.add_item(title);
        }

        app.move_selection_down();
        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_todo, 2);

        app.delete_selected_todo();
        assert_eq!(app.selected_todo, 1);

        app.move_selection_up();
        app.delete_selected_todo();
        let titles: Vec<_> = app.todos.iter().map(|item| item.title.clone()).collect();
        assert_eq!(titles, vec!["B".to_string()]);
        assert_eq!(app.selected_todo, 0);
    }

    #[test]
    fn test_clear_completed_todos() {
        let mut app = create_test_app();
        for title in ["A", "B", "C"] {
            app.todos.add_item(title);
        }
        app.selected_todo = 2;
        app.toggle_selected_todo();
        app.selected_todo = 0;
        app.toggle_selected_todo();

        app.clear_completed_todos();
        let titles: Vec<_> = app.todos.iter().map(|item| item.title.clone()).collect();
        assert_eq!(titles, vec!["B".to_string()]);
        assert_eq!(app.selected_todo, 0);
    }
}

pub mod enums;
pub mod session;
pub mod todo;
pub mod views;

pub use enums::{ActiveView, SessionEvent, SetupFlow, TimerPhase, UiMode};
pub use session::PomodoroSession;
pub use todo::{TodoItem, TodoList};
pub use views::{checkbox, cycle_label, format_clock, phase_badge, running_hint};

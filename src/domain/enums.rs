use serde::{Deserialize, Serialize};

/// Phase of a focus session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerPhase {
    Work,
    ShortBreak,
    LongBreak,
    Completed,
}

impl TimerPhase {
    /// Caption shown under the countdown
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Work => "FOCUS",
            Self::ShortBreak | Self::LongBreak => "BREAK",
            Self::Completed => "COMPLETED",
        }
    }

    /// Display name of the phase
    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::ShortBreak => "Short break",
            Self::LongBreak => "Long break",
            Self::Completed => "Completed",
        }
    }
}

/// One-shot signals from the session to whatever is rendering it.
/// Dropping one has no effect on session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The target number of cycles was reached
    Celebrate,
    /// A new task was started; the configuration flow should be shown again
    Reconfigure,
}

/// Which configuration form is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFlow {
    /// First setup: asks for the task title as well as durations
    Initial,
    /// After completing a task: only durations and cycles are editable
    NewTask,
}

/// Top-level view of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Timer,
    Todo,
}

impl ActiveView {
    pub fn toggled(self) -> Self {
        match self {
            Self::Timer => Self::Todo,
            Self::Todo => Self::Timer,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Setup(SetupFlow),
    EnteringNextTask,
    AddingTodo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_caption() {
        assert_eq!(TimerPhase::Work.caption(), "FOCUS");
        assert_eq!(TimerPhase::ShortBreak.caption(), "BREAK");
        assert_eq!(TimerPhase::LongBreak.caption(), "BREAK");
        assert_eq!(TimerPhase::Completed.caption(), "COMPLETED");
    }

    #[test]
    fn test_active_view_toggled() {
        assert_eq!(ActiveView::Timer.toggled(), ActiveView::Todo);
        assert_eq!(ActiveView::Todo.toggled(), ActiveView::Timer);
    }
}

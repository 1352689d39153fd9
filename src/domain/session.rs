use super::enums::{SessionEvent, TimerPhase};
use crate::settings::TimerSettings;
use log::{debug, info};

/// Every fourth completed work phase is followed by a long break
const CYCLES_PER_LONG_BREAK: u32 = 4;

/// A Pomodoro focus session.
///
/// The countdown is a plain counter driven by an external one-second tick;
/// the session knows nothing about wall-clock time.
#[derive(Debug, Clone)]
pub struct PomodoroSession {
    phase: TimerPhase,
    seconds_remaining: u32,
    is_running: bool,
    completed_cycles: u32,
    settings: TimerSettings,
    current_task_label: String,
    completed_task_labels: Vec<String>,
    /// Label typed for the next task while the session is completed
    pending_label: String,
}

impl Default for PomodoroSession {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

impl PomodoroSession {
    pub fn new(settings: TimerSettings) -> Self {
        let settings = settings.clamped();
        Self {
            phase: TimerPhase::Work,
            seconds_remaining: settings.duration_secs(TimerPhase::Work),
            is_running: false,
            completed_cycles: 0,
            settings,
            current_task_label: String::new(),
            completed_task_labels: Vec::new(),
            pending_label: String::new(),
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    pub fn target_cycles(&self) -> u32 {
        self.settings.target_cycles
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn current_task_label(&self) -> &str {
        &self.current_task_label
    }

    /// Labels of finished tasks, oldest first
    pub fn completed_task_labels(&self) -> &[String] {
        &self.completed_task_labels
    }

    pub fn pending_label(&self) -> &str {
        &self.pending_label
    }

    pub fn set_pending_label(&mut self, label: &str) {
        self.pending_label = label.to_string();
    }

    /// Length of the given phase in seconds under the current settings
    pub fn duration_for(&self, phase: TimerPhase) -> u32 {
        self.settings.duration_secs(phase)
    }

    /// Apply new durations, cycle target and task label.
    ///
    /// Only allowed while the countdown is stopped and the session is not
    /// completed. Returns whether the configuration was applied.
    pub fn configure(&mut self, settings: TimerSettings, task_label: &str) -> bool {
        if self.is_running || self.phase == TimerPhase::Completed {
            return false;
        }

        let mut settings = settings.clamped();
        // Keep completed_cycles < target_cycles while not completed
        if settings.target_cycles <= self.completed_cycles {
            settings.target_cycles = self.completed_cycles + 1;
        }

        self.settings = settings;
        self.current_task_label = task_label.to_string();
        self.seconds_remaining = self.duration_for(self.phase);
        debug!("session configured: {:?}, task {:?}", self.settings, self.current_task_label);
        true
    }

    /// Start the countdown. No-op when already running or completed.
    pub fn start(&mut self) -> bool {
        if self.is_running || self.phase == TimerPhase::Completed {
            return false;
        }
        self.is_running = true;
        true
    }

    /// Pause the countdown. No-op when not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.is_running = false;
        true
    }

    /// Toggle between running and paused
    pub fn toggle(&mut self) -> bool {
        if self.is_running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Once the countdown has reached zero the next tick completes the phase.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        if !self.is_running {
            return None;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
            None
        } else {
            self.complete_phase()
        }
    }

    /// Finish the current phase and move on to the next one.
    ///
    /// Returns `SessionEvent::Celebrate` when this reaches the cycle target.
    pub fn complete_phase(&mut self) -> Option<SessionEvent> {
        let previous = self.phase;

        match self.phase {
            TimerPhase::Work => {
                self.completed_cycles += 1;
                let target = self.settings.target_cycles;

                if !self.current_task_label.is_empty() && self.completed_cycles == target {
                    // A label already anywhere in history is not recorded twice
                    if !self.completed_task_labels.contains(&self.current_task_label) {
                        self.completed_task_labels.push(self.current_task_label.clone());
                    }
                    self.current_task_label.clear();
                }

                if self.completed_cycles < target {
                    self.phase = if self.completed_cycles % CYCLES_PER_LONG_BREAK == 0 {
                        TimerPhase::LongBreak
                    } else {
                        TimerPhase::ShortBreak
                    };
                }
            }
            TimerPhase::ShortBreak | TimerPhase::LongBreak => {
                self.phase = TimerPhase::Work;
            }
            TimerPhase::Completed => return None,
        }

        // Next phase starts on its own
        self.seconds_remaining = self.duration_for(self.phase);
        self.is_running = true;

        if self.completed_cycles >= self.settings.target_cycles {
            self.phase = TimerPhase::Completed;
            self.seconds_remaining = 0;
            self.is_running = false;
            info!(
                "cycle target reached: {}/{}",
                self.completed_cycles, self.settings.target_cycles
            );
            return Some(SessionEvent::Celebrate);
        }

        debug!(
            "phase {:?} -> {:?} (cycles {}/{})",
            previous, self.phase, self.completed_cycles, self.settings.target_cycles
        );
        None
    }

    /// Restart the countdown of the current phase. No-op when completed.
    pub fn reset(&mut self) -> bool {
        if self.phase == TimerPhase::Completed {
            return false;
        }
        self.seconds_remaining = self.duration_for(self.phase);
        true
    }

    /// Begin a fresh run of cycles for a new task, keeping the history
    #[must_use]
    pub fn start_new_task(&mut self, label: &str) -> SessionEvent {
        self.current_task_label = label.to_string();
        self.pending_label.clear();
        self.completed_cycles = 0;
        self.phase = TimerPhase::Work;
        self.seconds_remaining = self.duration_for(self.phase);
        self.is_running = false;
        info!("new task started: {:?}", self.current_task_label);
        SessionEvent::Reconfigure
    }

    /// Start a new task from the pending label. No-op while the label is empty.
    pub fn start_pending_task(&mut self) -> Option<SessionEvent> {
        if self.pending_label.is_empty() {
            return None;
        }
        let label = std::mem::take(&mut self.pending_label);
        Some(self.start_new_task(&label))
    }

    /// Drop the task history and go back to a fresh session
    pub fn clear_history(&mut self) {
        self.current_task_label.clear();
        self.pending_label.clear();
        self.completed_task_labels.clear();
        self.completed_cycles = 0;
        self.phase = TimerPhase::Work;
        self.seconds_remaining = self.duration_for(self.phase);
        self.is_running = false;
        info!("task history cleared");
    }

    /// Fraction of the current phase already elapsed (0.0 to 1.0)
    pub fn phase_progress(&self) -> f64 {
        let total = self.duration_for(self.phase);
        if total == 0 {
            return 1.0;
        }
        1.0 - self.seconds_remaining as f64 / total as f64
    }

    /// Fraction of the cycle target already completed (0.0 to 1.0)
    pub fn cycle_progress(&self) -> f64 {
        self.completed_cycles as f64 / self.settings.target_cycles as f64
    }
}

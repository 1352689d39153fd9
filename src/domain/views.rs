use super::enums::TimerPhase;
use super::todo::TodoItem;

/// Format a countdown as "m:ss" (e.g. "25:00", "4:07")
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Cycle counter label, e.g. "2/4"
pub fn cycle_label(completed: u32, target: u32) -> String {
    format!("{}/{}", completed, target)
}

/// Checkbox glyph for a to-do item
pub fn checkbox(item: &TodoItem) -> &'static str {
    if item.is_completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Phase badge shown next to the countdown
pub fn phase_badge(phase: TimerPhase, use_emoji: bool) -> &'static str {
    if use_emoji {
        match phase {
            TimerPhase::Work => "🍅",
            TimerPhase::ShortBreak => "☕",
            TimerPhase::LongBreak => "🌴",
            TimerPhase::Completed => "🎉",
        }
    } else {
        match phase {
            TimerPhase::Work => "*",
            TimerPhase::ShortBreak => "~",
            TimerPhase::LongBreak => "=",
            TimerPhase::Completed => "!",
        }
    }
}

/// Hint line under the countdown
pub fn running_hint(phase: TimerPhase, is_running: bool) -> &'static str {
    match (phase, is_running) {
        (TimerPhase::Completed, _) => "All cycles done",
        (_, true) => "running",
        (_, false) => "paused",
    }
}

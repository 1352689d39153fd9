use crate::domain::TimerPhase;
use ratatui::style::{Color, Modifier, Style};

/// Accent color for each phase
pub fn phase_color(phase: TimerPhase) -> Color {
    match phase {
        TimerPhase::Work => Color::Blue,
        TimerPhase::ShortBreak => Color::Green,
        TimerPhase::LongBreak => Color::Magenta,
        TimerPhase::Completed => Color::LightYellow,
    }
}

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Countdown and phase caption style
pub fn phase_style(phase: TimerPhase) -> Style {
    Style::default()
        .fg(phase_color(phase))
        .add_modifier(Modifier::BOLD)
}

/// Phase and cycle gauge style
pub fn gauge_style(phase: TimerPhase) -> Style {
    Style::default().fg(phase_color(phase)).bg(Color::DarkGray)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Checked-off to-do style
pub fn completed_todo_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Celebration banner style
pub fn celebration_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightYellow)
        .add_modifier(Modifier::BOLD)
}

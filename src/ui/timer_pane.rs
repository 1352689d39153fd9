use crate::app::AppState;
use crate::domain::{cycle_label, format_clock, phase_badge, running_hint, TimerPhase, UiMode};
use crate::ui::styles::{border_style, default_style, gauge_style, hint_style, modal_title_style, phase_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the focus timer pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let session = &app.session;
    let phase = session.phase();

    let title = format!(" {} {} ", phase_badge(phase, app.use_emoji), phase.name());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Current task
            Constraint::Length(1), // Cycle gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Caption
            Constraint::Length(1), // Phase gauge
            Constraint::Length(1), // Running hint
            Constraint::Min(0),    // Completion panel
        ])
        .split(inner);

    // Current task
    let mut task_lines = Vec::new();
    if !session.current_task_label().is_empty() {
        task_lines.push(Line::styled("Current Task", hint_style()));
        task_lines.push(Line::styled(session.current_task_label().to_string(), phase_style(phase)));
    }
    f.render_widget(Paragraph::new(task_lines).alignment(Alignment::Center), chunks[0]);

    // Cycle progress
    let cycles = Gauge::default()
        .gauge_style(gauge_style(phase))
        .ratio(session.cycle_progress().clamp(0.0, 1.0))
        .label(cycle_label(session.completed_cycles(), session.target_cycles()));
    f.render_widget(cycles, chunks[1]);

    // Countdown and caption
    let clock = Paragraph::new(Line::styled(format_clock(session.seconds_remaining()), phase_style(phase)))
        .alignment(Alignment::Center);
    f.render_widget(clock, chunks[3]);

    let caption = Paragraph::new(Line::styled(phase.caption(), default_style())).alignment(Alignment::Center);
    f.render_widget(caption, chunks[4]);

    // Phase progress
    let progress = Gauge::default()
        .gauge_style(gauge_style(phase))
        .ratio(session.phase_progress().clamp(0.0, 1.0))
        .label("");
    f.render_widget(progress, chunks[5]);

    let hint = Paragraph::new(Line::styled(running_hint(phase, session.is_running()), hint_style()))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[6]);

    if phase == TimerPhase::Completed {
        render_completion_panel(f, app, chunks[7]);
    }
}

/// Next-task entry shown once all cycles are done
fn render_completion_panel(f: &mut Frame, app: &AppState, area: Rect) {
    let editing = app.ui_mode == UiMode::EnteringNextTask;
    let pending = app.session.pending_label();

    let mut lines = vec![Line::raw("")];
    lines.push(Line::from(vec![
        Span::raw("Next task: "),
        Span::styled(pending.to_string(), modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));

    let actions = if editing {
        "[Enter] add task   [Esc] cancel"
    } else {
        "[n] next task   [c] clear history"
    };
    lines.push(Line::styled(actions, hint_style()));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

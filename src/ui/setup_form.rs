use crate::app::{AppState, SetupField};
use crate::domain::SetupFlow;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the session setup form
pub fn render_setup_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.setup_form {
        let fields = form.fields();
        // Two lines per field plus header and footer
        let height = (fields.len() as u16) * 2 + 5;
        let modal_area = create_modal_area(area, height);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = match form.flow {
            SetupFlow::Initial => " Set Your Focus Session ",
            SetupFlow::NewTask => " Configure New Session ",
        };

        let current = form.current_field();
        let mut lines = vec![Line::raw("")];

        for &field in fields {
            let editing = field == current;
            let label = if editing {
                format!("{}: (editing)", field.label())
            } else {
                format!("{}:", field.label())
            };
            lines.push(Line::raw(label));

            lines.push(Line::from(vec![
                Span::raw("> "),
                Span::styled(form.value(field).to_string(), modal_title_style()),
                if editing {
                    Span::styled("█", modal_title_style()) // Cursor
                } else {
                    Span::raw("")
                },
            ]));
        }

        lines.push(Line::raw(""));
        let submit_hint = if form.flow == SetupFlow::Initial && !form.can_submit() {
            "Enter a task title to start"
        } else if current == SetupField::Title {
            "Tab to switch fields  ·  Enter to start"
        } else {
            "Tab to switch fields  ·  ↑/↓ to adjust  ·  Enter to start"
        };
        lines.push(Line::styled(submit_hint, hint_style()));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

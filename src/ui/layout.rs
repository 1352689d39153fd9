use crate::domain::ActiveView;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub main_area: Rect,
    pub history_area: Option<Rect>,
    pub input_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Timer view: timer pane above the completed-task history
/// - To-do view: list, with an input box at the bottom while adding
pub fn create_layout(area: Rect, view: ActiveView, show_input: bool) -> MainLayout {
    // Split into top bar and main content
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];

    match view {
        ActiveView::Timer => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(12),   // Timer pane
                    Constraint::Length(8), // Completed tasks
                ])
                .split(content_area);

            MainLayout {
                keybindings_area,
                main_area: chunks[0],
                history_area: Some(chunks[1]),
                input_area: None,
            }
        }
        ActiveView::Todo if show_input => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),    // To-do list
                    Constraint::Length(3), // Input box
                ])
                .split(content_area);

            MainLayout {
                keybindings_area,
                main_area: chunks[0],
                history_area: None,
                input_area: Some(chunks[1]),
            }
        }
        ActiveView::Todo => MainLayout {
            keybindings_area,
            main_area: content_area,
            history_area: None,
            input_area: None,
        },
    }
}

/// Create centered modal area with a fixed height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

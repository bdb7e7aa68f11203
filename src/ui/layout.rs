use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub categories: Rect,
    pub search_box: Rect,
    pub questions: Rect,
    pub pagination: Rect,
    pub status_bar: Rect,
}

/// Shared by the renderer and the mouse hit tests, so both agree on where
/// everything is.
pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: left panel | gap | question list
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(26), // Categories + search
            Constraint::Min(30),    // Questions
        ])
        .split(content);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Categories
            Constraint::Length(3), // Search box
        ])
        .split(h_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Questions
            Constraint::Length(1), // Pagination
        ])
        .split(h_chunks[1]);

    AppLayout {
        categories: left_chunks[0],
        search_box: left_chunks[1],
        questions: right_chunks[0],
        pagination: right_chunks[1],
        status_bar,
    }
}

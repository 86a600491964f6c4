//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub form: Rect,
    pub output: Rect,
    pub help: Rect,
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    // Main vertical layout: content + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    // Horizontal split: form panel (fixed width) and output panel (rest)
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(0)])
        .split(main_chunks[0]);

    MainLayout {
        form: horizontal_chunks[0],
        output: horizontal_chunks[1],
        help: main_chunks[1],
    }
}

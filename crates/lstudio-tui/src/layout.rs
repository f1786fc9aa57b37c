//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the section list column
const SECTION_LIST_WIDTH: u16 = 30;

/// Below this width the section list is hidden
const MIN_WIDTH_FOR_LIST: u16 = 70;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title + project + layout file)
    pub header: Rect,

    /// Section list; zero-sized on narrow terminals
    pub sections: Rect,

    /// Selected section (live view or editor)
    pub main: Rect,

    /// Status bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header: top border + title row + bottom border
        Constraint::Min(3),    // Body
        Constraint::Length(2), // Status bar: top border + one line
    ])
    .split(area);

    let list_width = if area.width >= MIN_WIDTH_FOR_LIST {
        SECTION_LIST_WIDTH
    } else {
        0
    };
    let body = Layout::horizontal([Constraint::Length(list_width), Constraint::Min(10)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        sections: body[0],
        main: body[1],
        status: rows[2],
    }
}

/// Split the editor area into the live preview and the form.
///
/// Wide areas place them side by side, narrow ones stack the preview on top.
pub fn split_editor(area: Rect) -> (Rect, Rect) {
    let chunks = if area.width >= 100 {
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(area)
    } else {
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).split(area)
    };
    (chunks[0], chunks[1])
}

//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use lstudio_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: nothing here changes state. The selected section shows
/// its editor when editing is on and the live page otherwise; both render
/// section content through [`widgets::live_lines`].
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    if areas.sections.width > 0 {
        frame.render_widget(widgets::SectionList::new(state), areas.sections);
    }

    match state.selected_section() {
        Some(section) if state.is_editing => {
            frame.render_widget(widgets::EditorView::new(state, section), areas.main);
        }
        _ => frame.render_widget(widgets::LivePage::new(state), areas.main),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

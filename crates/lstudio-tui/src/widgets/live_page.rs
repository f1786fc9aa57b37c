//! Live page: sections stacked in layout order

use lstudio_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget, Wrap},
};

use super::section_view::SectionView;
use crate::theme::styles;

/// Sections from the selected one downwards, each sized to its content
pub struct LivePage<'a> {
    state: &'a AppState,
}

impl<'a> LivePage<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for LivePage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = &self.state.layout.sections;
        if sections.is_empty() {
            Paragraph::new("This layout has no sections yet. Press N to add one, n to pick its type.")
                .style(styles::text_muted())
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let mut y = area.y;
        for (index, section) in sections.iter().enumerate().skip(self.state.selected) {
            let remaining = area.bottom().saturating_sub(y);
            if remaining < 3 {
                break;
            }

            let view = SectionView::new(
                section,
                self.state.registry.get(&section.kind),
                self.state.fallback(),
            )
            .focused(index == self.state.selected);
            // Frame plus one row per line; the selected section takes what it needs
            let wanted = view.lines().len() as u16 + 2;
            let height = wanted.min(remaining);

            view.render(Rect::new(area.x, y, area.width, height), buf);
            y += height;
        }
    }
}

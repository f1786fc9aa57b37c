//! Section list shown beside the main view

use lstudio_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Ordered list of the layout's sections with the cursor
pub struct SectionList<'a> {
    state: &'a AppState,
}

impl<'a> SectionList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let sections = &self.state.layout.sections;
        if sections.is_empty() {
            return vec![
                Line::styled("No sections yet.", styles::text_muted()),
                Line::styled("Press N to add one.", styles::text_muted()),
            ];
        }

        sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let number = Span::styled(format!("{:>2} ", index + 1), styles::text_muted());
                let label = match self.state.registry.get(&section.kind) {
                    Some(kind) => Span::styled(kind.label.clone(), styles::text_primary()),
                    None => Span::styled(format!("? {}", section.kind), styles::status_yellow()),
                };
                let line = Line::from(vec![number, label]);
                if index == self.state.selected {
                    line.style(styles::selected())
                } else {
                    line
                }
            })
            .collect()
    }
}

impl Widget for SectionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel(!self.state.is_editing).title(" Sections ");
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        let offset = if visible == 0 {
            0
        } else {
            (self.state.selected + 1).saturating_sub(visible)
        };
        let lines: Vec<Line> = self.lines().into_iter().skip(offset).collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

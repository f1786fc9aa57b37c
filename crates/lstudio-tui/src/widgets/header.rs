//! Main header widget

use lstudio_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Header showing the project and layout file
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn project_name(&self) -> String {
        self.state
            .project_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.state.project_path.display().to_string())
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let separator = Span::styled(" │ ", styles::border_inactive());
        let layout_file = self.state.settings.editor.layout_file.display().to_string();
        let count = self.state.layout.sections.len();

        let line = Line::from(vec![
            Span::styled(" Layout Studio", styles::accent_bold()),
            separator.clone(),
            Span::styled(self.project_name(), styles::text_primary()),
            separator,
            Span::styled(layout_file, styles::text_secondary()),
            Span::styled(
                format!(
                    " ({} section{})",
                    count,
                    if count == 1 { "" } else { "s" }
                ),
                styles::text_muted(),
            ),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

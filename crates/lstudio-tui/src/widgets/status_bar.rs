//! Status bar widget
//!
//! Displays the editing mode, save state, the last status message and the
//! keys available in the current mode.

use lstudio_app::state::{AppState, EditMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::styles;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn mode_indicator(&self) -> Span<'static> {
        match (self.state.is_editing, self.state.editor.editing) {
            (_, Some(EditMode::UploadPath)) => Span::styled("▲ UPLOAD", styles::status_yellow()),
            (_, Some(EditMode::Text)) => Span::styled("✎ TYPING", styles::accent_bold()),
            (true, None) => Span::styled("✎ EDIT", styles::accent()),
            (false, None) => Span::styled("● LIVE", styles::status_green()),
        }
    }

    fn save_state(&self) -> Span<'static> {
        if self.state.saving {
            Span::styled("Saving…", styles::status_yellow())
        } else if self.state.dirty {
            Span::styled("● modified", styles::status_yellow())
        } else {
            Span::styled("✓ saved", styles::status_green())
        }
    }

    /// Keys available in the current mode
    fn hints(&self) -> Vec<(&'static str, String)> {
        if self.state.editor.is_editing() {
            return vec![
                ("Enter", "apply".into()),
                ("Esc", "cancel".into()),
                ("^U", "clear".into()),
            ];
        }
        if self.state.is_editing {
            return vec![
                ("Enter", "edit".into()),
                ("a/d", "add/remove".into()),
                ("K/J", "move".into()),
                ("u", "upload".into()),
                ("Esc", "done".into()),
            ];
        }
        let next_kind = self
            .state
            .registry
            .kinds()
            .get(self.state.new_section_kind)
            .map(|kind| kind.label.clone())
            .unwrap_or_default();
        vec![
            ("e", "edit".into()),
            ("N", format!("add {}", next_kind)),
            ("n", "next type".into()),
            ("^S", "save".into()),
            ("q", "quit".into()),
        ]
    }

    fn left_line(&self) -> Line<'static> {
        let separator = || Span::styled(" │ ", styles::border_inactive());
        let mut spans = vec![Span::raw(" "), self.mode_indicator(), separator(), self.save_state()];

        if self.state.upload.is_uploading() {
            spans.push(separator());
            spans.push(Span::styled("Uploading…", styles::status_yellow()));
        }
        if let Some(status) = &self.state.status {
            spans.push(separator());
            spans.push(Span::styled(status.clone(), styles::text_secondary()));
        }
        Line::from(spans)
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans).right_aligned()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive());
        let inner = block.inner(area);
        block.render(area, buf);

        let left = self.left_line();
        let hints = self.hint_line();
        // Hints give way to the status message on narrow terminals
        if left.width() + hints.width() < inner.width as usize {
            Paragraph::new(hints).render(inner, buf);
        }
        Paragraph::new(left).render(inner, buf);
    }
}

//! Editing view of a section: live preview next to the form.

use lstudio_app::state::{AppState, EditMode};
use lstudio_app::{FormRow, RowControl};
use lstudio_core::Section;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::section_view::SectionView;
use crate::layout::split_editor;
use crate::theme::palette::parse_hex;
use crate::theme::styles;

/// Widest label column before labels are truncated
const MAX_LABEL_WIDTH: usize = 28;

/// Preview and form of the selected section
pub struct EditorView<'a> {
    state: &'a AppState,
    section: &'a Section,
}

impl<'a> EditorView<'a> {
    pub fn new(state: &'a AppState, section: &'a Section) -> Self {
        Self { state, section }
    }
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (preview, form) = split_editor(area);
        let kind = self.state.registry.get(&self.section.kind);

        SectionView::new(self.section, kind, self.state.fallback())
            .caption("Preview")
            .render(preview, buf);
        FormPanel::new(self.state, self.section).render(form, buf);
    }
}

/// The editing form with its edit buffer and error banner
struct FormPanel<'a> {
    state: &'a AppState,
    section: &'a Section,
}

impl<'a> FormPanel<'a> {
    fn new(state: &'a AppState, section: &'a Section) -> Self {
        Self { state, section }
    }

    /// Lines shown under the rows: upload progress and errors
    fn banner(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if self.state.upload.blocks(&self.section.id) {
            lines.push(Line::styled(
                "⟳ Uploading… the form is paused until it finishes",
                styles::status_yellow(),
            ));
        }
        if let Some(error) = &self.state.upload.error {
            lines.push(Line::from(vec![
                Span::styled(format!("✗ {}", error), styles::status_red()),
                Span::styled("  [x] dismiss", styles::text_muted()),
            ]));
        }
        if let Some(error) = &self.state.editor.error {
            lines.push(Line::styled(format!("✗ {}", error), styles::status_red()));
        }
        lines
    }

    fn row_line(&self, row: &FormRow, selected: bool, label_width: usize) -> Line<'static> {
        let locked = self.state.form_locked();
        let indent = "  ".repeat(row.depth as usize);
        let label = fit(
            &format!("{}{}", indent, row.label),
            label_width,
        );

        let label_style = match row.control {
            RowControl::Heading => styles::accent_bold(),
            RowControl::Action => styles::accent(),
            _ => styles::text_secondary(),
        };
        let mut spans = vec![Span::styled(label, label_style)];

        let editing = if selected { self.state.editor.editing } else { None };
        match editing {
            Some(mode) => spans.extend(edit_buffer(mode, self.state.editor.buffer.local())),
            None => spans.extend(value_spans(row)),
        }

        if self.state.settings.ui.show_field_keys && row.control != RowControl::Action {
            spans.push(Span::styled(format!("  ({})", row.key), styles::text_muted()));
        }

        let line = Line::from(spans);
        if selected {
            line.style(styles::selected())
        } else if locked {
            line.style(styles::text_muted())
        } else {
            line
        }
    }
}

/// Value column of a row that is not being edited
fn value_spans(row: &FormRow) -> Vec<Span<'static>> {
    let text = row.display_value();
    match row.control {
        RowControl::Heading | RowControl::Action => Vec::new(),
        RowControl::Toggle => {
            let on = row.value.as_bool().unwrap_or(false);
            vec![Span::raw(if on { "[x]" } else { "[ ]" })]
        }
        RowControl::Color => match parse_hex(&text) {
            Some(color) => vec![
                Span::styled("██ ", Style::default().fg(color)),
                Span::raw(text),
            ],
            None => vec![Span::raw(text)],
        },
        RowControl::Media(kind) if text.is_empty() => vec![Span::styled(
            format!("(no {})", kind.label()),
            styles::text_muted(),
        )],
        RowControl::LongText => vec![Span::raw(text.replace('\n', " ⏎ "))],
        _ => vec![Span::raw(text)],
    }
}

/// Value column of the row being edited
fn edit_buffer(mode: EditMode, buffer: &str) -> Vec<Span<'static>> {
    let style = styles::accent().add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    if mode == EditMode::UploadPath {
        spans.push(Span::styled("file: ", styles::text_muted()));
    }
    spans.push(Span::styled(buffer.replace('\n', " ⏎ "), style));
    spans.push(Span::styled("▏", style));
    spans
}

/// Truncate or pad `text` to exactly `width` display columns
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    if text.width() > width {
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        used += 1;
    } else {
        out.push_str(text);
        used = text.width();
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// First row to draw so the selected row stays visible
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        (selected + 1).saturating_sub(visible)
    }
}

impl Widget for FormPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = self
            .state
            .registry
            .get(&self.section.kind)
            .map_or(self.section.kind.as_str(), |k| k.label.as_str());
        let block = styles::panel(true).title(Line::styled(
            format!(" Edit · {} ", label),
            styles::accent_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.state.form_rows();
        if rows.is_empty() {
            Paragraph::new(Line::styled(
                "This section type has no editable fields.",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        }

        let banner = self.banner();
        let [rows_area, banner_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(banner.len() as u16),
        ])
        .areas(inner);

        let label_width = rows
            .iter()
            .map(|r| r.depth as usize * 2 + r.label.width())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH)
            + 2;

        let selected = self.state.editor.selected_row;
        let offset = scroll_offset(selected, rows_area.height as usize);
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows_area.height as usize)
            .map(|(index, row)| self.row_line(row, index == selected, label_width))
            .collect();

        Paragraph::new(lines).render(rows_area, buf);
        Paragraph::new(banner)
            .wrap(Wrap { trim: true })
            .render(banner_area, buf);
    }
}

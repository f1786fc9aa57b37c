//! Live view of a section.
//!
//! [`live_lines`] is the only renderer of section content. The live page
//! shows its output directly and the editor shows the very same lines as its
//! preview, so the two modes cannot drift apart.
//!
//! Rendering reads content exclusively through [`Resolved`], whose accessors
//! treat malformed shapes as empty, so no content can make a render fail.

use lstudio_core::{FallbackPolicy, FieldKind, ListSpec, LiveLayout, Resolved, Section, SectionKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::palette::parse_hex;
use crate::theme::registry::{section_style, SectionStyle};
use crate::theme::styles;

/// Lines of a section's live view
pub fn live_lines(kind: &SectionKind, resolved: &Resolved) -> Vec<Line<'static>> {
    let style = themed(kind, resolved);
    let mut lines = Vec::new();

    let title = resolved.text("title");
    if !title.trim().is_empty() {
        lines.push(Line::styled(title.into_owned(), style.heading));
    }
    for field in &kind.fields {
        if field.kind == FieldKind::LongText {
            push_paragraph(&mut lines, &resolved.text(&field.key), "", style.body);
        }
    }

    match kind.layout {
        LiveLayout::Banner => banner(&mut lines, resolved, &style),
        LiveLayout::Grid => grid(&mut lines, kind, resolved, &style),
        LiveLayout::Stats => stats(&mut lines, kind, resolved, &style),
        LiveLayout::Timeline => timeline(&mut lines, kind, resolved, &style),
        LiveLayout::Contact => contact(&mut lines, kind, resolved, &style),
    }

    for field in &kind.fields {
        if let FieldKind::Media(_) = field.kind {
            let url = resolved.text(&field.key);
            if !url.is_empty() {
                lines.push(media_line(&field.label, &url, "", &style));
            }
        }
    }

    if lines.iter().all(|line| line.width() == 0) {
        lines = vec![Line::styled("(empty section)", style.muted)];
    }
    lines
}

/// Placeholder for a section whose type is not registered
pub fn unknown_lines(section: &Section) -> Vec<Line<'static>> {
    vec![
        Line::styled(
            format!("Unknown section type '{}'", section.kind),
            styles::status_yellow(),
        ),
        Line::styled(
            "Its content is kept as-is but cannot be shown or edited.",
            styles::text_muted(),
        ),
    ]
}

/// Kind rules with the section's own colors applied on top
fn themed(kind: &SectionKind, resolved: &Resolved) -> SectionStyle {
    let mut style = section_style(kind);
    if let Some(color) = parse_hex(&resolved.text("textColor")) {
        style.heading = style.heading.fg(color);
    }
    if let Some(color) = parse_hex(&resolved.text("accentColor")) {
        style.accent = style.accent.fg(color);
    }
    style
}

fn push_paragraph(lines: &mut Vec<Line<'static>>, text: &str, indent: &str, style: Style) {
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        lines.push(Line::styled(format!("{}{}", indent, line), style));
    }
}

fn media_line(label: &str, url: &str, indent: &str, style: &SectionStyle) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}▣ {} ", indent, label), style.muted),
        Span::styled(url.to_string(), style.muted.add_modifier(Modifier::ITALIC)),
    ])
}

/// First non-empty plain text field of an item, used as its heading
fn item_heading<'a>(spec: &'a ListSpec, item: &Resolved) -> Option<(&'a str, String)> {
    spec.fields
        .iter()
        .filter(|f| f.kind == FieldKind::Text)
        .find_map(|f| {
            let text = item.text(&f.key);
            (!text.trim().is_empty()).then(|| (f.key.as_str(), text.into_owned()))
        })
}

/// Item fields other than those in `skip`, one line each
fn item_details(
    lines: &mut Vec<Line<'static>>,
    spec: &ListSpec,
    item: &Resolved,
    skip: &[&str],
    style: &SectionStyle,
) {
    for field in spec.fields.iter().filter(|f| !skip.contains(&f.key.as_str())) {
        let text = item.text(&field.key);
        match field.kind {
            FieldKind::LongText => push_paragraph(lines, &text, "  ", style.body),
            FieldKind::Text if !text.trim().is_empty() => {
                lines.push(Line::styled(format!("  {}", text), style.muted));
            }
            FieldKind::Media(_) if !text.is_empty() => {
                lines.push(media_line(&field.label, &text, "  ", style));
            }
            _ => {}
        }
    }
}

fn primary_list<'a>(kind: &'a SectionKind) -> Option<(&'a str, &'a ListSpec)> {
    let key = kind.primary_list.as_deref()?;
    kind.list_spec(key).map(|spec| (key, spec))
}

fn no_items(spec: &ListSpec, style: &SectionStyle) -> Line<'static> {
    Line::styled(
        format!("No {} items yet", spec.item_label.to_lowercase()),
        style.muted,
    )
}

fn banner(lines: &mut Vec<Line<'static>>, resolved: &Resolved, style: &SectionStyle) {
    let text = resolved.text("buttonText");
    if !resolved.flag("showButton") || text.trim().is_empty() {
        return;
    }

    let mut button = vec![Span::styled(
        format!("[ {} ]", text),
        style.accent.add_modifier(Modifier::REVERSED),
    )];
    let link = resolved.text("buttonLink");
    if !link.is_empty() {
        button.push(Span::styled(format!("  → {}", link), style.muted));
    }
    lines.push(Line::default());
    lines.push(Line::from(button));
}

fn grid(
    lines: &mut Vec<Line<'static>>,
    kind: &SectionKind,
    resolved: &Resolved,
    style: &SectionStyle,
) {
    for (key, spec) in kind.lists() {
        let items = resolved.items(key);
        lines.push(Line::default());
        if items.is_empty() {
            lines.push(no_items(spec, style));
            continue;
        }

        for (index, item) in items.iter().enumerate() {
            let (heading_key, heading) = item_heading(spec, item)
                .unwrap_or_else(|| ("", format!("{} {}", spec.item_label, index + 1)));
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", style.marker), style.accent),
                Span::styled(heading, style.body.add_modifier(Modifier::BOLD)),
            ]));
            item_details(lines, spec, item, &[heading_key], style);
        }
    }
}

fn stats(
    lines: &mut Vec<Line<'static>>,
    kind: &SectionKind,
    resolved: &Resolved,
    style: &SectionStyle,
) {
    let Some((key, spec)) = primary_list(kind) else {
        return;
    };
    let items = resolved.items(key);
    lines.push(Line::default());
    if items.is_empty() {
        lines.push(no_items(spec, style));
        return;
    }

    let mut spans = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(format!("  {}  ", style.marker), style.muted));
        }
        spans.push(Span::styled(
            format!("{}{}", item.text("value"), item.text("suffix")),
            style.accent,
        ));
        let label = item.text("label");
        if !label.is_empty() {
            spans.push(Span::styled(format!(" {}", label), style.body));
        }
    }
    lines.push(Line::from(spans));
}

fn timeline(
    lines: &mut Vec<Line<'static>>,
    kind: &SectionKind,
    resolved: &Resolved,
    style: &SectionStyle,
) {
    let Some((key, spec)) = primary_list(kind) else {
        return;
    };
    let items = resolved.items(key);
    lines.push(Line::default());
    if items.is_empty() {
        lines.push(no_items(spec, style));
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let mut spans = vec![Span::styled(format!("{} ", style.marker), style.accent)];
        let year = item.text("year");
        if !year.is_empty() {
            spans.push(Span::styled(
                format!("{}  ", year),
                style.accent.add_modifier(Modifier::BOLD),
            ));
        }
        let title = item.text("title");
        spans.push(if title.trim().is_empty() {
            Span::styled(format!("{} {}", spec.item_label, index + 1), style.muted)
        } else {
            Span::styled(title.into_owned(), style.body.add_modifier(Modifier::BOLD))
        });
        if item.flag("completed") {
            spans.push(Span::styled(" ✓", styles::status_green()));
        }
        lines.push(Line::from(spans));
        item_details(lines, spec, item, &["title", "year"], style);
    }
}

fn contact(
    lines: &mut Vec<Line<'static>>,
    kind: &SectionKind,
    resolved: &Resolved,
    style: &SectionStyle,
) {
    for field in &kind.fields {
        let FieldKind::Group(children) = &field.kind else {
            continue;
        };
        let details = resolved.nested(&field.key);
        let mut first = true;
        for child in children {
            let value = details.text(&child.key);
            let value: Vec<&str> = value
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            if value.is_empty() {
                continue;
            }
            if std::mem::take(&mut first) {
                lines.push(Line::default());
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", style.marker), style.accent),
                Span::styled(format!("{}: ", child.label), style.muted),
                Span::styled(value.join(", "), style.body),
            ]));
        }
    }

    if resolved.flag("showMap") {
        lines.push(Line::default());
        lines.push(Line::styled("[ map ]", style.muted));
    }
}

/// A section in its live form, framed with the kind's label
pub struct SectionView<'a> {
    section: &'a Section,
    kind: Option<&'a SectionKind>,
    policy: FallbackPolicy,
    focused: bool,
    caption: Option<&'a str>,
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a Section, kind: Option<&'a SectionKind>, policy: FallbackPolicy) -> Self {
        Self {
            section,
            kind,
            policy,
            focused: false,
            caption: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Text shown before the kind label in the frame title
    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    /// Content lines, without the frame
    pub fn lines(&self) -> Vec<Line<'static>> {
        match self.kind {
            Some(kind) => live_lines(kind, &kind.resolve(self.section.content(), self.policy)),
            None => unknown_lines(self.section),
        }
    }

    fn title(&self) -> Line<'static> {
        let label = self.kind.map_or(self.section.kind.as_str(), |k| k.label.as_str());
        let text = match self.caption {
            Some(caption) => format!(" {} · {} ", caption, label),
            None => format!(" {} ", label),
        };
        let style = if self.focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        Line::styled(text, style)
    }

    /// Swatch of the section's background color
    fn swatch(&self) -> Option<Line<'static>> {
        let text = self.section.content().get("backgroundColor")?.as_str()?;
        let color = parse_hex(text)?;
        Some(Line::from(Span::styled("██ ", Style::default().fg(color))).right_aligned())
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::panel(self.focused).title(self.title());
        if let Some(swatch) = self.swatch() {
            block = block.title_top(swatch);
        }

        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

//! Per-section-kind presentation rules.
//!
//! Every section of a kind renders with the same rules, so they are kept
//! once per process and shared by every view of that kind. A kind's rules
//! are registered the first time one of its sections renders; later renders
//! reuse them.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use lstudio_core::{LiveLayout, SectionKind};
use ratatui::style::{Modifier, Style};

use super::{palette, styles};

/// Presentation rules shared by all sections of one kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionStyle {
    pub heading: Style,
    pub body: Style,
    pub muted: Style,
    pub accent: Style,
    /// Bullet in front of list items
    pub marker: &'static str,
}

impl SectionStyle {
    fn for_layout(layout: LiveLayout) -> Self {
        let base = Self {
            heading: Style::default()
                .fg(palette::TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
            body: styles::text_primary(),
            muted: styles::text_muted(),
            accent: styles::accent(),
            marker: "■",
        };

        match layout {
            LiveLayout::Banner => Self {
                heading: base.heading.add_modifier(Modifier::UNDERLINED),
                body: styles::text_secondary(),
                ..base
            },
            LiveLayout::Grid => base,
            LiveLayout::Stats => Self {
                accent: styles::accent_bold(),
                marker: "│",
                ..base
            },
            LiveLayout::Timeline => Self { marker: "●", ..base },
            LiveLayout::Contact => Self { marker: "›", ..base },
        }
    }
}

fn registry() -> &'static RwLock<HashMap<String, SectionStyle>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, SectionStyle>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Rules for `kind`, registering them on first use.
///
/// Registration is idempotent: concurrent or repeated calls for the same
/// kind name keep the first registered rules.
pub fn section_style(kind: &SectionKind) -> SectionStyle {
    let registered = registry()
        .read()
        .ok()
        .and_then(|map| map.get(&kind.name).copied());
    if let Some(style) = registered {
        return style;
    }

    let mut map = registry()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *map.entry(kind.name.clone()).or_insert_with(|| {
        tracing::debug!("Registering styles for section kind '{}'", kind.name);
        SectionStyle::for_layout(kind.layout)
    })
}

/// Rules for `name` have been registered
pub fn is_registered(name: &str) -> bool {
    registry()
        .read()
        .map(|map| map.contains_key(name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(name: &str) -> usize {
        registry()
            .read()
            .map(|map| map.keys().filter(|k| k.as_str() == name).count())
            .unwrap_or(0)
    }

    #[test]
    fn test_registered_on_first_use() {
        let kind = SectionKind::new("registry-test-first", "First", LiveLayout::Timeline);
        assert!(!is_registered(&kind.name));

        let style = section_style(&kind);

        assert!(is_registered(&kind.name));
        assert_eq!(style.marker, "●");
    }

    #[test]
    fn test_registration_is_idempotent() {
        let kind = SectionKind::new("registry-test-repeat", "Repeat", LiveLayout::Grid);
        let first = section_style(&kind);
        let second = section_style(&kind);

        assert_eq!(first, second);
        assert_eq!(count(&kind.name), 1);
    }

    #[test]
    fn test_first_registration_wins() {
        let kind = SectionKind::new("registry-test-wins", "Wins", LiveLayout::Stats);
        let first = section_style(&kind);

        let relabelled = SectionKind::new("registry-test-wins", "Wins", LiveLayout::Contact);
        assert_eq!(section_style(&relabelled), first);
    }

    #[test]
    fn test_concurrent_registration() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let kind =
                        SectionKind::new("registry-test-threads", "Threads", LiveLayout::Banner);
                    section_style(&kind)
                })
            })
            .collect();

        let styles: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(styles.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(count("registry-test-threads"), 1);
    }
}

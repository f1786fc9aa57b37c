//! Color palette for the editor chrome.
//!
//! Section content brings its own colors (`backgroundColor`, `textColor`,
//! `accentColor`); these are only used where content has none.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const SELECTED_BG: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

/// Parse a `#rgb` or `#rrggbb` content color.
///
/// Returns `None` for anything else, so malformed colors fall back to the
/// palette instead of failing the render.
pub fn parse_hex(text: &str) -> Option<Color> {
    let hex = text.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut parts = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some(Color::Rgb(parts.next()??, parts.next()??, parts.next()??))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex("#0F0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex(" #000000 "), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(parse_hex("red"), None);
        assert_eq!(parse_hex("#12"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#ééé"), None);
    }
}

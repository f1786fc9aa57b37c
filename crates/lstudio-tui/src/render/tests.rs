//! Full-screen rendering tests

use std::path::PathBuf;
use std::sync::Arc;

use lstudio_app::config::Settings;
use lstudio_app::handler::update;
use lstudio_app::message::Message;
use lstudio_app::state::AppState;
use lstudio_core::{single, Content, LayoutDocument, Section, SequenceIdGenerator};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::{json, Value};

use super::view;
use crate::layout;
use crate::widgets::SectionView;

fn obj(value: Value) -> Content {
    value.as_object().cloned().unwrap()
}

fn test_state(sections: Vec<Section>) -> AppState {
    AppState::new(PathBuf::from("/tmp/site"), Settings::default())
        .with_ids(Arc::new(SequenceIdGenerator::new("t")))
        .with_layout(LayoutDocument {
            sections,
            ..LayoutDocument::default()
        })
}

/// Run a message and its follow-ups
fn drive(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn draw(state: &AppState, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| view(f, state)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    buffer.content.iter().map(|c| c.symbol()).collect()
}

/// Symbols of the rows strictly inside `rect`'s frame
fn inner_rows(buffer: &Buffer, rect: Rect) -> Vec<String> {
    (rect.y + 1..rect.bottom().saturating_sub(1))
        .map(|y| {
            (rect.x..rect.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}

#[test]
fn test_live_page_shows_sections_in_order() {
    let state = test_state(vec![
        Section::new("a", "hero").with_content(single("title", "Acme Ltd")),
        Section::new("b", "stats"),
    ]);

    let content = text(&draw(&state, 120, 40));

    assert!(content.contains("Layout Studio"));
    assert!(content.contains("Acme Ltd"));
    assert!(content.contains("By the numbers"));
    assert!(content.contains("● LIVE"));
    let hero = content.find("Acme Ltd").unwrap();
    let stats = content.find("By the numbers").unwrap();
    assert!(hero < stats);
}

#[test]
fn test_preview_matches_live_view() {
    let section = Section::new("a", "services").with_content(obj(json!({
        "title": "What we do",
        "services": [{ "id": "x", "title": "Design", "description": "Pixels" }]
    })));
    let mut state = test_state(vec![section]);
    state.is_editing = true;

    let (width, height) = (120, 40);
    let screen = draw(&state, width, height);
    let areas = layout::create(Rect::new(0, 0, width, height));
    let (preview, _) = layout::split_editor(areas.main);

    let section = &state.layout.sections[0];
    let live = SectionView::new(section, state.registry.get(&section.kind), state.fallback());
    let mut alone = Buffer::empty(Rect::new(0, 0, width, height));
    ratatui::widgets::Widget::render(live, preview, &mut alone);

    assert_eq!(inner_rows(&screen, preview), inner_rows(&alone, preview));
    assert!(text(&screen).contains("Design"));
}

#[test]
fn test_typing_updates_preview_immediately() {
    let mut state = test_state(vec![Section::new("a", "hero")]);
    state.is_editing = true;

    drive(&mut state, Message::FormActivate);
    for _ in 0.."Welcome".len() {
        drive(&mut state, Message::FormBackspace);
    }
    for c in "Fresh".chars() {
        drive(&mut state, Message::FormCharInput(c));
    }

    let content = text(&draw(&state, 120, 40));
    assert!(content.contains("Preview · Hero Banner"));
    assert!(content.contains("Fresh"));
    assert!(!content.contains("Welcome"));
    assert!(content.contains("✎ TYPING"));
    assert!(content.contains("● modified"));
}

#[test]
fn test_malformed_content_renders_in_both_modes() {
    let garbage = obj(json!({
        "title": [1, 2],
        "services": "nope",
        "stats": { "a": 1 },
        "initiatives": [null, 3],
        "contactInfo": "x",
        "backgroundColor": 7
    }));
    let sections: Vec<Section> = lstudio_app::builtin_registry()
        .names()
        .into_iter()
        .enumerate()
        .map(|(i, name)| Section::new(format!("s{}", i), name).with_content(garbage.clone()))
        .collect();
    let count = sections.len();
    let mut state = test_state(sections);

    for index in 0..count {
        state.selected = index;
        state.is_editing = false;
        draw(&state, 100, 30);
        state.is_editing = true;
        draw(&state, 100, 30);
    }
}

#[test]
fn test_empty_layout_shows_hint() {
    let state = test_state(vec![]);

    let content = text(&draw(&state, 100, 24));

    assert!(content.contains("No sections yet."));
    assert!(content.contains("This layout has no sections yet."));
}

#[test]
fn test_unknown_section_type_in_editor() {
    let mut state = test_state(vec![Section::new("a", "carousel")]);
    state.is_editing = true;

    let content = text(&draw(&state, 120, 30));

    assert!(content.contains("Unknown section type 'carousel'"));
    assert!(content.contains("no editable fields"));
}

#[test]
fn test_upload_banner_and_error() {
    let mut state = test_state(vec![Section::new("a", "hero")]);
    state.is_editing = true;
    state.upload.start("a");

    let content = text(&draw(&state, 120, 40));
    assert!(content.contains("Uploading"));

    state.upload.fail("a", "Upload failed: disk full");
    let content = text(&draw(&state, 120, 40));
    assert!(content.contains("Upload failed: disk full"));
    assert!(content.contains("[x] dismiss"));
}

#[test]
fn test_status_bar_reflects_save_state() {
    let mut state = test_state(vec![Section::new("a", "hero")]);
    assert!(text(&draw(&state, 120, 24)).contains("✓ saved"));

    state.saving = true;
    assert!(text(&draw(&state, 120, 24)).contains("Saving…"));

    state.saving = false;
    state.dirty = true;
    state.set_status("Added Hero Banner");
    let content = text(&draw(&state, 120, 24));
    assert!(content.contains("● modified"));
    assert!(content.contains("Added Hero Banner"));
}

#[test]
fn test_narrow_terminal_renders_without_section_list() {
    let state = test_state(vec![Section::new("a", "contact")]);

    let content = text(&draw(&state, 50, 20));

    assert!(!content.contains("Sections"));
    assert!(content.contains("Contact us"));
}

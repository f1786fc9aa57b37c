use lstudio_core::{FieldSpec, ListSpec, LiveLayout, SectionKind};
use serde_json::json;

pub fn kind() -> SectionKind {
    SectionKind::new("why_choose_us", "Why Choose Us", LiveLayout::Grid)
        .field(FieldSpec::text("title", "Title").default("Why choose us"))
        .field(FieldSpec::long_text("subtitle", "Subtitle"))
        .field(FieldSpec::color("backgroundColor", "Background").default("#ffffff"))
        .field(FieldSpec::color("accentColor", "Accent").default("#f59e0b"))
        .field(FieldSpec::list(
            "reasons",
            "Reasons",
            ListSpec::new(
                "Reason",
                vec![
                    FieldSpec::text("title", "Title"),
                    FieldSpec::long_text("description", "Description"),
                ],
            )
            .default_items(vec![json!({ "title": "Experience", "description": "" })]),
        ))
}

use lstudio_core::{FieldSpec, ListSpec, LiveLayout, SectionKind};
use serde_json::json;

pub fn kind() -> SectionKind {
    SectionKind::new("stats", "Stats Banner", LiveLayout::Stats)
        .field(FieldSpec::text("title", "Title").default("By the numbers"))
        .field(FieldSpec::color("backgroundColor", "Background").default("#1e293b"))
        .field(FieldSpec::color("textColor", "Text color").default("#f8fafc"))
        .field(FieldSpec::list(
            "stats",
            "Stats",
            ListSpec::new(
                "Stat",
                vec![
                    FieldSpec::text("value", "Value").default("0"),
                    FieldSpec::text("label", "Label"),
                    FieldSpec::text("suffix", "Suffix"),
                ],
            )
            .keyed()
            .default_items(vec![
                json!({ "id": "default-1", "value": "10", "suffix": "+", "label": "Years" }),
                json!({ "id": "default-2", "value": "250", "suffix": "", "label": "Projects" }),
            ]),
        ))
}

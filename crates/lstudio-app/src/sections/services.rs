use lstudio_core::{FieldSpec, ListSpec, LiveLayout, MediaKind, SectionKind};
use serde_json::json;

pub fn kind() -> SectionKind {
    SectionKind::new("services", "Services Grid", LiveLayout::Grid)
        .field(FieldSpec::text("title", "Title").default("Our Services"))
        .field(FieldSpec::long_text("subtitle", "Subtitle"))
        .field(FieldSpec::color("backgroundColor", "Background").default("#ffffff"))
        .field(FieldSpec::color("accentColor", "Accent").default("#2563eb"))
        .field(FieldSpec::list(
            "services",
            "Services",
            ListSpec::new(
                "Service",
                vec![
                    FieldSpec::text("title", "Title"),
                    FieldSpec::long_text("description", "Description"),
                    FieldSpec::media("image", "Image", MediaKind::Image),
                ],
            )
            .keyed()
            .default_items(vec![
                json!({ "id": "default-1", "title": "Consulting", "description": "" }),
                json!({ "id": "default-2", "title": "Delivery", "description": "" }),
                json!({ "id": "default-3", "title": "Support", "description": "" }),
            ]),
        ))
}

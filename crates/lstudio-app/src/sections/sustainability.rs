use lstudio_core::{FieldSpec, ListSpec, LiveLayout, MediaKind, SectionKind};

pub fn kind() -> SectionKind {
    SectionKind::new("sustainability", "Sustainability Panel", LiveLayout::Grid)
        .field(FieldSpec::text("title", "Title").default("Sustainability"))
        .field(FieldSpec::long_text("description", "Description"))
        .field(FieldSpec::media("image", "Image", MediaKind::Image))
        .field(FieldSpec::color("backgroundColor", "Background").default("#ecfdf5"))
        .field(FieldSpec::color("accentColor", "Accent").default("#059669"))
        .field(FieldSpec::list(
            "pillars",
            "Pillars",
            ListSpec::new(
                "Pillar",
                vec![
                    FieldSpec::text("title", "Title"),
                    FieldSpec::long_text("description", "Description"),
                ],
            ),
        ))
}

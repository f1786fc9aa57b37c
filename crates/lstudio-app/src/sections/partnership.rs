use lstudio_core::{FieldSpec, ListSpec, LiveLayout, MediaKind, SectionKind};

pub fn kind() -> SectionKind {
    SectionKind::new("partnership", "Partnership Showcase", LiveLayout::Grid)
        .field(FieldSpec::text("title", "Title").default("Our Partners"))
        .field(FieldSpec::long_text("description", "Description"))
        .field(FieldSpec::color("backgroundColor", "Background").default("#f8fafc"))
        .field(FieldSpec::list(
            "partners",
            "Partners",
            ListSpec::new(
                "Partner",
                vec![
                    FieldSpec::text("name", "Name"),
                    FieldSpec::media("logo", "Logo", MediaKind::Image),
                    FieldSpec::text("url", "Website"),
                ],
            )
            .keyed(),
        ))
}

use lstudio_core::{FieldSpec, ListSpec, LiveLayout, SectionKind};

pub fn kind() -> SectionKind {
    SectionKind::new("governance", "Governance Initiatives", LiveLayout::Timeline)
        .field(FieldSpec::text("title", "Title").default("Governance"))
        .field(FieldSpec::long_text("intro", "Introduction"))
        .field(FieldSpec::color("backgroundColor", "Background").default("#ffffff"))
        .field(FieldSpec::list(
            "initiatives",
            "Initiatives",
            ListSpec::new(
                "Initiative",
                vec![
                    FieldSpec::text("title", "Title"),
                    FieldSpec::text("year", "Year"),
                    FieldSpec::long_text("description", "Description"),
                    FieldSpec::toggle("completed", "Completed"),
                ],
            )
            .keyed()
            .movable(),
        ))
}

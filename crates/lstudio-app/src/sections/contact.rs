use lstudio_core::{FieldSpec, LiveLayout, SectionKind};

pub fn kind() -> SectionKind {
    SectionKind::new("contact", "Contact", LiveLayout::Contact)
        .field(FieldSpec::text("title", "Title").default("Contact us"))
        .field(FieldSpec::long_text("description", "Description"))
        .field(FieldSpec::group(
            "contactInfo",
            "Contact details",
            vec![
                FieldSpec::text("phone", "Phone").default("+1 555 0100"),
                FieldSpec::text("email", "Email").default("hello@example.com"),
                FieldSpec::long_text("address", "Address"),
            ],
        ))
        .field(FieldSpec::toggle("showMap", "Show map"))
        .field(FieldSpec::color("backgroundColor", "Background").default("#ffffff"))
}

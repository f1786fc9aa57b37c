use lstudio_core::{FieldSpec, LiveLayout, MediaKind, SectionKind};

pub fn kind() -> SectionKind {
    SectionKind::new("hero", "Hero Banner", LiveLayout::Banner)
        .field(FieldSpec::text("title", "Title").default("Welcome"))
        .field(FieldSpec::long_text("subtitle", "Subtitle").default("Tell visitors what you do"))
        .field(FieldSpec::text("buttonText", "Button text").default("Get in touch"))
        .field(FieldSpec::text("buttonLink", "Button link").default("#contact"))
        .field(FieldSpec::toggle("showButton", "Show button").default(true))
        .field(FieldSpec::color("backgroundColor", "Background").default("#0f172a"))
        .field(FieldSpec::color("textColor", "Text color").default("#ffffff"))
        .field(FieldSpec::number("overlayOpacity", "Overlay opacity").default(0.5))
        .field(FieldSpec::media("backgroundImage", "Background image", MediaKind::Image))
        .field(FieldSpec::media("backgroundVideo", "Background video", MediaKind::Video))
}

use crate::{ElementType, PlaceholderElement, Side};

/// Starter front face for a new card: name, rank, photo and zones
pub fn default_placeholders() -> Vec<PlaceholderElement> {
    vec![
        PlaceholderElement::new("name", ElementType::Text, "name", 50.0, 100.0)
            .with_label("Name")
            .with_size(200.0, 30.0)
            .with_font_size(Some(16.0)),
        PlaceholderElement::new("rank", ElementType::Text, "rank", 50.0, 60.0)
            .with_label("Rank")
            .with_size(150.0, 25.0),
        PlaceholderElement::new("photo", ElementType::Image, "imageUrl", 280.0, 50.0)
            .with_label("Photo")
            .with_size(80.0, 100.0)
            .with_font_size(None),
        PlaceholderElement::new("zones", ElementType::Multiselect, "zones", 50.0, 200.0)
            .with_label("Zones")
            .with_size(300.0, 40.0)
            .with_font_size(None)
            .with_side(Side::Front),
    ]
}

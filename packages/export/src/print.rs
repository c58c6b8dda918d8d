use badgecraft_compiler_html::{escape_html, RenderedCard};
use badgecraft_model::DataRecord;

/// Window title of the print page for `record`
pub fn print_title(record: &DataRecord) -> String {
    format!("Accreditation Card - {}", record.get_str("name").unwrap_or_default())
}

/// Standalone HTML page holding one rendered card, ready for a print surface
pub fn print_document(card: &RenderedCard, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\nbody {{ margin: 20px; font-family: Arial, sans-serif; }}\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        card.stylesheet,
        card.markup
    )
}

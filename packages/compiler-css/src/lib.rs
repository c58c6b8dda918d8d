//! Stylesheet generation for a card format.
//!
//! The stylesheet is shared by every output path: on screen only the front
//! face is visible, in a print context both faces are shown and the back face
//! always starts a new page.

use badgecraft_model::CardFormat;
use tracing::debug;

/// CSS rule with selector and properties, optionally nested in a media query
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    pub selector: String,
    pub properties: Vec<(String, String)>,
    pub media_query: Option<String>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: Vec::new(),
            media_query: None,
        }
    }

    pub fn prop(mut self, key: &str, value: impl Into<String>) -> Self {
        self.properties.push((key.to_string(), value.into()));
        self
    }

    pub fn media(mut self, query: &str) -> Self {
        self.media_query = Some(query.to_string());
        self
    }
}

/// Ordered collection of CSS rules
#[derive(Debug, Clone, Default)]
pub struct CssDocument {
    pub rules: Vec<CssRule>,
}

impl CssDocument {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: CssRule) {
        self.rules.push(rule);
    }

    /// Convert to CSS text. Top-level rules come first in insertion order,
    /// then one block per media query in order of first appearance.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for rule in self.rules.iter().filter(|r| r.media_query.is_none()) {
            write_rule(&mut css, rule, "");
        }

        let mut queries: Vec<&str> = Vec::new();
        for query in self.rules.iter().filter_map(|r| r.media_query.as_deref()) {
            if !queries.contains(&query) {
                queries.push(query);
            }
        }

        for query in queries {
            css.push_str("@media ");
            css.push_str(query);
            css.push_str(" {\n");
            for rule in self
                .rules
                .iter()
                .filter(|r| r.media_query.as_deref() == Some(query))
            {
                write_rule(&mut css, rule, "  ");
            }
            css.push_str("}\n\n");
        }

        css
    }
}

fn write_rule(css: &mut String, rule: &CssRule, indent: &str) {
    css.push_str(indent);
    css.push_str(&rule.selector);
    css.push_str(" {\n");

    for (key, value) in &rule.properties {
        css.push_str(indent);
        css.push_str("  ");
        css.push_str(key);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }

    css.push_str(indent);
    css.push_str("}\n");
    if indent.is_empty() {
        css.push('\n');
    }
}

/// Print a CSS number: integers without decimals, otherwise at most two
pub fn css_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        // also folds -0 into 0
        format!("{}", rounded.trunc() as i64)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}

pub fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}

pub fn mm(value: f64) -> String {
    format!("{}mm", css_number(value))
}

/// Build the card stylesheet for `format`
pub fn stylesheet_document(format: &CardFormat) -> CssDocument {
    let width = mm(format.width_mm);
    let height = mm(format.height_mm);
    let mut doc = CssDocument::new();

    doc.add_rule(
        CssRule::new(".card-container")
            .prop("width", width.clone())
            .prop("height", height.clone())
            .prop("position", "relative")
            .prop("background", "white")
            .prop("border", "1px solid #ddd")
            .prop("border-top", "6px solid var(--function-color, #ddd)")
            .prop("margin", "20px")
            .prop("box-sizing", "border-box"),
    );
    doc.add_rule(
        CssRule::new(".card-side")
            .prop("width", width.clone())
            .prop("height", height.clone())
            .prop("position", "relative")
            .prop("overflow", "hidden"),
    );
    doc.add_rule(CssRule::new(".card-side.back").prop("display", "none"));
    doc.add_rule(CssRule::new(".card-side.standalone").prop("display", "block"));
    doc.add_rule(
        CssRule::new(".placeholder-element")
            .prop("position", "absolute")
            .prop("box-sizing", "border-box")
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("padding", "2px")
            .prop("border", "1px dashed #ccc")
            .prop("background", "rgba(255, 255, 255, 0.9)")
            .prop("font-family", "Arial, sans-serif")
            .prop("line-height", "1.2")
            .prop("overflow", "hidden")
            .prop("white-space", "nowrap")
            .prop("text-overflow", "ellipsis"),
    );
    doc.add_rule(
        CssRule::new(".placeholder-element.wrap")
            .prop("white-space", "normal")
            .prop("word-wrap", "break-word"),
    );
    doc.add_rule(
        CssRule::new(".placeholder-image")
            .prop("position", "absolute")
            .prop("object-fit", "cover"),
    );
    doc.add_rule(
        CssRule::new(".placeholder-code")
            .prop("position", "absolute")
            .prop("box-sizing", "border-box"),
    );
    doc.add_rule(
        CssRule::new(".placeholder-code svg")
            .prop("display", "block")
            .prop("width", "100%")
            .prop("height", "100%"),
    );
    doc.add_rule(
        CssRule::new("@page")
            .prop("size", format!("{} {}", width, height))
            .prop("margin", "0"),
    );

    doc.add_rule(
        CssRule::new(".card-container")
            .prop("height", "auto")
            .prop("margin", "0")
            .prop("border", "none")
            .media("print"),
    );
    doc.add_rule(
        CssRule::new(".card-side.back")
            .prop("display", "block")
            .prop("page-break-before", "always")
            .prop("break-before", "page")
            .media("print"),
    );
    doc.add_rule(
        CssRule::new(".placeholder-element")
            .prop("border", "none")
            .prop("background", "transparent")
            .media("print"),
    );

    doc
}

/// Compile the card stylesheet for `format` to CSS text
pub fn compile_stylesheet(format: &CardFormat) -> String {
    let doc = stylesheet_document(format);
    debug!(format = %format.name, rules = doc.rules.len(), "Compiled card stylesheet");
    doc.to_css()
}

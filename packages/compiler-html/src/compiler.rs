use crate::codes::{barcode_svg, qr_svg};
use badgecraft_common::{
    format_date, format_multiselect, optimal_font_size, truncate, value_to_display,
    DEFAULT_LOCALE, DEFAULT_MAX_FONT_SIZE, DEFAULT_MIN_FONT_SIZE,
};
use badgecraft_compiler_css::{compile_stylesheet, css_number, mm, px};
use badgecraft_model::{
    DataRecord, ElementType, FontWeight, Layout, PlaceholderElement, Side, TextAlign,
    TruncateMode, DEFAULT_FONT_SIZE,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while compiling card markup
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Code generation failed: {0}")]
    Code(String),
}

/// Options for card rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// BCP 47 tag used for date placeholders
    pub locale: String,
    /// Pretty print markup
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// Markup + stylesheet for one card, both faces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCard {
    pub markup: String,
    pub stylesheet: String,
}

struct Context<'a> {
    options: &'a RenderOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Render both faces of a card
pub fn render(layout: &Layout, record: &DataRecord, options: &RenderOptions) -> RenderedCard {
    let mut ctx = Context::new(options);

    open_container(layout, record, &mut ctx);
    for side in [Side::Front, Side::Back] {
        compile_face(layout, record, side, false, &mut ctx);
    }
    close_container(&mut ctx);

    info!(
        format = %layout.format.name,
        placeholders = layout.placeholders.len(),
        "Rendered card"
    );

    RenderedCard {
        markup: ctx.get_output(),
        stylesheet: compile_stylesheet(&layout.format),
    }
}

/// Render a single face on its own, visible regardless of media, for
/// rasterising one page at a time
pub fn render_face(
    layout: &Layout,
    record: &DataRecord,
    side: Side,
    options: &RenderOptions,
) -> String {
    let mut ctx = Context::new(options);

    open_container(layout, record, &mut ctx);
    compile_face(layout, record, side, true, &mut ctx);
    close_container(&mut ctx);

    ctx.get_output()
}

/// Accent colour for functions outside the known set
pub const FALLBACK_FUNCTION_COLOR: &str = "#6c757d";

/// Accent colour for the accreditation function printed on the card
pub fn function_color(function: &str) -> &'static str {
    match function {
        "athlete" => "#28a745",
        "official" => "#007bff",
        "media" => "#ffc107",
        "vip" => "#dc3545",
        "staff" => "#6c757d",
        "delegate" => "#17a2b8",
        _ => FALLBACK_FUNCTION_COLOR,
    }
}

fn open_container(layout: &Layout, record: &DataRecord, ctx: &mut Context) {
    let mut style = format!(
        "width:{};height:{};",
        mm(layout.format.width_mm),
        mm(layout.format.height_mm)
    );
    let mut attributes = format!(
        " data-format=\"{}\"",
        escape_html(&layout.format.name)
    );

    if let Some(function) = record.get_str("function").filter(|f| !f.is_empty()) {
        attributes.push_str(&format!(" data-function=\"{}\"", escape_html(function)));
        style.push_str(&format!("--function-color:{};", function_color(function)));
    }

    ctx.add_line(&format!(
        "<div class=\"card-container\"{} style=\"{}\">",
        attributes, style
    ));
    ctx.indent();
}

fn close_container(ctx: &mut Context) {
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_face(
    layout: &Layout,
    record: &DataRecord,
    side: Side,
    standalone: bool,
    ctx: &mut Context,
) {
    let class = if standalone {
        format!("card-side {} standalone", side.as_str())
    } else {
        format!("card-side {}", side.as_str())
    };
    ctx.add_line(&format!("<div class=\"{}\">", class));
    ctx.indent();

    for element in layout.side_elements(side) {
        compile_element(element, record, ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_element(element: &PlaceholderElement, record: &DataRecord, ctx: &mut Context) {
    debug!(id = %element.id, kind = %element.element_type, "Compiling placeholder");

    match element.element_type {
        ElementType::Image => compile_image(element, record, ctx),
        ElementType::Qr | ElementType::Barcode => compile_code(element, record, ctx),
        _ => compile_text(element, record, ctx),
    }
}

fn compile_text(element: &PlaceholderElement, record: &DataRecord, ctx: &mut Context) {
    let text = resolve_text(element, record, &ctx.options.locale);
    let font_size = effective_font_size(element, &text);

    let mut style = box_style(element);
    style.push_str(&format!("font-size:{};", px(font_size)));
    push_text_style(element, &mut style);

    let class = if element.truncate_mode() == TruncateMode::Wrap {
        "placeholder-element wrap"
    } else {
        "placeholder-element"
    };

    ctx.add_line(&format!(
        "<div class=\"{}\" data-id=\"{}\" data-key=\"{}\" style=\"{}\">{}</div>",
        class,
        escape_html(element.id.as_str()),
        escape_html(&element.data_key),
        escape_html(&style),
        escape_html(&text)
    ));
}

fn compile_image(element: &PlaceholderElement, record: &DataRecord, ctx: &mut Context) {
    let mut style = box_style(element);
    if let Some(radius) = element.border_radius {
        style.push_str(&format!("border-radius:{};", px(radius)));
    }

    let src = lookup(record, &element.data_key).map(value_to_display);
    match src.filter(|s| !s.trim().is_empty()) {
        Some(src) => {
            style.push_str("object-fit:cover;");
            ctx.add_line(&format!(
                "<img class=\"placeholder-image\" data-id=\"{}\" src=\"{}\" alt=\"{}\" style=\"{}\" onerror=\"this.style.display='none'\" />",
                escape_html(element.id.as_str()),
                escape_html(&src),
                escape_html(&element.label),
                escape_html(&style)
            ));
        }
        None => {
            ctx.add_line(&format!(
                "<div class=\"placeholder-image empty\" data-id=\"{}\" style=\"{}\"></div>",
                escape_html(element.id.as_str()),
                escape_html(&style)
            ));
        }
    }
}

fn compile_code(element: &PlaceholderElement, record: &DataRecord, ctx: &mut Context) {
    let mut style = box_style(element);
    if let Some(background) = &element.background_color {
        style.push_str(&format!("background-color:{};", background));
    }

    let payload = lookup(record, &element.data_key)
        .map(value_to_display)
        .filter(|s| !s.is_empty());

    let svg = payload.and_then(|payload| {
        let encoded = match element.element_type {
            ElementType::Barcode => barcode_svg(&payload, element.width, element.height),
            _ => qr_svg(&payload, element.width, element.height),
        };
        encoded
            .map_err(|e| warn!(id = %element.id, error = %e, "Leaving code placeholder empty"))
            .ok()
    });

    ctx.add_line(&format!(
        "<div class=\"placeholder-code {}\" data-id=\"{}\" style=\"{}\">{}</div>",
        element.element_type,
        escape_html(element.id.as_str()),
        escape_html(&style),
        svg.unwrap_or_default()
    ));
}

/// Display text of a text-like placeholder.
///
/// A record without a value for the key (missing or null) shows the label.
/// Truncation applies to whatever text results.
pub fn resolve_text(element: &PlaceholderElement, record: &DataRecord, locale: &str) -> String {
    let value = match lookup(record, &element.data_key) {
        Some(value) => value,
        None => return element.label.clone(),
    };

    let text = match element.element_type {
        ElementType::Date => format_date(Some(value), locale),
        ElementType::Multiselect => {
            format_multiselect(Some(value), &element.options, element.separator())
        }
        _ => value_to_display(value),
    };

    match element.max_length {
        Some(max_length) => truncate(&text, max_length, element.truncate_mode()),
        None => text,
    }
}

/// Font size the placeholder is rendered at
pub fn effective_font_size(element: &PlaceholderElement, text: &str) -> f64 {
    if element.auto_font_size {
        optimal_font_size(
            text,
            element.width,
            element.height,
            element.min_font_size.unwrap_or(DEFAULT_MIN_FONT_SIZE),
            element.max_font_size.unwrap_or(DEFAULT_MAX_FONT_SIZE),
        )
    } else {
        element.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }
}

fn lookup<'r>(record: &'r DataRecord, key: &str) -> Option<&'r Value> {
    record.get(key).filter(|value| !value.is_null())
}

fn box_style(element: &PlaceholderElement) -> String {
    format!(
        "position:absolute;left:{};top:{};width:{};height:{};",
        px(element.x),
        px(element.y),
        px(element.width),
        px(element.height)
    )
}

fn push_text_style(element: &PlaceholderElement, style: &mut String) {
    if let Some(family) = &element.font_family {
        style.push_str(&format!("font-family:{};", family));
    }
    if let Some(weight) = element.font_weight {
        let weight = match weight {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        };
        style.push_str(&format!("font-weight:{};", weight));
    }
    if let Some(align) = element.text_align {
        let (text_align, justify) = match align {
            TextAlign::Left => ("left", "flex-start"),
            TextAlign::Center => ("center", "center"),
            TextAlign::Right => ("right", "flex-end"),
        };
        style.push_str(&format!("text-align:{};justify-content:{};", text_align, justify));
    }
    if let Some(color) = &element.color {
        style.push_str(&format!("color:{};", color));
    }
    if let Some(background) = &element.background_color {
        style.push_str(&format!("background-color:{};", background));
    }
    if let Some(width) = element.border_width {
        let color = element.border_color.as_deref().unwrap_or("#000");
        style.push_str(&format!("border:{}px solid {};", css_number(width), color));
    }
    if let Some(radius) = element.border_radius {
        style.push_str(&format!("border-radius:{};", px(radius)));
    }
}

/// Escape text for use in element content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

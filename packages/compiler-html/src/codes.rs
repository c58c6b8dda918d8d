//! Inline SVG for code placeholders.

use crate::compiler::CompileError;
use barcoders::sym::code128::Code128;
use qrcode::render::svg;
use qrcode::QrCode;

/// QR code sized to fit the placeholder box, without the XML prolog
pub fn qr_svg(payload: &str, width: f64, height: f64) -> Result<String, CompileError> {
    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| CompileError::Code(format!("qr {:?}", e)))?;

    let side = width.min(height).max(1.0).floor() as u32;
    let image = code
        .render::<svg::Color>()
        .max_dimensions(side, side)
        .quiet_zone(false)
        .build();

    Ok(strip_prolog(&image).to_string())
}

/// Code 128 (character set B) barcode stretched over the placeholder box
pub fn barcode_svg(payload: &str, width: f64, height: f64) -> Result<String, CompileError> {
    let barcode = Code128::new(format!("\u{0181}{}", payload))
        .map_err(|e| CompileError::Code(format!("barcode {:?}", e)))?;
    let modules = barcode.encode();

    let mut bars = String::new();
    let mut start: Option<usize> = None;
    for (i, &module) in modules.iter().chain(std::iter::once(&0)).enumerate() {
        match (module == 1, start) {
            (true, None) => start = Some(i),
            (false, Some(from)) => {
                bars.push_str(&format!(
                    "<rect x=\"{}\" y=\"0\" width=\"{}\" height=\"1\"/>",
                    from,
                    i - from
                ));
                start = None;
            }
            _ => {}
        }
    }

    Ok(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} 1\" preserveAspectRatio=\"none\" shape-rendering=\"crispEdges\"><g fill=\"#000\">{}</g></svg>",
        width.max(1.0).round(),
        height.max(1.0).round(),
        modules.len(),
        bars
    ))
}

fn strip_prolog(image: &str) -> &str {
    match image.find("<svg") {
        Some(index) => &image[index..],
        None => image,
    }
}

//! # Display Formatting
//!
//! Pure helpers that turn raw record values into the text shown inside a
//! placeholder box. None of these functions fail: malformed input always
//! degrades to a best-effort string.
//!
//! The font-size solver is a closed-form heuristic rather than a measurement
//! against real font metrics, so the same input always yields the same size
//! on every output path.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MIN_FONT_SIZE: f64 = 8.0;
pub const DEFAULT_MAX_FONT_SIZE: f64 = 48.0;
pub const DEFAULT_LOCALE: &str = "de-CH";
pub const DEFAULT_MULTISELECT_SEPARATOR: &str = ", ";

/// Average glyph advance relative to the font size
const AVG_CHAR_WIDTH: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.2;
const ELLIPSIS: &str = "...";

/// How over-long text is shortened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateMode {
    #[default]
    Ellipsis,
    Cut,
    /// Leave the text alone and let the box wrap it
    Wrap,
}

/// Width/height pair produced by [`scale_to_fit`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Solve a single-line font size that fits `text` into the container.
///
/// `min(max(min(widthBased, heightBased), min_size), max_size)` where the
/// width bound assumes an average glyph of `0.6em` over 90% of the width and
/// the height bound fills 80% of the height at a `1.2` line height.
pub fn optimal_font_size(
    text: &str,
    container_width: f64,
    container_height: f64,
    min_size: f64,
    max_size: f64,
) -> f64 {
    let chars = text.chars().count();
    if chars == 0 || !(container_width > 0.0) || !(container_height > 0.0) {
        return min_size;
    }

    let width_based = (container_width * 0.9) / (chars as f64 * AVG_CHAR_WIDTH);
    let height_based = (container_height * 0.8) / LINE_HEIGHT;

    width_based.min(height_based).max(min_size).min(max_size)
}

/// Shorten `text` to at most `max_length` characters.
///
/// Lengths are counted in Unicode scalar values. An ellipsis needs room for
/// its three dots, so below a limit of 3 it falls back to a plain cut.
pub fn truncate(text: &str, max_length: usize, mode: TruncateMode) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    match mode {
        TruncateMode::Cut => text.chars().take(max_length).collect(),
        TruncateMode::Ellipsis if max_length >= ELLIPSIS.len() => {
            let mut out: String = text.chars().take(max_length - ELLIPSIS.len()).collect();
            out.push_str(ELLIPSIS);
            out
        }
        TruncateMode::Ellipsis => text.chars().take(max_length).collect(),
        TruncateMode::Wrap => text.to_string(),
    }
}

/// Coerce any record value to its display string
pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_display)
            .collect::<Vec<_>>()
            .join(DEFAULT_MULTISELECT_SEPARATOR),
        Value::Object(_) => value.to_string(),
    }
}

/// Join the selected entries of a multiselect value.
///
/// Entries not listed in `options` are dropped; an empty `options` list
/// accepts everything. Scalars are shown as-is.
pub fn format_multiselect(value: Option<&Value>, options: &[String], separator: &str) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(value_to_display)
            .filter(|entry| options.is_empty() || options.iter().any(|o| o == entry))
            .collect::<Vec<_>>()
            .join(separator),
        Some(other) => value_to_display(other),
    }
}

/// Format a date value for `locale`, returning the raw text when it does not
/// parse as a date. Falsy values (null, `false`, `0`, `""`) format as empty.
pub fn format_date(value: Option<&Value>, locale: &str) -> String {
    let value = match value {
        Some(v) if !is_falsy(v) => v,
        _ => return String::new(),
    };

    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        Value::String(s) => parse_date(s.trim()),
        _ => None,
    };

    match parsed {
        Some(date) => date.format(locale_date_pattern(locale)).to_string(),
        None => value_to_display(value),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Accepts RFC 3339 timestamps, ISO dates/date-times and Swiss `dd.mm.yyyy`
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
            return Some(dt.date());
        }
    }
    for pattern in ["%Y-%m-%d", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
            return Some(date);
        }
    }
    None
}

/// strftime pattern for a BCP 47 locale tag, ISO for anything unknown
pub fn locale_date_pattern(locale: &str) -> &'static str {
    match locale.to_ascii_lowercase().as_str() {
        "de" | "de-ch" | "de-de" | "de-at" | "it-ch" => "%-d.%-m.%Y",
        "fr-ch" => "%d.%m.%Y",
        "fr" | "fr-fr" | "en-gb" => "%d/%m/%Y",
        "it" | "it-it" => "%-d/%-m/%Y",
        "en" | "en-us" => "%-m/%-d/%Y",
        _ => "%Y-%m-%d",
    }
}

/// Uniformly scale a natural size down (or up) to fit inside a box
pub fn scale_to_fit(natural_width: f64, natural_height: f64, max_width: f64, max_height: f64) -> Dimensions {
    if !(natural_width > 0.0) || !(natural_height > 0.0) {
        return Dimensions { width: 0.0, height: 0.0 };
    }

    let ratio = (max_width / natural_width).min(max_height / natural_height);
    Dimensions {
        width: natural_width * ratio,
        height: natural_height * ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_font_size_stays_within_bounds() {
        let long = "W".repeat(400);
        let samples = ["A", "RUETHEMANN, Christoph", "x", long.as_str()];
        for text in samples {
            for (w, h) in [(1.0, 1.0), (150.0, 30.0), (2000.0, 900.0), (10.0, 400.0)] {
                let size = optimal_font_size(text, w, h, 8.0, 48.0);
                assert!((8.0..=48.0).contains(&size), "{} in {}x{} -> {}", text, w, h, size);
            }
        }
    }

    #[test]
    fn test_font_size_degenerate_inputs_return_min() {
        assert_eq!(optimal_font_size("", 200.0, 40.0, 8.0, 48.0), 8.0);
        assert_eq!(optimal_font_size("Name", 0.0, 40.0, 10.0, 48.0), 10.0);
        assert_eq!(optimal_font_size("Name", 200.0, -5.0, 9.0, 48.0), 9.0);
    }

    #[test]
    fn test_font_size_formula() {
        // width: 0.9*150 / (10*0.6) = 22.5, height: 0.8*30/1.2 = 20
        let size = optimal_font_size("abcdefghij", 150.0, 30.0, 8.0, 48.0);
        assert!((size - 20.0).abs() < 1e-9);

        // width bound wins for long text: 0.9*120 / (20*0.6) = 9
        let size = optimal_font_size(&"a".repeat(20), 120.0, 300.0, 8.0, 48.0);
        assert!((size - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_truncate_modes() {
        assert_eq!(truncate("Switzerland", 6, TruncateMode::Cut), "Switze");
        assert_eq!(truncate("Switzerland", 6, TruncateMode::Ellipsis), "Swi...");
        assert_eq!(truncate("Switzerland", 6, TruncateMode::Wrap), "Switzerland");
        assert_eq!(truncate("Swiss", 6, TruncateMode::Ellipsis), "Swiss");
        assert_eq!(truncate("Swiss", 5, TruncateMode::Cut), "Swiss");
    }

    #[test]
    fn test_ellipsis_length_is_exact() {
        let text = "Accreditation";
        for n in 3..text.len() {
            assert_eq!(truncate(text, n, TruncateMode::Ellipsis).chars().count(), n);
        }
    }

    #[test]
    fn test_ellipsis_below_three_falls_back_to_cut() {
        assert_eq!(truncate("Zurich", 2, TruncateMode::Ellipsis), "Zu");
        assert_eq!(truncate("Zurich", 0, TruncateMode::Ellipsis), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Zürich-Kloten", 6, TruncateMode::Cut), "Zürich");
    }

    #[test]
    fn test_multiselect_filters_and_joins() {
        let options = vec!["A".to_string(), "C".to_string()];
        assert_eq!(format_multiselect(Some(&json!(["A", "B", "C"])), &options, "-"), "A-C");
        assert_eq!(format_multiselect(Some(&json!([])), &options, "-"), "");
        assert_eq!(format_multiselect(Some(&json!(["A", "B"])), &[], " / "), "A / B");
        assert_eq!(format_multiselect(Some(&json!("VIP")), &options, "-"), "VIP");
        assert_eq!(format_multiselect(None, &options, "-"), "");
        assert_eq!(format_multiselect(Some(&json!([1, 2])), &[], ","), "1,2");
    }

    #[test]
    fn test_format_date_locales() {
        let value = json!("2024-03-05");
        assert_eq!(format_date(Some(&value), "de-CH"), "5.3.2024");
        assert_eq!(format_date(Some(&value), "en-US"), "3/5/2024");
        assert_eq!(format_date(Some(&value), "en-GB"), "05/03/2024");
        assert_eq!(format_date(Some(&value), "xx-YY"), "2024-03-05");
    }

    #[test]
    fn test_format_date_accepts_timestamps_and_swiss_dates() {
        assert_eq!(format_date(Some(&json!("2024-07-26T18:30:00Z")), "de-CH"), "26.7.2024");
        assert_eq!(format_date(Some(&json!("2024-07-26T18:30:00")), "de-CH"), "26.7.2024");
        assert_eq!(format_date(Some(&json!("01.08.2025")), "de-CH"), "1.8.2025");
        assert_eq!(format_date(Some(&json!(1_000)), "de-CH"), "1.1.1970");
    }

    #[test]
    fn test_format_date_falls_back_to_raw_text() {
        assert_eq!(format_date(Some(&json!("next tuesday")), "de-CH"), "next tuesday");
        assert_eq!(format_date(Some(&json!(true)), "de-CH"), "true");
        assert_eq!(format_date(Some(&json!("")), "de-CH"), "");
        assert_eq!(format_date(None, "de-CH"), "");
    }

    #[test]
    fn test_format_date_falsy_values_are_empty() {
        for value in [json!(0), json!(0.0), json!(false), json!(""), json!(null)] {
            assert_eq!(format_date(Some(&value), "de-CH"), "", "{}", value);
        }
    }

    #[test]
    fn test_scale_to_fit_preserves_aspect_ratio() {
        let dims = scale_to_fit(400.0, 200.0, 100.0, 100.0);
        assert_eq!(dims, Dimensions { width: 100.0, height: 50.0 });

        let dims = scale_to_fit(30.0, 60.0, 90.0, 90.0);
        assert_eq!(dims, Dimensions { width: 45.0, height: 90.0 });
    }

    #[test]
    fn test_scale_to_fit_guards_zero_dimensions() {
        let dims = scale_to_fit(0.0, 100.0, 80.0, 80.0);
        assert_eq!(dims, Dimensions { width: 0.0, height: 0.0 });
    }

    #[test]
    fn test_value_to_display() {
        assert_eq!(value_to_display(&json!(null)), "");
        assert_eq!(value_to_display(&json!(42)), "42");
        assert_eq!(value_to_display(&json!(["LU", "1"])), "LU, 1");
    }
}

//! Render benchmarks
//!
//! Target: render a fully populated card in <1ms

use badgecraft_compiler_html::{render, RenderOptions};
use badgecraft_model::{
    default_placeholders, CardFormat, DataRecord, ElementType, Layout, PlaceholderElement, Side,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn record() -> DataRecord {
    let mut record = DataRecord::new();
    record.insert("name", json!("RUETHEMANN, Christoph"));
    record.insert("rank", json!("Head of Delegation"));
    record.insert("function", json!("official"));
    record.insert("zones", json!(["1", "2", "5"]));
    record.insert("validUntil", json!("2024-08-11"));
    record.insert("cardNumber", json!("CARD-000042"));
    record
}

fn render_default_card(c: &mut Criterion) {
    let layout = Layout::new(CardFormat::a5_landscape()).with_placeholders(default_placeholders());
    let record = record();
    let options = RenderOptions::default();

    c.bench_function("render_default_card", |b| {
        b.iter(|| render(black_box(&layout), black_box(&record), &options))
    });
}

fn render_crowded_card(c: &mut Criterion) {
    let mut placeholders = Vec::new();
    for i in 0..100 {
        let mut el = PlaceholderElement::new(
            format!("text_{}", i),
            ElementType::Text,
            "name",
            (i % 10) as f64 * 50.0,
            (i / 10) as f64 * 40.0,
        )
        .with_side(if i % 2 == 0 { Side::Front } else { Side::Back });
        el.auto_font_size = true;
        placeholders.push(el);
    }
    let layout = Layout::new(CardFormat::a4_portrait()).with_placeholders(placeholders);
    let record = record();
    let options = RenderOptions::default();

    c.bench_function("render_100_auto_sized_placeholders", |b| {
        b.iter(|| render(black_box(&layout), black_box(&record), &options))
    });
}

fn render_codes(c: &mut Criterion) {
    let layout = Layout::new(CardFormat::a6_portrait()).with_placeholders(vec![
        PlaceholderElement::new("qr_1", ElementType::Qr, "cardNumber", 10.0, 10.0)
            .with_size(120.0, 120.0),
        PlaceholderElement::new("barcode_1", ElementType::Barcode, "cardNumber", 10.0, 200.0),
    ]);
    let record = record();
    let options = RenderOptions::default();

    c.bench_function("render_qr_and_barcode", |b| {
        b.iter(|| render(black_box(&layout), black_box(&record), &options))
    });
}

criterion_group!(benches, render_default_card, render_crowded_card, render_codes);
criterion_main!(benches);

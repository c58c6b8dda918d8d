//! Integration tests for editor crate

use badgecraft_editor::{
    Alignment, CardDocument, CardFormat, DataRecord, EditSession, EditorError, ElementId,
    ElementType, Layout, MutationError, PlaceholderElement, RecordingSurface, Side,
    TemplateError,
};
use badgecraft_model::default_placeholders;
use serde_json::json;

fn record() -> DataRecord {
    let mut record = DataRecord::new();
    record.insert("name", json!("RUETHEMANN, Christoph"));
    record.insert("rank", json!("Head of Delegation"));
    record.insert("function", json!("official"));
    record
}

fn session_with(placeholders: Vec<PlaceholderElement>) -> EditSession<RecordingSurface> {
    let layout = Layout::new(CardFormat::a5_landscape()).with_placeholders(placeholders);
    EditSession::new(CardDocument::new(layout, record()), RecordingSurface::new())
}

fn text(id: &str, x: f64, y: f64) -> PlaceholderElement {
    PlaceholderElement::new(id, ElementType::Text, "name", x, y)
}

#[test]
fn test_undo_redo_positions() {
    let mut session = session_with(vec![text("name", 50.0, 100.0)]);
    let id = ElementId::from("name");

    session.checkpoint();
    let mut moved = session.layout().get(&id).unwrap().clone();
    moved.x = 120.0;
    moved.y = 40.0;
    session.update_element(moved).unwrap();
    session.checkpoint();
    session.select_element(&id).unwrap();

    assert!(session.undo());
    let el = session.layout().get(&id).unwrap();
    assert_eq!((el.x, el.y), (50.0, 100.0));
    assert!(session.selection.is_empty());
    assert!(!session.undo());

    assert!(session.redo());
    let el = session.layout().get(&id).unwrap();
    assert_eq!((el.x, el.y), (120.0, 40.0));
    assert!(!session.redo());
}

#[test]
fn test_align_left_over_selection() {
    let mut session = session_with(vec![
        text("a", 30.0, 0.0),
        text("b", 10.0, 50.0),
        text("c", 50.0, 100.0),
    ]);

    session.toggle_multi_select(&"a".into()).unwrap();
    session.toggle_multi_select(&"b".into()).unwrap();
    session.select_element(&"c".into()).unwrap();
    session.align(Alignment::Left).unwrap();

    let xs: Vec<f64> = session.layout().placeholders.iter().map(|el| el.x).collect();
    assert_eq!(xs, vec![10.0, 10.0, 10.0]);
    let ys: Vec<f64> = session.layout().placeholders.iter().map(|el| el.y).collect();
    assert_eq!(ys, vec![0.0, 50.0, 100.0]);
}

#[test]
fn test_align_needs_two_elements() {
    let mut session = session_with(vec![text("a", 30.0, 0.0), text("b", 10.0, 50.0)]);
    session.select_element(&"a".into()).unwrap();

    let err = session.align(Alignment::Right).unwrap_err();
    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::AlignmentNeedsTwo(1))
    ));
}

#[test]
fn test_add_placeholder_defaults() {
    let mut session = session_with(Vec::new());
    session.switch_side(Side::Back).unwrap();

    let id = session.add_placeholder(ElementType::Image, 10.0, 20.0).unwrap();
    assert_eq!(id.as_str(), "image_1");

    let el = session.layout().get(&id).unwrap();
    assert_eq!((el.width, el.height), (80.0, 80.0));
    assert_eq!(el.font_size, Some(14.0));
    assert_eq!(el.data_key, "name");
    assert_eq!(el.label, "New image");
    assert_eq!(el.side, Side::Back);
    assert_eq!(session.selection.primary, Some(id));

    let next = session.add_placeholder(ElementType::Text, 0.0, 0.0).unwrap();
    assert_eq!(next.as_str(), "text_2");
}

#[test]
fn test_new_placeholder_without_record_keys_binds_name() {
    let layout = Layout::new(CardFormat::a5_landscape());
    let mut session = EditSession::new(CardDocument::new(layout, DataRecord::new()), RecordingSurface::new());

    let id = session.add_placeholder(ElementType::Date, 0.0, 0.0).unwrap();
    assert_eq!(session.layout().get(&id).unwrap().data_key, "name");
    assert!(session.available_keys().is_empty());
}

#[test]
fn test_delete_clears_selection() {
    let mut session = session_with(vec![text("a", 0.0, 0.0), text("b", 0.0, 0.0)]);
    session.select_element(&"a".into()).unwrap();
    session.toggle_multi_select(&"a".into()).unwrap();
    session.toggle_multi_select(&"b".into()).unwrap();

    session.delete_element(&"a".into()).unwrap();
    assert_eq!(session.selection.primary, None);
    assert!(!session.selection.multi.contains(&"a".into()));
    assert!(session.selection.multi.contains(&"b".into()));

    assert!(session.delete_element(&"a".into()).is_err());
}

#[test]
fn test_working_copy_write_back() {
    let mut session = session_with(vec![text("name", 50.0, 100.0)]);
    assert!(session.selected_working_copy().is_none());

    session.select_element(&"name".into()).unwrap();
    let mut copy = session.selected_working_copy().unwrap();
    copy.label = "Full name".to_string();
    copy.font_size = Some(18.0);

    // the live element is untouched until written back
    assert_eq!(session.layout().get(&"name".into()).unwrap().font_size, Some(14.0));

    session.update_element(copy.clone()).unwrap();
    assert_eq!(session.layout().get(&"name".into()), Some(&copy));
}

#[test]
fn test_copy_element() {
    let mut session = session_with(vec![text("text_1", 50.0, 100.0).with_label("Name")]);

    let copy_id = session.copy_element(&"text_1".into()).unwrap();
    assert_eq!(copy_id.as_str(), "text_2");

    let copy = session.layout().placeholders.last().unwrap();
    assert_eq!(copy.id, copy_id);
    assert_eq!((copy.x, copy.y), (70.0, 120.0));
    assert_eq!(copy.label, "Name (Copy)");
    assert_eq!(session.selection.primary, Some(copy_id));
}

#[test]
fn test_z_order() {
    let mut session = session_with(vec![text("a", 0.0, 0.0), text("b", 0.0, 0.0), text("c", 0.0, 0.0)]);

    session.bring_to_front(&"a".into()).unwrap();
    session.send_to_back(&"c".into()).unwrap();

    let order: Vec<&str> = session.layout().placeholders.iter().map(|el| el.id.as_str()).collect();
    assert_eq!(order, vec!["c", "b", "a"]);
}

#[test]
fn test_switch_side() {
    let mut session = session_with(vec![
        text("front", 0.0, 0.0),
        text("back", 0.0, 0.0).with_side(Side::Back),
    ]);
    session.select_element(&"front".into()).unwrap();

    session.switch_side(Side::Back).unwrap();
    assert!(session.selection.is_empty());

    let ids: Vec<&str> = session.current_side_elements().iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["back"]);
}

#[test]
fn test_out_of_bounds_flagged_not_corrected() {
    let mut session = session_with(Vec::new());
    let width = session.canvas_size().0;

    let mut outside = text("outside", 0.0, 0.0);
    outside.x = width;
    session.document.apply(badgecraft_editor::Mutation::AddPlaceholder { element: outside.clone() }).unwrap();

    assert_eq!(session.out_of_bounds(), vec![ElementId::from("outside")]);
    assert_eq!(session.layout().get(&"outside".into()), Some(&outside));
}

#[test]
fn test_smaller_format_flags_elements() {
    let mut session = session_with(vec![text("far", 500.0, 300.0), text("near", 10.0, 10.0)]);
    assert!(session.out_of_bounds().is_empty());

    let flagged = session.set_format(CardFormat::a6_portrait()).unwrap();
    assert_eq!(flagged, vec![ElementId::from("far")]);
    assert_eq!(session.layout().get(&"far".into()).unwrap().x, 500.0);
}

#[test]
fn test_template_round_trip_through_session() {
    let mut session = session_with(default_placeholders());
    session.set_format(CardFormat::a4_portrait()).unwrap();
    let json = session.save_template().unwrap();
    assert!(!session.document.is_dirty());

    let mut other = session_with(Vec::new());
    let update = other.load_template(&json).unwrap();

    assert_eq!(other.layout().placeholders, session.layout().placeholders);
    assert_eq!(other.layout().format, CardFormat::a4_portrait());
    assert_eq!(update.map(|u| u.record), Some(record()));
}

#[test]
fn test_load_resumes_ids_and_clears_selection() {
    let mut session = session_with(vec![text("a", 0.0, 0.0)]);
    session.select_element(&"a".into()).unwrap();

    let json = r#"{"placeholders": [
        {"id": "text_7", "type": "text", "dataKey": "name", "label": "Name",
         "x": 0, "y": 0, "width": 100, "height": 20}
    ]}"#;
    let update = session.load_template(json).unwrap();

    assert!(update.is_none());
    assert!(session.selection.is_empty());
    assert_eq!(session.layout().format, CardFormat::a5_landscape());
    assert_eq!(session.record(), &record());

    let id = session.add_placeholder(ElementType::Text, 0.0, 0.0).unwrap();
    assert_eq!(id.as_str(), "text_8");
}

#[test]
fn test_load_with_huge_id_suffix_keeps_ids_flowing() {
    let mut session = session_with(Vec::new());
    let json = r#"{"placeholders": [
        {"id": "text_18446744073709551615", "type": "text", "dataKey": "name", "label": "Name",
         "x": 0, "y": 0, "width": 100, "height": 20}
    ]}"#;
    session.load_template(json).unwrap();

    let id = session.add_placeholder(ElementType::Text, 0.0, 0.0).unwrap();
    assert_eq!(id.as_str(), "text_1");
    let copy = session.copy_element(&"text_18446744073709551615".into()).unwrap();
    assert_eq!(copy.as_str(), "text_2");
}

#[test]
fn test_bad_template_leaves_layout_untouched() {
    let mut session = session_with(vec![text("a", 0.0, 0.0)]);
    let before = session.layout().clone();

    let err = session.load_template("{ placeholders: oops").unwrap_err();
    assert!(matches!(err, EditorError::Template(TemplateError::Json(_))));
    assert_eq!(session.layout(), &before);

    let notices = &session.surface().notices;
    assert_eq!(notices.len(), 1);
    assert!(notices[0].starts_with("Error loading template"));
}

#[test]
fn test_print() {
    let mut session = session_with(vec![text("name", 50.0, 100.0)]);
    session.print().unwrap();

    let jobs = &session.surface().print_jobs;
    assert_eq!(jobs.len(), 1);
    assert!(jobs[0].markup.contains("RUETHEMANN, Christoph"));
    assert!(jobs[0].stylesheet.contains("@media print"));
}

#[test]
fn test_blocked_print_is_reported() {
    let layout = Layout::new(CardFormat::a5_landscape());
    let mut session = EditSession::new(CardDocument::new(layout, record()), RecordingSurface::blocked());

    assert!(matches!(session.print(), Err(EditorError::Surface(_))));
    assert_eq!(session.surface().notices.len(), 1);
    assert!(session.surface().print_jobs.is_empty());
}

#[test]
fn test_set_record_changes_available_keys() {
    let mut session = session_with(Vec::new());
    assert_eq!(session.available_keys(), vec!["name", "rank", "function"]);

    let mut next = DataRecord::new();
    next.insert("cardId", json!("CARD-000001"));
    session.set_record(next).unwrap();
    assert_eq!(session.available_keys(), vec!["cardId"]);
}

use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::RED);

    let c: Color = serde_json::from_value(json!("#0000FF80")).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));
}

#[test]
fn parses_unit_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 1.0, "g": 0.0, "b": 0.0})).unwrap();
    assert_eq!(c, Color::RED);

    let c: Color = serde_json::from_value(json!([0.0, 0.0, 0.0, 0.0])).unwrap();
    assert_eq!(c, Color::TRANSPARENT);
}

#[test]
fn rejects_malformed_colors() {
    assert!(serde_json::from_value::<Color>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Color>(json!("#gg0000")).is_err());
    assert!(serde_json::from_value::<Color>(json!([1.0, 0.0])).is_err());
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Color::rgba(0x12, 0xab, 0x00, 0xff)).unwrap();
    assert_eq!(v, json!("#12ab00ff"));
}

#[test]
fn axis_picks_component() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(Axis::X.pick(v), 3.0);
    assert_eq!(Axis::Y.pick(v), 4.0);
}

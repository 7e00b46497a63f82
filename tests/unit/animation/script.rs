use super::*;
use crate::animation::{group::TimelineRecorder, property::AnimatableProperty};

const FADE_AND_GROW: &str = r#"
{
  "target": {
    "name": "card",
    "size": { "width": null, "actual_width": 120.0, "actual_height": 40.0 }
  },
  "duration_ms": 400,
  "steps": [
    { "property": "opacity", "from": 0.0, "to": 1.0 },
    { "property": "size_axis", "axis": "x", "to": 200.0, "easing": "cubic_ease_out" },
    { "property": "translation", "to": { "x": 0.0, "y": 12.0 } }
  ]
}
"#;

#[test]
fn configures_builder_from_json() {
    let script = AnimationScript::from_json_str(FADE_AND_GROW).unwrap();
    let backend = TimelineRecorder::new();
    let mut b = AnimationBuilder::new(&backend, script.target.clone());
    script.configure(&mut b).unwrap();
    assert_eq!(b.factories().len(), 4);

    b.start().unwrap();
    let created = backend.created();
    assert_eq!(created.len(), 4);
    assert!(created.iter().all(|a| a.duration == Duration::from_millis(400)));
    assert_eq!(created[1].property, AnimatableProperty::Width);
    assert_eq!(created[1].from, Some(120.0));
    assert_eq!(created[1].easing, Easing::CubicEaseOut);
}

#[test]
fn unsupported_steps_surface_their_error() {
    let script = AnimationScript::from_json_str(
        r#"{ "steps": [
            { "property": "scale", "to": 2.0 },
            { "property": "clip", "side": "left", "to": 5.0 },
            { "property": "rotation", "to": 90.0 }
        ] }"#,
    )
    .unwrap();
    let backend = TimelineRecorder::new();
    let mut b = AnimationBuilder::new(&backend, script.target.clone());
    let err = script.configure(&mut b).unwrap_err();
    assert!(matches!(err, FxError::UnsupportedOperation(_)));
    assert_eq!(b.factories().len(), 2);
}

#[test]
fn rejects_unknown_properties() {
    let err = AnimationScript::from_json_str(r#"{ "steps": [{ "property": "skew", "to": 1 }] }"#)
        .unwrap_err();
    assert!(matches!(err, FxError::Serde(_)));
}

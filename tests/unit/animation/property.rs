use super::*;
use crate::foundation::core::Vec2;

const MS_300: Duration = Duration::from_millis(300);

#[test]
fn explicit_and_current_start_values() {
    let f = AnimationFactory::new(AnimatableProperty::Opacity, Some(0.0), 1.0, Easing::Linear);
    assert_eq!(f.from, StartValue::Explicit(0.0));
    let t = f.resolve(None, MS_300, Duration::ZERO);
    assert_eq!(t.from, Some(0.0));
    assert_eq!(t.duration, MS_300);
    assert!(!t.layout_dependent);

    let f = AnimationFactory::new(AnimatableProperty::Rotation, None, 90.0, Easing::Linear);
    assert_eq!(f.resolve(None, MS_300, Duration::ZERO).from, None);
}

#[test]
fn measured_fallback_uses_measured_size_only_when_unresolved() {
    let f = AnimationFactory {
        property: AnimatableProperty::Width,
        from: StartValue::MeasuredFallback(Axis::X),
        to: 100.0,
        easing: Easing::Linear,
    };

    let unresolved = LayoutSize::unresolved(Vec2::new(42.0, 10.0));
    let t = f.resolve(Some(unresolved), MS_300, Duration::ZERO);
    assert_eq!(t.from, Some(42.0));
    assert!(t.layout_dependent);

    let authored = LayoutSize::new(Vec2::new(80.0, 10.0), Vec2::new(42.0, 10.0));
    let t = f.resolve(Some(authored), MS_300, Duration::ZERO);
    assert_eq!(t.from, None);

    let t = f.resolve(None, MS_300, Duration::ZERO);
    assert_eq!(t.from, None);
    assert!(t.layout_dependent);
}

#[test]
fn sample_honours_delay_and_easing() {
    let t = TimedAnimation {
        property: AnimatableProperty::TranslateX,
        from: None,
        to: 100.0,
        easing: Easing::Linear,
        duration: Duration::from_millis(200),
        delay: Duration::from_millis(100),
        layout_dependent: false,
    };
    assert_eq!(t.sample(20.0, Duration::from_millis(50)), 20.0);
    assert_eq!(t.sample(20.0, Duration::from_millis(200)), 60.0);
    assert_eq!(t.sample(20.0, Duration::from_millis(1000)), 100.0);
}

#[test]
fn zero_duration_jumps_to_target() {
    let t = AnimationFactory::new(AnimatableProperty::ScaleX, Some(1.0), 2.0, Easing::Linear)
        .resolve(None, Duration::ZERO, Duration::ZERO);
    assert_eq!(t.sample(0.0, Duration::ZERO), 2.0);
}

#[test]
fn timed_animation_serializes_millis() {
    let t = AnimationFactory::new(AnimatableProperty::Opacity, Some(0.0), 1.0, Easing::Linear)
        .resolve(None, MS_300, Duration::from_millis(50));
    let v = serde_json::to_value(t).unwrap();
    assert_eq!(v["property"], "Opacity");
    assert_eq!(v["duration_ms"], 300.0);
    assert_eq!(v["delay_ms"], 50.0);
}

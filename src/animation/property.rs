use std::time::Duration;

use crate::{animation::ease::Easing, animation::target::LayoutSize, foundation::core::Axis};

/// Property a timed animation drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AnimatableProperty {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal translation.
    TranslateX,
    /// Vertical translation.
    TranslateY,
    /// Horizontal scale.
    ScaleX,
    /// Vertical scale.
    ScaleY,
    /// Rotation in degrees.
    Rotation,
    /// Layout width.
    Width,
    /// Layout height.
    Height,
}

impl AnimatableProperty {
    /// Translation property for `axis`.
    pub fn translate(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::TranslateX,
            Axis::Y => Self::TranslateY,
        }
    }

    /// Size property for `axis`.
    pub fn size(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::Width,
            Axis::Y => Self::Height,
        }
    }

    /// Stable property identifier handed to backends.
    pub fn id(self) -> &'static str {
        match self {
            Self::Opacity => "Opacity",
            Self::TranslateX => "TranslateX",
            Self::TranslateY => "TranslateY",
            Self::ScaleX => "ScaleX",
            Self::ScaleY => "ScaleY",
            Self::Rotation => "Rotation",
            Self::Width => "Width",
            Self::Height => "Height",
        }
    }

    /// Properties that force a layout pass on every tick.
    pub fn is_layout_dependent(self) -> bool {
        matches!(self, Self::Width | Self::Height)
    }
}

/// Where an animation starts from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartValue {
    /// Whatever value the property holds when the animation begins.
    Current,
    /// A caller-supplied start value, used verbatim.
    Explicit(f64),
    /// The target's measured size on this axis when its authored size is unresolved,
    /// otherwise [`StartValue::Current`]. Resolved at materialization; a target without
    /// layout size at that point also falls back to [`StartValue::Current`].
    MeasuredFallback(Axis),
}

impl From<Option<f64>> for StartValue {
    fn from(from: Option<f64>) -> Self {
        from.map_or(Self::Current, Self::Explicit)
    }
}

/// A duration-independent description of one property animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationFactory {
    /// Animated property.
    pub property: AnimatableProperty,
    /// Where the animation starts.
    pub from: StartValue,
    /// Final value.
    pub to: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl AnimationFactory {
    /// Factory with an explicit or current-value start.
    pub fn new(property: AnimatableProperty, from: Option<f64>, to: f64, easing: Easing) -> Self {
        Self {
            property,
            from: from.into(),
            to,
            easing,
        }
    }

    /// Bind this factory to concrete timing.
    ///
    /// Never fails: a measured fallback on a target that lost its layout size since the request
    /// was recorded starts from the current value.
    pub fn resolve(
        &self,
        layout: Option<LayoutSize>,
        duration: Duration,
        delay: Duration,
    ) -> TimedAnimation {
        let from = match self.from {
            StartValue::Current => None,
            StartValue::Explicit(v) => Some(v),
            StartValue::MeasuredFallback(axis) => layout.and_then(|layout| {
                let authored = axis.pick(layout.authored);
                authored.is_nan().then(|| axis.pick(layout.measured))
            }),
        };

        TimedAnimation {
            property: self.property,
            from,
            to: self.to,
            easing: self.easing,
            duration,
            delay,
            layout_dependent: self.property.is_layout_dependent(),
        }
    }
}

/// A property animation bound to a duration, ready for a backend.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimedAnimation {
    /// Animated property.
    pub property: AnimatableProperty,
    /// Start value; `None` starts from the current value.
    pub from: Option<f64>,
    /// Final value.
    pub to: f64,
    /// Easing curve.
    pub easing: Easing,
    /// Shared group duration.
    #[serde(rename = "duration_ms", serialize_with = "millis")]
    pub duration: Duration,
    /// Start delay.
    #[serde(rename = "delay_ms", serialize_with = "millis")]
    pub delay: Duration,
    /// Whether the backend must refresh layout before starting.
    pub layout_dependent: bool,
}

impl TimedAnimation {
    /// Property value `elapsed` after the animation was begun, starting from `current` when
    /// no explicit start value was resolved.
    pub fn sample(&self, current: f64, elapsed: Duration) -> f64 {
        let from = self.from.unwrap_or(current);
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return from;
        };
        let t = if self.duration.is_zero() {
            1.0
        } else {
            active.as_secs_f64() / self.duration.as_secs_f64()
        };
        from + (self.to - from) * self.easing.apply(t)
    }
}

fn millis<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(d.as_nanos() as f64 / 1e6)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/property.rs"]
mod tests;

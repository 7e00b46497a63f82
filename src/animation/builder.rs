use std::time::Duration;

use crate::{
    animation::ease::Easing,
    animation::group::{AnimationBackend, AnimationGroup, GroupCompletion},
    animation::property::{AnimatableProperty, AnimationFactory, StartValue},
    animation::target::AnimationTarget,
    foundation::core::{Axis, Side, Vec2},
    foundation::error::{FxError, FxResult},
};

/// Timing defaults for new builders.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Duration used by [`AnimationBuilder::start`], in milliseconds.
    pub default_duration_ms: u64,
    /// Delay applied to every animation unless overridden, in milliseconds.
    pub default_delay_ms: u64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            default_duration_ms: 250,
            default_delay_ms: 0,
        }
    }
}

/// Fluent builder that records property animations for one target.
///
/// Requests are stored as [`AnimationFactory`] values and only bound to a duration when the
/// builder is materialized or started, so the same builder can be replayed at different
/// speeds. Every start builds a fresh [`AnimationGroup`].
///
/// Offset and clip requests are always rejected, and size requests are rejected for targets
/// without a layout size; a rejected request leaves the builder untouched.
pub struct AnimationBuilder<'a, B: AnimationBackend> {
    backend: &'a B,
    target: B::Target,
    factories: Vec<AnimationFactory>,
    duration: Duration,
    delay: Duration,
}

impl<'a, B: AnimationBackend> AnimationBuilder<'a, B> {
    /// Builder with default options.
    pub fn new(backend: &'a B, target: B::Target) -> Self {
        Self::with_options(backend, target, &AnimationOptions::default())
    }

    /// Builder with explicit default duration and delay.
    pub fn with_options(backend: &'a B, target: B::Target, opts: &AnimationOptions) -> Self {
        Self {
            backend,
            target,
            factories: Vec::new(),
            duration: Duration::from_millis(opts.default_duration_ms),
            delay: Duration::from_millis(opts.default_delay_ms),
        }
    }

    /// Duration used by [`Self::start`] and [`Self::start_async`].
    pub fn duration(&mut self, duration: Duration) -> &mut Self {
        self.duration = duration;
        self
    }

    /// Delay applied to the whole group.
    pub fn delay(&mut self, delay: Duration) -> &mut Self {
        self.delay = delay;
        self
    }

    /// Animate opacity.
    pub fn opacity(&mut self, from: Option<f64>, to: f64, easing: Easing) -> &mut Self {
        self.push(AnimatableProperty::Opacity, from, to, easing)
    }

    /// Animate translation along one axis.
    pub fn translation_axis(
        &mut self,
        axis: Axis,
        from: Option<f64>,
        to: f64,
        easing: Easing,
    ) -> &mut Self {
        self.push(AnimatableProperty::translate(axis), from, to, easing)
    }

    /// Animate translation on both axes.
    pub fn translation(&mut self, from: Option<Vec2>, to: Vec2, easing: Easing) -> &mut Self {
        self.translation_axis(Axis::X, from.map(|v| v.x), to.x, easing)
            .translation_axis(Axis::Y, from.map(|v| v.y), to.y, easing)
    }

    /// Uniform scale, recorded as one factory per axis.
    pub fn scale(&mut self, from: Option<f64>, to: f64, easing: Easing) -> &mut Self {
        self.push(AnimatableProperty::ScaleX, from, to, easing)
            .push(AnimatableProperty::ScaleY, from, to, easing)
    }

    /// Animate rotation, in degrees.
    pub fn rotation(&mut self, from: Option<f64>, to: f64, easing: Easing) -> &mut Self {
        self.push(AnimatableProperty::Rotation, from, to, easing)
    }

    /// Animate width or height. Without `from`, an unresolved authored size starts from the
    /// measured size read at materialization.
    pub fn size_axis(
        &mut self,
        axis: Axis,
        from: Option<f64>,
        to: f64,
        easing: Easing,
    ) -> FxResult<&mut Self> {
        self.require_layout_size()?;
        self.factories.push(size_factory(axis, from, to, easing));
        Ok(self)
    }

    /// Animate width and height. Fails when the target has no layout size.
    pub fn size(&mut self, from: Option<Vec2>, to: Vec2, easing: Easing) -> FxResult<&mut Self> {
        self.require_layout_size()?;
        self.factories
            .push(size_factory(Axis::X, from.map(|v| v.x), to.x, easing));
        self.factories
            .push(size_factory(Axis::Y, from.map(|v| v.y), to.y, easing));
        Ok(self)
    }

    /// Always fails with [`FxError::UnsupportedOperation`].
    pub fn offset_axis(
        &mut self,
        axis: Axis,
        _from: Option<f64>,
        _to: f64,
        _easing: Easing,
    ) -> FxResult<&mut Self> {
        Err(FxError::unsupported(format!(
            "can't animate the {axis:?} offset with this backend"
        )))
    }

    /// Always fails with [`FxError::UnsupportedOperation`].
    pub fn offset(
        &mut self,
        _from: Option<Vec2>,
        _to: Vec2,
        _easing: Easing,
    ) -> FxResult<&mut Self> {
        Err(FxError::unsupported(
            "can't animate the offset with this backend",
        ))
    }

    /// Always fails with [`FxError::UnsupportedOperation`].
    pub fn clip(
        &mut self,
        side: Side,
        _from: Option<f64>,
        _to: f64,
        _easing: Easing,
    ) -> FxResult<&mut Self> {
        Err(FxError::unsupported(format!(
            "can't animate the {side:?} clip with this backend"
        )))
    }

    /// Requests recorded so far, in call order.
    pub fn factories(&self) -> &[AnimationFactory] {
        &self.factories
    }

    /// Animated target.
    pub fn target(&self) -> &B::Target {
        &self.target
    }

    /// Animated target, mutably.
    pub fn target_mut(&mut self) -> &mut B::Target {
        &mut self.target
    }

    /// Bind every recorded factory to `duration`, producing an independent group.
    pub fn materialize(&self, duration: Duration) -> FxResult<AnimationGroup<B::Operation>> {
        AnimationGroup::materialize(
            self.backend,
            &self.target,
            &self.factories,
            duration,
            self.delay,
        )
    }

    /// Materialize with the configured duration and begin without waiting.
    pub fn start(&self) -> FxResult<()> {
        let group = self.materialize(self.duration)?;
        tracing::debug!(operations = group.len(), "starting animation group");
        group.run(self.backend);
        Ok(())
    }

    /// Materialize with the configured duration, begin, and return a future that resolves
    /// once every operation in the group has finished.
    pub fn start_async(&self) -> FxResult<GroupCompletion> {
        let group = self.materialize(self.duration)?;
        tracing::debug!(operations = group.len(), "starting awaited animation group");
        Ok(group.run_async(self.backend))
    }

    fn push(
        &mut self,
        property: AnimatableProperty,
        from: Option<f64>,
        to: f64,
        easing: Easing,
    ) -> &mut Self {
        self.factories
            .push(AnimationFactory::new(property, from, to, easing));
        self
    }

    fn require_layout_size(&self) -> FxResult<()> {
        if self.target.layout_size().is_none() {
            return Err(FxError::invalid_target(
                "can't animate the size of a target without layout size",
            ));
        }
        Ok(())
    }
}

impl<B: AnimationBackend> std::fmt::Debug for AnimationBuilder<'_, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationBuilder")
            .field("factories", &self.factories)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

fn size_factory(axis: Axis, from: Option<f64>, to: f64, easing: Easing) -> AnimationFactory {
    AnimationFactory {
        property: AnimatableProperty::size(axis),
        from: from.map_or(StartValue::MeasuredFallback(axis), StartValue::Explicit),
        to,
        easing,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/builder.rs"]
mod tests;

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use futures::{FutureExt as _, future::BoxFuture};

use crate::{
    animation::property::{AnimationFactory, TimedAnimation},
    animation::target::{AnimationTarget, StaticTarget},
    foundation::error::FxResult,
};

/// Resolves when one scheduled operation finishes.
///
/// Dropping a completion only stops observing the operation; it keeps running.
pub type Completion = BoxFuture<'static, ()>;

/// Animation entry points supplied by an animation runtime.
pub trait AnimationBackend {
    /// Element type the backend animates.
    type Target: AnimationTarget;
    /// Backend handle for one timed animation.
    type Operation;

    /// Create one backend operation for a timed animation.
    fn create_animation(
        &self,
        target: &Self::Target,
        animation: &TimedAnimation,
    ) -> FxResult<Self::Operation>;

    /// Schedule `operation` and return immediately.
    fn begin(&self, operation: &Self::Operation) -> Completion;
}

/// Operations materialized from one set of factories with one shared duration.
#[derive(Debug)]
pub struct AnimationGroup<Op> {
    animations: Vec<TimedAnimation>,
    operations: Vec<Op>,
    duration: Duration,
}

impl<Op> AnimationGroup<Op> {
    /// Resolve every factory against `duration` and create one backend operation per factory.
    #[tracing::instrument(skip(backend, target, factories), fields(factories = factories.len()))]
    pub fn materialize<B>(
        backend: &B,
        target: &B::Target,
        factories: &[AnimationFactory],
        duration: Duration,
        delay: Duration,
    ) -> FxResult<Self>
    where
        B: AnimationBackend<Operation = Op> + ?Sized,
    {
        let layout = target.layout_size();
        let animations: Vec<TimedAnimation> = factories
            .iter()
            .map(|f| f.resolve(layout, duration, delay))
            .collect();
        let operations = animations
            .iter()
            .map(|a| backend.create_animation(target, a))
            .collect::<FxResult<Vec<_>>>()?;
        Ok(Self {
            animations,
            operations,
            duration,
        })
    }

    /// Timed animations, in request order.
    pub fn animations(&self) -> &[TimedAnimation] {
        &self.animations
    }

    /// Backend operations, parallel to [`Self::animations`].
    pub fn operations(&self) -> &[Op] {
        &self.operations
    }

    /// Shared duration of every animation.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of animations in the group.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the group has no animations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Begin every operation without waiting for any of them.
    pub fn run<B>(&self, backend: &B)
    where
        B: AnimationBackend<Operation = Op> + ?Sized,
    {
        for op in &self.operations {
            drop(backend.begin(op));
        }
    }

    /// Begin every operation and return a future that resolves once all of them finished.
    pub fn run_async<B>(&self, backend: &B) -> GroupCompletion
    where
        B: AnimationBackend<Operation = Op> + ?Sized,
    {
        let completions: Vec<Completion> =
            self.operations.iter().map(|op| backend.begin(op)).collect();
        let len = completions.len();
        GroupCompletion {
            inner: futures::future::join_all(completions).map(|_| ()).boxed(),
            len,
        }
    }
}

/// Joins every operation of a started [`AnimationGroup`].
#[must_use = "dropping the completion doesn't stop the animations, it only stops waiting"]
pub struct GroupCompletion {
    inner: BoxFuture<'static, ()>,
    len: usize,
}

impl GroupCompletion {
    /// Number of operations being joined.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there is nothing to wait for.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Future for GroupCompletion {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.inner.poll_unpin(cx)
    }
}

impl std::fmt::Debug for GroupCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupCompletion")
            .field("len", &self.len)
            .finish()
    }
}

/// [`AnimationBackend`] that records what it is asked to create; every operation finishes
/// as soon as it begins.
#[derive(Debug, Default)]
pub struct TimelineRecorder {
    created: RefCell<Vec<TimedAnimation>>,
    begun: Cell<usize>,
}

impl TimelineRecorder {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Animations created so far.
    pub fn created(&self) -> Vec<TimedAnimation> {
        self.created.borrow().clone()
    }

    /// Number of groups begun.
    pub fn begun(&self) -> usize {
        self.begun.get()
    }
}

impl AnimationBackend for TimelineRecorder {
    type Target = StaticTarget;
    type Operation = TimedAnimation;

    fn create_animation(
        &self,
        _target: &StaticTarget,
        animation: &TimedAnimation,
    ) -> FxResult<TimedAnimation> {
        self.created.borrow_mut().push(*animation);
        Ok(*animation)
    }

    fn begin(&self, _operation: &TimedAnimation) -> Completion {
        self.begun.set(self.begun.get() + 1);
        futures::future::ready(()).boxed()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/group.rs"]
mod tests;

//! fxgraph compiles declarative visual descriptions into backend execution graphs.
//!
//! Two independent components share one idiom: describe first, build late.
//!
//! # Effect pipelines
//!
//! 1. **Describe**: an ordered list of [`EffectDescriptor`]s; the first is a source (backdrop,
//!    color, image, tiles, acrylic), the rest are transforms (opacity, luminance, tint, blur,
//!    saturation, blend). A blend embeds another full pipeline as its second input.
//! 2. **Validate**: [`validate_pipeline`] checks the whole tree without touching a backend.
//! 3. **Compile**: [`compile()`] folds the list into one [`EffectBackend::Node`], recursing into
//!    blend branches. [`PipelineBrush`] does this lazily, once, on connect.
//!
//! # Property animations
//!
//! 1. **Record**: [`AnimationBuilder`] stores each request as a duration-free
//!    [`AnimationFactory`].
//! 2. **Materialize**: one shared duration turns every factory into a [`TimedAnimation`] and a
//!    backend operation, forming an [`AnimationGroup`].
//! 3. **Run**: [`AnimationBuilder::start`] begins the group and returns;
//!    [`AnimationBuilder::start_async`] also returns a future that resolves when every
//!    operation has finished.
//!
//! Every request error ([`FxError`]) is raised synchronously while validating or recording,
//! never while a backend is executing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compile;
mod effects;
mod foundation;

pub use animation::builder::{AnimationBuilder, AnimationOptions};
pub use animation::ease::Easing;
pub use animation::group::{
    AnimationBackend, AnimationGroup, Completion, GroupCompletion, TimelineRecorder,
};
pub use animation::property::{AnimatableProperty, AnimationFactory, StartValue, TimedAnimation};
pub use animation::script::{AnimationScript, AnimationStep};
pub use animation::target::{AnimationTarget, LayoutSize, StaticTarget, TargetSize};
pub use compile::compiler::{
    CompileOptions, PipelineShape, compile, compile_with, validate_pipeline,
};
pub use compile::graph::{
    CompiledGraph, EffectGraph, GraphNode, GraphRecorder, NodeId, NodeOp, compile_graph,
};
pub use effects::backend::EffectBackend;
pub use effects::brush::{EffectPipeline, PipelineBrush};
pub use effects::descriptor::{
    BackdropKind, BlendMode, CacheMode, DpiMode, EffectDescriptor, EffectTag, Placement,
};
pub use foundation::core::{Axis, Color, Side, Vec2};
pub use foundation::error::{FxError, FxResult};

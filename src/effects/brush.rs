use std::path::Path;

use anyhow::Context as _;

use crate::{
    compile::compiler::{CompileOptions, PipelineShape, compile_with, validate_pipeline},
    effects::backend::EffectBackend,
    effects::descriptor::{BlendMode, EffectDescriptor, Placement},
    foundation::error::{FxError, FxResult},
};

/// An owned, ordered list of effect descriptors.
///
/// Serializes as a plain JSON array of descriptors. Building a pipeline never validates it;
/// validation happens in [`EffectPipeline::validate`] or when it is compiled.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EffectPipeline {
    effects: Vec<EffectDescriptor>,
}

impl EffectPipeline {
    /// Wrap an existing descriptor list.
    pub fn new(effects: Vec<EffectDescriptor>) -> Self {
        Self { effects }
    }

    /// Start a pipeline from its source descriptor.
    pub fn from_source(source: EffectDescriptor) -> Self {
        Self {
            effects: vec![source],
        }
    }

    /// Append one transform.
    pub fn then(mut self, effect: EffectDescriptor) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append a blend against another pipeline.
    pub fn blend(self, branch: EffectPipeline, mode: BlendMode, placement: Placement) -> Self {
        self.then(EffectDescriptor::blend(branch.effects, mode, placement))
    }

    /// Descriptors in pipeline order.
    pub fn effects(&self) -> &[EffectDescriptor] {
        &self.effects
    }

    /// Unwrap the descriptor list.
    pub fn into_effects(self) -> Vec<EffectDescriptor> {
        self.effects
    }

    /// Number of top-level descriptors.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the pipeline has no descriptors.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Run [`validate_pipeline`] over this pipeline.
    pub fn validate(&self, opts: &CompileOptions) -> FxResult<PipelineShape> {
        validate_pipeline(&self.effects, opts)
    }

    /// Parse a JSON array of descriptors.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        serde_json::from_str(s).map_err(|e| FxError::serde(format!("effect pipeline: {e}")))
    }

    /// Read and parse a JSON pipeline file.
    pub fn from_path(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read pipeline '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

impl From<Vec<EffectDescriptor>> for EffectPipeline {
    fn from(effects: Vec<EffectDescriptor>) -> Self {
        Self::new(effects)
    }
}

/// A pipeline bound to a lazily compiled backend node.
///
/// The pipeline is compiled on the first [`PipelineBrush::connect`] and the node is reused by
/// later calls until the effects change or the brush is disconnected.
#[derive(Debug)]
pub struct PipelineBrush<N> {
    pipeline: EffectPipeline,
    options: CompileOptions,
    compiled: Option<N>,
}

impl<N> PipelineBrush<N> {
    /// Brush with default compile options.
    pub fn new(pipeline: EffectPipeline) -> Self {
        Self::with_options(pipeline, CompileOptions::default())
    }

    /// Brush with explicit compile options.
    pub fn with_options(pipeline: EffectPipeline, options: CompileOptions) -> Self {
        Self {
            pipeline,
            options,
            compiled: None,
        }
    }

    /// The pipeline this brush compiles.
    pub fn pipeline(&self) -> &EffectPipeline {
        &self.pipeline
    }

    /// Replace the effects; a previously compiled node is dropped.
    pub fn set_effects(&mut self, pipeline: EffectPipeline) {
        self.pipeline = pipeline;
        self.compiled = None;
    }

    /// Whether a compiled node is cached.
    pub fn is_connected(&self) -> bool {
        self.compiled.is_some()
    }

    /// Compile the pipeline if needed and return the root node.
    pub fn connect<B>(&mut self, backend: &mut B) -> FxResult<&N>
    where
        B: EffectBackend<Node = N> + ?Sized,
    {
        let node = match self.compiled.take() {
            Some(node) => node,
            None => {
                tracing::debug!(len = self.pipeline.len(), "compiling brush pipeline");
                compile_with(backend, self.pipeline.effects(), &self.options)?
            }
        };
        Ok(self.compiled.insert(node))
    }

    /// Release the compiled node, handing it back to the caller.
    pub fn disconnect(&mut self) -> Option<N> {
        self.compiled.take()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/brush.rs"]
mod tests;

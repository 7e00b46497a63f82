use crate::{
    effects::backend::EffectBackend,
    effects::descriptor::{BackdropKind, EffectDescriptor},
    foundation::error::{FxError, FxResult},
};

/// Compiler settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Deepest blend-branch nesting accepted; the top-level list is depth 0.
    pub max_branch_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_branch_depth: 32,
        }
    }
}

/// Summary of a validated pipeline tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PipelineShape {
    /// Source descriptors, one per list (top level and every branch).
    pub sources: usize,
    /// Transform descriptors, blends included.
    pub transforms: usize,
    /// Blend descriptors.
    pub blends: usize,
    /// Deepest branch nesting encountered.
    pub max_depth: usize,
}

/// Check a descriptor list without touching any backend.
///
/// This is the same validation [`compile`] performs up front, exposed so callers can reject a
/// pipeline cheaply before committing to a backend.
pub fn validate_pipeline(
    effects: &[EffectDescriptor],
    opts: &CompileOptions,
) -> FxResult<PipelineShape> {
    let mut shape = PipelineShape::default();
    validate_list(effects, 0, opts, &mut shape)?;
    Ok(shape)
}

fn validate_list(
    effects: &[EffectDescriptor],
    depth: usize,
    opts: &CompileOptions,
    shape: &mut PipelineShape,
) -> FxResult<()> {
    if depth > opts.max_branch_depth {
        return Err(FxError::validation(format!(
            "blend branches nested deeper than {}",
            opts.max_branch_depth
        )));
    }
    shape.max_depth = shape.max_depth.max(depth);

    let Some((first, rest)) = effects.split_first() else {
        return Err(FxError::EmptyPipeline);
    };
    validate_source(first)?;
    shape.sources += 1;

    for (i, effect) in rest.iter().enumerate() {
        match effect {
            EffectDescriptor::Blend { input, .. } => {
                shape.blends += 1;
                shape.transforms += 1;
                validate_list(input, depth + 1, opts, shape)?;
            }
            e if e.is_source() => {
                return Err(FxError::invalid_transform(i + 1, e.tag().as_str()));
            }
            _ => shape.transforms += 1,
        }
    }
    Ok(())
}

fn validate_source(effect: &EffectDescriptor) -> FxResult<()> {
    match effect {
        EffectDescriptor::Backdrop {
            source: BackdropKind::Unknown,
        } => Err(FxError::invalid_source(format!(
            "{}({})",
            effect.tag(),
            BackdropKind::Unknown.as_str()
        ))),
        EffectDescriptor::Acrylic {
            source: BackdropKind::Unknown,
            ..
        } => Err(FxError::invalid_acrylic_source(
            BackdropKind::Unknown.as_str(),
        )),
        e if e.is_source() => Ok(()),
        e => Err(FxError::invalid_source(e.tag().as_str())),
    }
}

/// Compile `effects` with default [`CompileOptions`].
pub fn compile<B: EffectBackend + ?Sized>(
    backend: &mut B,
    effects: &[EffectDescriptor],
) -> FxResult<B::Node> {
    compile_with(backend, effects, &CompileOptions::default())
}

/// Compile a descriptor list into one backend node.
///
/// The whole tree is validated first, so an invalid pipeline never reaches the backend. The
/// list is then folded left to right: the first descriptor starts the chain and each following
/// one wraps the previous node. Blend branches are compiled recursively, exactly once each.
#[tracing::instrument(skip(backend, effects, opts), fields(len = effects.len()))]
pub fn compile_with<B: EffectBackend + ?Sized>(
    backend: &mut B,
    effects: &[EffectDescriptor],
    opts: &CompileOptions,
) -> FxResult<B::Node> {
    let shape = validate_pipeline(effects, opts)?;
    tracing::debug!(?shape, "pipeline validated");
    build(backend, effects)
}

fn build<B: EffectBackend + ?Sized>(
    backend: &mut B,
    effects: &[EffectDescriptor],
) -> FxResult<B::Node> {
    let Some((first, rest)) = effects.split_first() else {
        return Err(FxError::EmptyPipeline);
    };

    let mut node = start(backend, first)?;
    for (i, effect) in rest.iter().enumerate() {
        node = append(backend, node, i + 1, effect)?;
    }
    Ok(node)
}

fn start<B: EffectBackend + ?Sized>(
    backend: &mut B,
    effect: &EffectDescriptor,
) -> FxResult<B::Node> {
    tracing::trace!(tag = %effect.tag(), "start");
    match effect {
        EffectDescriptor::Backdrop { source } => match source {
            BackdropKind::Backdrop => backend.backdrop(),
            BackdropKind::HostBackdrop => backend.host_backdrop(),
            BackdropKind::Unknown => Err(FxError::invalid_source(format!(
                "{}({})",
                effect.tag(),
                source.as_str()
            ))),
        },
        EffectDescriptor::SolidColor { color } => backend.solid_color(*color),
        EffectDescriptor::Image {
            uri,
            dpi_mode,
            cache_mode,
        } => backend.image(uri, *dpi_mode, *cache_mode),
        EffectDescriptor::Tile {
            uri,
            dpi_mode,
            cache_mode,
        } => backend.tiles(uri, *dpi_mode, *cache_mode),
        EffectDescriptor::Acrylic {
            source,
            tint,
            tint_mix,
            blur_amount,
            texture_uri,
        } => match source {
            BackdropKind::Backdrop => {
                backend.backdrop_acrylic(*tint, *tint_mix, *blur_amount, texture_uri.as_deref())
            }
            BackdropKind::HostBackdrop => {
                backend.host_backdrop_acrylic(*tint, *tint_mix, texture_uri.as_deref())
            }
            BackdropKind::Unknown => Err(FxError::invalid_acrylic_source(source.as_str())),
        },
        other => Err(FxError::invalid_source(other.tag().as_str())),
    }
}

fn append<B: EffectBackend + ?Sized>(
    backend: &mut B,
    upstream: B::Node,
    index: usize,
    effect: &EffectDescriptor,
) -> FxResult<B::Node> {
    tracing::trace!(index, tag = %effect.tag(), "append");
    match effect {
        EffectDescriptor::Opacity { value } => backend.opacity(upstream, *value),
        EffectDescriptor::Luminance => backend.luminance_to_alpha(upstream),
        EffectDescriptor::Tint { color, opacity } => backend.tint(upstream, *color, *opacity),
        EffectDescriptor::Blur { value } => backend.blur(upstream, *value),
        EffectDescriptor::Saturation { value } => backend.saturation(upstream, *value),
        EffectDescriptor::Blend {
            input,
            mode,
            placement,
        } => {
            let branch = build(backend, input)?;
            backend.blend(upstream, branch, *mode, *placement)
        }
        other => Err(FxError::invalid_transform(index, other.tag().as_str())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;

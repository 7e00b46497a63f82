use crate::{
    compile::compiler::{CompileOptions, compile_with},
    effects::backend::EffectBackend,
    effects::descriptor::{BlendMode, CacheMode, DpiMode, EffectDescriptor, Placement},
    foundation::core::Color,
    foundation::error::{FxError, FxResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
/// Identifier for a node declared in [`EffectGraph::nodes`].
pub struct NodeId(pub u32);

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
/// Backend operation recorded for one node.
pub enum NodeOp {
    /// [`EffectBackend::backdrop`].
    Backdrop,
    /// [`EffectBackend::host_backdrop`].
    HostBackdrop,
    /// [`EffectBackend::solid_color`].
    SolidColor {
        /// Fill or tint color.
        color: Color,
    },
    /// [`EffectBackend::image`].
    Image {
        /// Image location.
        uri: String,
        /// DPI handling.
        dpi_mode: DpiMode,
        /// Cache handling.
        cache_mode: CacheMode,
    },
    /// [`EffectBackend::tiles`].
    Tiles {
        /// Image location.
        uri: String,
        /// DPI handling.
        dpi_mode: DpiMode,
        /// Cache handling.
        cache_mode: CacheMode,
    },
    /// [`EffectBackend::backdrop_acrylic`].
    BackdropAcrylic {
        /// Tint overlay color.
        tint: Color,
        /// Tint mix factor.
        tint_mix: f64,
        /// Blur amount.
        blur_amount: f64,
        /// Noise texture location.
        texture_uri: Option<String>,
    },
    /// [`EffectBackend::host_backdrop_acrylic`].
    HostBackdropAcrylic {
        /// Tint overlay color.
        tint: Color,
        /// Tint mix factor.
        tint_mix: f64,
        /// Noise texture location.
        texture_uri: Option<String>,
    },
    /// [`EffectBackend::opacity`].
    Opacity {
        /// Effect amount.
        value: f64,
    },
    /// [`EffectBackend::luminance_to_alpha`].
    LuminanceToAlpha,
    /// [`EffectBackend::tint`].
    Tint {
        /// Fill or tint color.
        color: Color,
        /// Tint opacity.
        opacity: f64,
    },
    /// [`EffectBackend::blur`].
    Blur {
        /// Effect amount.
        value: f64,
    },
    /// [`EffectBackend::saturation`].
    Saturation {
        /// Effect amount.
        value: f64,
    },
    /// [`EffectBackend::blend`].
    Blend {
        /// Blend operator.
        mode: BlendMode,
        /// Branch stacking.
        placement: Placement,
    },
}

impl NodeOp {
    /// Backend entry point that records this op.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::HostBackdrop => "host_backdrop",
            Self::SolidColor { .. } => "solid_color",
            Self::Image { .. } => "image",
            Self::Tiles { .. } => "tiles",
            Self::BackdropAcrylic { .. } => "backdrop_acrylic",
            Self::HostBackdropAcrylic { .. } => "host_backdrop_acrylic",
            Self::Opacity { .. } => "opacity",
            Self::LuminanceToAlpha => "luminance_to_alpha",
            Self::Tint { .. } => "tint",
            Self::Blur { .. } => "blur",
            Self::Saturation { .. } => "saturation",
            Self::Blend { .. } => "blend",
        }
    }
}

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphNode {
    /// Backend call that produced this node; serialized inline as `"op": "<name>"`.
    #[serde(flatten)]
    pub op: NodeOp,
    /// Upstream nodes: none for sources, one for transforms, two for blends (chain, branch).
    pub inputs: Vec<NodeId>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Arena of recorded nodes, in construction order.
///
/// Inputs always point at earlier nodes, so the arena is acyclic by construction.
pub struct EffectGraph {
    /// Nodes indexed by [`NodeId`].
    pub nodes: Vec<GraphNode>,
}

impl EffectGraph {
    /// Node by id, if recorded.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.0 as usize)
    }

    /// Number of recorded nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Operation names in the order the backend was called.
    pub fn calls(&self) -> Vec<&'static str> {
        self.nodes.iter().map(|n| n.op.name()).collect()
    }

    /// Number of nodes recorded for the op named `op_name`.
    pub fn count(&self, op_name: &str) -> usize {
        self.nodes.iter().filter(|n| n.op.name() == op_name).count()
    }

    /// Longest path from `root` down to a source, counting nodes.
    pub fn depth(&self, root: NodeId) -> FxResult<usize> {
        let node = self
            .node(root)
            .ok_or_else(|| FxError::validation(format!("unknown node id {}", root.0)))?;
        let mut deepest = 0;
        for input in &node.inputs {
            deepest = deepest.max(self.depth(*input)?);
        }
        Ok(deepest + 1)
    }
}

/// [`EffectBackend`] that records every call into an [`EffectGraph`].
#[derive(Debug, Default)]
pub struct GraphRecorder {
    graph: EffectGraph,
}

impl GraphRecorder {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph recorded so far.
    pub fn graph(&self) -> &EffectGraph {
        &self.graph
    }

    /// Take the recorded graph.
    pub fn into_graph(self) -> EffectGraph {
        self.graph
    }

    fn push(&mut self, op: NodeOp, inputs: Vec<NodeId>) -> FxResult<NodeId> {
        let id = NodeId(
            self.graph
                .nodes
                .len()
                .try_into()
                .map_err(|_| FxError::validation("node id overflow"))?,
        );
        self.graph.nodes.push(GraphNode { op, inputs });
        Ok(id)
    }
}

impl EffectBackend for GraphRecorder {
    type Node = NodeId;

    fn backdrop(&mut self) -> FxResult<NodeId> {
        self.push(NodeOp::Backdrop, vec![])
    }

    fn host_backdrop(&mut self) -> FxResult<NodeId> {
        self.push(NodeOp::HostBackdrop, vec![])
    }

    fn solid_color(&mut self, color: Color) -> FxResult<NodeId> {
        self.push(NodeOp::SolidColor { color }, vec![])
    }

    fn image(&mut self, uri: &str, dpi_mode: DpiMode, cache_mode: CacheMode) -> FxResult<NodeId> {
        self.push(
            NodeOp::Image {
                uri: uri.to_owned(),
                dpi_mode,
                cache_mode,
            },
            vec![],
        )
    }

    fn tiles(&mut self, uri: &str, dpi_mode: DpiMode, cache_mode: CacheMode) -> FxResult<NodeId> {
        self.push(
            NodeOp::Tiles {
                uri: uri.to_owned(),
                dpi_mode,
                cache_mode,
            },
            vec![],
        )
    }

    fn backdrop_acrylic(
        &mut self,
        // Tint overlay color.
        tint: Color,
        // Tint mix factor.
        tint_mix: f64,
        blur_amount: f64,
        texture_uri: Option<&str>,
    ) -> FxResult<NodeId> {
        self.push(
            NodeOp::BackdropAcrylic {
                tint,
                tint_mix,
                blur_amount,
                texture_uri: texture_uri.map(str::to_owned),
            },
            vec![],
        )
    }

    fn host_backdrop_acrylic(
        &mut self,
        // Tint overlay color.
        tint: Color,
        // Tint mix factor.
        tint_mix: f64,
        texture_uri: Option<&str>,
    ) -> FxResult<NodeId> {
        self.push(
            NodeOp::HostBackdropAcrylic {
                tint,
                tint_mix,
                texture_uri: texture_uri.map(str::to_owned),
            },
            vec![],
        )
    }

    fn opacity(&mut self, upstream: NodeId, value: f64) -> FxResult<NodeId> {
        self.push(NodeOp::Opacity { value }, vec![upstream])
    }

    fn luminance_to_alpha(&mut self, upstream: NodeId) -> FxResult<NodeId> {
        self.push(NodeOp::LuminanceToAlpha, vec![upstream])
    }

    fn tint(&mut self, upstream: NodeId, color: Color, opacity: f64) -> FxResult<NodeId> {
        self.push(NodeOp::Tint { color, opacity }, vec![upstream])
    }

    fn blur(&mut self, upstream: NodeId, value: f64) -> FxResult<NodeId> {
        self.push(NodeOp::Blur { value }, vec![upstream])
    }

    fn saturation(&mut self, upstream: NodeId, value: f64) -> FxResult<NodeId> {
        self.push(NodeOp::Saturation { value }, vec![upstream])
    }

    fn blend(
        &mut self,
        upstream: NodeId,
        branch: NodeId,
        mode: BlendMode,
        placement: Placement,
    ) -> FxResult<NodeId> {
        self.push(NodeOp::Blend { mode, placement }, vec![upstream, branch])
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A recorded graph together with the node the compiler returned.
pub struct CompiledGraph {
    /// Node returned for the whole pipeline.
    pub root: NodeId,
    /// Every node recorded while compiling.
    pub graph: EffectGraph,
}

/// Compile `effects` against a fresh [`GraphRecorder`].
pub fn compile_graph(
    effects: &[EffectDescriptor],
    opts: &CompileOptions,
) -> FxResult<CompiledGraph> {
    let mut recorder = GraphRecorder::new();
    let root = compile_with(&mut recorder, effects, opts)?;
    Ok(CompiledGraph {
        root,
        graph: recorder.into_graph(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/graph.rs"]
mod tests;

use crate::{
    effects::descriptor::{BlendMode, CacheMode, DpiMode, Placement},
    foundation::core::Color,
    foundation::error::FxResult,
};

/// Graph-construction entry points supplied by a rendering backend.
///
/// The compiler never inspects [`EffectBackend::Node`]; it only threads the value returned by
/// one call into the next. Every call may fail, and the failure is handed back to the caller
/// unchanged (typically as [`crate::FxError::Other`]).
pub trait EffectBackend {
    /// Opaque handle for one compiled pipeline stage.
    type Node;

    /// In-app backdrop source.
    fn backdrop(&mut self) -> FxResult<Self::Node>;

    /// Host-window backdrop source.
    fn host_backdrop(&mut self) -> FxResult<Self::Node>;

    /// Flat color source.
    fn solid_color(&mut self, color: Color) -> FxResult<Self::Node>;

    /// Stretched image source.
    fn image(&mut self, uri: &str, dpi_mode: DpiMode, cache_mode: CacheMode)
    -> FxResult<Self::Node>;

    /// Tiled image source.
    fn tiles(&mut self, uri: &str, dpi_mode: DpiMode, cache_mode: CacheMode)
    -> FxResult<Self::Node>;

    /// Acrylic material over the in-app backdrop.
    fn backdrop_acrylic(
        &mut self,
        tint: Color,
        tint_mix: f64,
        blur_amount: f64,
        texture_uri: Option<&str>,
    ) -> FxResult<Self::Node>;

    /// Acrylic material over the host backdrop; it has no blur amount.
    fn host_backdrop_acrylic(
        &mut self,
        tint: Color,
        tint_mix: f64,
        texture_uri: Option<&str>,
    ) -> FxResult<Self::Node>;

    /// Multiply the upstream alpha by `value`.
    fn opacity(&mut self, upstream: Self::Node, value: f64) -> FxResult<Self::Node>;

    /// Replace the upstream alpha with its luminance.
    fn luminance_to_alpha(&mut self, upstream: Self::Node) -> FxResult<Self::Node>;

    /// Overlay `color` at `opacity`.
    fn tint(&mut self, upstream: Self::Node, color: Color, opacity: f64) -> FxResult<Self::Node>;

    /// Gaussian blur of the upstream.
    fn blur(&mut self, upstream: Self::Node, value: f64) -> FxResult<Self::Node>;

    /// Scale the upstream saturation.
    fn saturation(&mut self, upstream: Self::Node, value: f64) -> FxResult<Self::Node>;

    /// Combine the upstream chain with a compiled branch; the only two-input stage.
    fn blend(
        &mut self,
        upstream: Self::Node,
        branch: Self::Node,
        mode: BlendMode,
        placement: Placement,
    ) -> FxResult<Self::Node>;
}

use serde::{Deserialize, Serialize};

use crate::foundation::core::Color;

/// One declarative step of an effects pipeline.
///
/// A valid pipeline starts with exactly one *source* descriptor followed by any number of
/// *transform* descriptors. [`EffectDescriptor::Blend`] embeds a whole, independently valid
/// pipeline as its second input, so a pipeline is a finite tree of chains.
///
/// Descriptors are plain data: they serialize to JSON tagged by `"kind"` and are never
/// executed directly. See [`crate::compile_with`] for turning a list into a backend graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectDescriptor {
    /// The content behind the element (in-app or host window).
    Backdrop {
        /// Which backdrop to sample.
        source: BackdropKind,
    },
    /// A flat color fill.
    SolidColor {
        /// Fill color.
        color: Color,
    },
    /// A stretched image.
    Image {
        /// Image location.
        uri: String,
        /// How the image DPI is reconciled with the display.
        #[serde(default)]
        dpi_mode: DpiMode,
        /// How the backend caches the decoded image.
        #[serde(default)]
        cache_mode: CacheMode,
    },
    /// A repeated image tile.
    Tile {
        /// Tile image location.
        uri: String,
        /// How the tile DPI is reconciled with the display.
        #[serde(default)]
        dpi_mode: DpiMode,
        /// How the backend caches the decoded tile.
        #[serde(default)]
        cache_mode: CacheMode,
    },
    /// A tinted, blurred, noise-textured backdrop.
    Acrylic {
        /// Which backdrop the acrylic material samples.
        source: BackdropKind,
        /// Tint overlay color.
        tint: Color,
        /// Tint mix factor in `[0, 1]`.
        tint_mix: f64,
        /// Blur amount; only honoured for [`BackdropKind::Backdrop`].
        #[serde(default)]
        blur_amount: f64,
        /// Optional noise texture location.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        texture_uri: Option<String>,
    },
    /// Multiply the upstream alpha.
    Opacity {
        /// Opacity factor.
        value: f64,
    },
    /// Convert upstream luminance to alpha.
    Luminance,
    /// Overlay a tint color.
    Tint {
        /// Tint color.
        color: Color,
        /// Tint opacity.
        opacity: f64,
    },
    /// Gaussian blur.
    Blur {
        /// Blur amount.
        value: f64,
    },
    /// Saturation adjustment.
    Saturation {
        /// Saturation factor (`0` is grayscale).
        value: f64,
    },
    /// Blend the upstream chain with a separately compiled branch.
    Blend {
        /// The branch pipeline, compiled on its own.
        input: Vec<EffectDescriptor>,
        /// Blend operator.
        #[serde(default)]
        mode: BlendMode,
        /// Whether the branch goes above or below the upstream chain.
        #[serde(default)]
        placement: Placement,
    },
}

/// Which backdrop a source samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackdropKind {
    /// Content behind the element inside the app window.
    #[default]
    Backdrop,
    /// Content behind the app window.
    HostBackdrop,
    /// Any value this crate doesn't recognise (typically read from JSON).
    #[serde(other)]
    Unknown,
}

impl BackdropKind {
    /// Name used in JSON and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::HostBackdrop => "host_backdrop",
            Self::Unknown => "unknown",
        }
    }
}

/// How an image's own DPI is reconciled with the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DpiMode {
    /// Honour the DPI stored in the image.
    UseSourceDpi,
    /// Treat the image as 96 DPI.
    Ignore,
    /// Scale to the display DPI, ignoring the image's own DPI.
    #[default]
    DisplayDpiOnly,
    /// Scale by both the image DPI and the display DPI.
    DisplayDpi,
}

/// How the backend caches decoded images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Backend default caching.
    #[default]
    Default,
    /// Always decode.
    Disabled,
    /// Decode and replace any cached copy.
    Overwrite,
}

/// Operator combining a blend branch with the upstream chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Multiply.
    #[default]
    Multiply,
    /// Screen.
    Screen,
    /// Darken.
    Darken,
    /// Lighten.
    Lighten,
    /// Dissolve.
    Dissolve,
    /// Color burn.
    ColorBurn,
    /// Linear burn.
    LinearBurn,
    /// Darker color.
    DarkerColor,
    /// Lighter color.
    LighterColor,
    /// Color dodge.
    ColorDodge,
    /// Linear dodge.
    LinearDodge,
    /// Overlay.
    Overlay,
    /// Soft light.
    SoftLight,
    /// Hard light.
    HardLight,
    /// Vivid light.
    VividLight,
    /// Linear light.
    LinearLight,
    /// Pin light.
    PinLight,
    /// Hard mix.
    HardMix,
    /// Difference.
    Difference,
    /// Exclusion.
    Exclusion,
    /// Hue of the branch, saturation and luminosity of the upstream.
    Hue,
    /// Saturation of the branch.
    Saturation,
    /// Hue and saturation of the branch.
    Color,
    /// Luminosity of the branch.
    Luminosity,
    /// Subtract.
    Subtract,
    /// Divide.
    Division,
}

/// Stacking of a blend branch relative to the upstream chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Branch drawn above the upstream chain.
    #[default]
    #[serde(alias = "above")]
    Foreground,
    /// Branch drawn below the upstream chain.
    #[serde(alias = "below")]
    Background,
}

/// Fieldless kind of an [`EffectDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTag {
    /// [`EffectDescriptor::Backdrop`].
    Backdrop,
    /// [`EffectDescriptor::SolidColor`].
    SolidColor,
    /// [`EffectDescriptor::Image`].
    Image,
    /// [`EffectDescriptor::Tile`].
    Tile,
    /// [`EffectDescriptor::Acrylic`].
    Acrylic,
    /// [`EffectDescriptor::Opacity`].
    Opacity,
    /// [`EffectDescriptor::Luminance`].
    Luminance,
    /// [`EffectDescriptor::Tint`].
    Tint,
    /// [`EffectDescriptor::Blur`].
    Blur,
    /// [`EffectDescriptor::Saturation`].
    Saturation,
    /// [`EffectDescriptor::Blend`].
    Blend,
}

impl EffectTag {
    /// Whether descriptors of this kind may start a pipeline.
    pub fn is_source(self) -> bool {
        matches!(
            self,
            Self::Backdrop | Self::SolidColor | Self::Image | Self::Tile | Self::Acrylic
        )
    }

    /// Name used in JSON and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::SolidColor => "solid_color",
            Self::Image => "image",
            Self::Tile => "tile",
            Self::Acrylic => "acrylic",
            Self::Opacity => "opacity",
            Self::Luminance => "luminance",
            Self::Tint => "tint",
            Self::Blur => "blur",
            Self::Saturation => "saturation",
            Self::Blend => "blend",
        }
    }
}

impl std::fmt::Display for EffectTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EffectDescriptor {
    /// Fieldless kind of this descriptor.
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Backdrop { .. } => EffectTag::Backdrop,
            Self::SolidColor { .. } => EffectTag::SolidColor,
            Self::Image { .. } => EffectTag::Image,
            Self::Tile { .. } => EffectTag::Tile,
            Self::Acrylic { .. } => EffectTag::Acrylic,
            Self::Opacity { .. } => EffectTag::Opacity,
            Self::Luminance => EffectTag::Luminance,
            Self::Tint { .. } => EffectTag::Tint,
            Self::Blur { .. } => EffectTag::Blur,
            Self::Saturation { .. } => EffectTag::Saturation,
            Self::Blend { .. } => EffectTag::Blend,
        }
    }

    /// Whether this descriptor may start a pipeline.
    pub fn is_source(&self) -> bool {
        self.tag().is_source()
    }

    /// In-app backdrop source.
    pub fn backdrop() -> Self {
        Self::Backdrop {
            source: BackdropKind::Backdrop,
        }
    }

    /// Host-window backdrop source.
    pub fn host_backdrop() -> Self {
        Self::Backdrop {
            source: BackdropKind::HostBackdrop,
        }
    }

    /// Flat color source.
    pub fn solid_color(color: Color) -> Self {
        Self::SolidColor { color }
    }

    /// Image source with default DPI and cache modes.
    pub fn image(uri: impl Into<String>) -> Self {
        Self::Image {
            uri: uri.into(),
            dpi_mode: DpiMode::default(),
            cache_mode: CacheMode::default(),
        }
    }

    /// Tiled image source with default DPI and cache modes.
    pub fn tiles(uri: impl Into<String>) -> Self {
        Self::Tile {
            uri: uri.into(),
            dpi_mode: DpiMode::default(),
            cache_mode: CacheMode::default(),
        }
    }

    /// Acrylic source without a noise texture.
    pub fn acrylic(source: BackdropKind, tint: Color, tint_mix: f64, blur_amount: f64) -> Self {
        Self::Acrylic {
            source,
            tint,
            tint_mix,
            blur_amount,
            texture_uri: None,
        }
    }

    /// Opacity transform.
    pub fn opacity(value: f64) -> Self {
        Self::Opacity { value }
    }

    /// Luminance-to-alpha transform.
    pub fn luminance() -> Self {
        Self::Luminance
    }

    /// Tint transform.
    pub fn tint(color: Color, opacity: f64) -> Self {
        Self::Tint { color, opacity }
    }

    /// Blur transform.
    pub fn blur(value: f64) -> Self {
        Self::Blur { value }
    }

    /// Saturation transform.
    pub fn saturation(value: f64) -> Self {
        Self::Saturation { value }
    }

    /// Blend against the branch `input`.
    pub fn blend(input: Vec<EffectDescriptor>, mode: BlendMode, placement: Placement) -> Self {
        Self::Blend {
            input,
            mode,
            placement,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/descriptor.rs"]
mod tests;

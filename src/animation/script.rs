use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    animation::builder::AnimationBuilder,
    animation::ease::Easing,
    animation::group::AnimationBackend,
    animation::target::StaticTarget,
    foundation::core::{Axis, Side, Vec2},
    foundation::error::{FxError, FxResult},
};

/// A JSON-loadable list of builder requests for one target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationScript {
    /// Element the steps animate.
    #[serde(default)]
    pub target: StaticTarget,
    /// Group duration; falls back to the builder default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Group delay; falls back to the builder default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
    /// Requests, applied in order.
    pub steps: Vec<AnimationStep>,
}

/// One builder request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "property", rename_all = "snake_case")]
pub enum AnimationStep {
    /// [`AnimationBuilder::opacity`].
    Opacity {
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<f64>,
        /// Final value.
        to: f64,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::translation_axis`].
    TranslationAxis {
        /// Animated axis.
        axis: Axis,
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<f64>,
        /// Final value.
        to: f64,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::translation`].
    Translation {
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<Vec2>,
        /// Final value.
        to: Vec2,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::scale`].
    Scale {
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<f64>,
        /// Final value.
        to: f64,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::rotation`].
    Rotation {
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<f64>,
        /// Final value.
        to: f64,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::size_axis`].
    SizeAxis {
        /// Animated axis.
        axis: Axis,
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<f64>,
        /// Final value.
        to: f64,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::size`].
    Size {
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<Vec2>,
        /// Final value.
        to: Vec2,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::offset_axis`].
    OffsetAxis {
        /// Animated axis.
        axis: Axis,
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<f64>,
        /// Final value.
        to: f64,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::offset`].
    Offset {
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<Vec2>,
        /// Final value.
        to: Vec2,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
    /// [`AnimationBuilder::clip`].
    Clip {
        /// Clipped side.
        side: Side,
        /// Start value; current value when omitted.
        #[serde(default)]
        from: Option<f64>,
        /// Final value.
        to: f64,
        /// Easing curve.
        #[serde(default)]
        easing: Easing,
    },
}

impl AnimationStep {
    /// Record this request on `builder`.
    pub fn apply<B: AnimationBackend>(
        &self,
        builder: &mut AnimationBuilder<'_, B>,
    ) -> FxResult<()> {
        match *self {
            Self::Opacity { from, to, easing } => {
                builder.opacity(from, to, easing);
            }
            Self::TranslationAxis {
                axis,
                from,
                to,
                easing,
            } => {
                builder.translation_axis(axis, from, to, easing);
            }
            Self::Translation { from, to, easing } => {
                builder.translation(from, to, easing);
            }
            Self::Scale { from, to, easing } => {
                builder.scale(from, to, easing);
            }
            Self::Rotation { from, to, easing } => {
                builder.rotation(from, to, easing);
            }
            Self::SizeAxis {
                axis,
                from,
                to,
                easing,
            } => {
                builder.size_axis(axis, from, to, easing)?;
            }
            Self::Size { from, to, easing } => {
                builder.size(from, to, easing)?;
            }
            Self::OffsetAxis {
                axis,
                from,
                to,
                easing,
            } => {
                builder.offset_axis(axis, from, to, easing)?;
            }
            Self::Offset { from, to, easing } => {
                builder.offset(from, to, easing)?;
            }
            Self::Clip {
                side,
                from,
                to,
                easing,
            } => {
                builder.clip(side, from, to, easing)?;
            }
        }
        Ok(())
    }
}

impl AnimationScript {
    /// Parse a script from JSON.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        serde_json::from_str(s).map_err(|e| FxError::serde(format!("animation script: {e}")))
    }

    /// Read and parse a JSON script file.
    pub fn from_path(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read animation script '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Apply the script's timing and every step to `builder`, stopping at the first rejected
    /// step.
    pub fn configure<B: AnimationBackend>(
        &self,
        builder: &mut AnimationBuilder<'_, B>,
    ) -> FxResult<()> {
        if let Some(ms) = self.duration_ms {
            builder.duration(Duration::from_millis(ms));
        }
        if let Some(ms) = self.delay_ms {
            builder.delay(Duration::from_millis(ms));
        }
        for (i, step) in self.steps.iter().enumerate() {
            step.apply(builder).inspect_err(|e| {
                tracing::debug!(step = i, error = %e, "animation step rejected");
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/script.rs"]
mod tests;
